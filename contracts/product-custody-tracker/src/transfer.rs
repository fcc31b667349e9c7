use soroban_sdk::{Address, BytesN, Env};

use crate::auth;
use crate::error::ContractError;
use crate::events;
use crate::product;
use crate::storage;

/// Owner-only full-ownership handover.
///
/// This is a top-level action that bypasses stage logic entirely: the
/// active stage, its assigned authority, and the event counter are left
/// untouched. A staged product keeps answering to its active stage's
/// authority afterwards.
pub fn transfer_ownership(
    env: &Env,
    product_id: &BytesN<32>,
    current_owner: &Address,
    new_owner: &Address,
) -> Result<(), ContractError> {
    let mut product = product::get_product(env, product_id)?;

    if *current_owner != product.owner {
        return Err(ContractError::UnauthorizedAccess);
    }

    let previous_owner = product.owner.clone();
    auth::apply_ownership_change(&mut product, new_owner.clone());
    storage::set_product(env, product_id, &product);

    events::emit_ownership_transferred(
        env,
        product_id.clone(),
        previous_owner,
        new_owner.clone(),
        env.ledger().timestamp(),
    );

    Ok(())
}
