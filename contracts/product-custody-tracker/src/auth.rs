use soroban_sdk::Address;

use crate::types::{Product, ProductStatus, StageAuthority};

/// Resolves the address currently allowed to mutate the product.
///
/// Non-staged products answer to their owner. Staged products answer to
/// the active stage: an assigned stage authority, or the current product
/// owner when the stage inherits. Once every stage has completed, nobody
/// holds authority.
pub fn current_authority(product: &Product) -> Option<Address> {
    if !product.use_stages {
        return Some(product.owner.clone());
    }
    if product.current_stage_index >= product.stages.len() {
        return None;
    }
    match product.stages.get(product.current_stage_index) {
        Some(stage) => match stage.owner {
            StageAuthority::Assigned(authority) => Some(authority),
            StageAuthority::Inherit => Some(product.owner.clone()),
        },
        None => None,
    }
}

/// The gate evaluated before any mutation of an existing product.
pub fn is_authorized(product: &Product, signer: &Address) -> bool {
    match current_authority(product) {
        Some(authority) => authority == *signer,
        None => false,
    }
}

/// The single ownership-change path, shared by stage hand-off and manual
/// transfer. Counters and stage bookkeeping are deliberately untouched.
pub fn apply_ownership_change(product: &mut Product, new_owner: Address) {
    product.owner = new_owner;
    product.status = ProductStatus::Transferred;
}
