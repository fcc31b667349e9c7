use soroban_sdk::{Address, BytesN, Env, String};

use crate::auth;
use crate::derivation;
use crate::error::ContractError;
use crate::events;
use crate::product;
use crate::storage;
use crate::types::{EventType, Product, ProductStatus, StageAuthority, SupplyChainEvent};
use crate::utils;

struct StageAdvance {
    stage_index: u32,
    stage_name: String,
    new_owner: Option<Address>,
    delivered: bool,
}

/// Appends a supply chain event and, for `Complete` events on staged
/// products, advances the active stage.
///
/// The caller supplies the event id it expects to write to; the id is
/// recomputed from the product's counter and a mismatch aborts, so a
/// caller can never claim a slot other than the next one. A concurrent
/// append that loses the race fails the same way after the counter has
/// moved on.
pub fn log_event(
    env: &Env,
    product_id: &BytesN<32>,
    event_id: &BytesN<32>,
    signer: &Address,
    event_type: EventType,
    description: String,
) -> Result<(), ContractError> {
    let mut product = product::get_product(env, product_id)?;

    if !auth::is_authorized(&product, signer) {
        return Err(ContractError::UnauthorizedAccess);
    }
    if !utils::is_valid_description(&description) {
        return Err(ContractError::InvalidDescription);
    }

    let expected_id = derivation::derive_event_id(env, product_id, product.events_counter);
    if *event_id != expected_id {
        return Err(ContractError::InvalidEventAddress);
    }

    let next_counter = product
        .events_counter
        .checked_add(1)
        .ok_or(ContractError::CounterOverflow)?;

    let timestamp = env.ledger().timestamp();
    // The event records the stage that was active when it was logged,
    // even when this same event completes it.
    let stage_name = if product.use_stages {
        match product.stages.get(product.current_stage_index) {
            Some(stage) => stage.name.clone(),
            None => String::from_str(env, ""),
        }
    } else {
        String::from_str(env, "")
    };

    let event_index = product.events_counter;
    let event = SupplyChainEvent {
        product: product_id.clone(),
        event_type: event_type.clone(),
        description,
        stage_name: stage_name.clone(),
        timestamp,
        event_index,
    };
    product.events_counter = next_counter;

    let advance = if event_type == EventType::Complete && product.use_stages {
        Some(complete_current_stage(&mut product)?)
    } else {
        // Ongoing events, and Complete events on free-form products,
        // force no status transition.
        None
    };

    storage::set_event(env, event_id, &event);
    storage::set_product(env, product_id, &product);

    events::emit_event_logged(
        env,
        product_id.clone(),
        event_id.clone(),
        event_index,
        event_type,
        stage_name,
        signer.clone(),
        timestamp,
    );
    if let Some(advance) = advance {
        events::emit_stage_completed(
            env,
            product_id.clone(),
            advance.stage_index,
            advance.stage_name,
            advance.new_owner,
            timestamp,
        );
        if advance.delivered {
            events::emit_product_delivered(env, product_id.clone(), timestamp);
        }
    }

    Ok(())
}

/// Marks the active stage completed, hands custody to its assigned owner
/// when it has one, and moves the stage pointer forward. Completing the
/// last stage delivers the product, after which no signer passes the
/// authorization gate.
///
/// The guards cannot fire once authorization has passed; they protect the
/// stage pointer against a record that went out of sync.
fn complete_current_stage(product: &mut Product) -> Result<StageAdvance, ContractError> {
    if product.status == ProductStatus::Delivered {
        return Err(ContractError::ProductAlreadyDelivered);
    }
    let stage_index = product.current_stage_index;
    if stage_index >= product.stages.len() {
        return Err(ContractError::InvalidStageIndex);
    }
    let mut stage = product
        .stages
        .get(stage_index)
        .ok_or(ContractError::InvalidStageIndex)?;
    if stage.completed {
        return Err(ContractError::StageNotCompleted);
    }

    stage.completed = true;
    let stage_name = stage.name.clone();
    // The completing stage's own owner is the hand-off target.
    let new_owner = match stage.owner.clone() {
        StageAuthority::Assigned(next_owner) => Some(next_owner),
        StageAuthority::Inherit => None,
    };
    product.stages.set(stage_index, stage);

    if let Some(next_owner) = new_owner.clone() {
        auth::apply_ownership_change(product, next_owner);
    }

    product.current_stage_index = stage_index + 1;
    let delivered = product.current_stage_index >= product.stages.len();
    if delivered {
        product.status = ProductStatus::Delivered;
    }

    Ok(StageAdvance {
        stage_index,
        stage_name,
        new_owner,
        delivered,
    })
}

pub fn get_event(env: &Env, event_id: &BytesN<32>) -> Result<SupplyChainEvent, ContractError> {
    storage::get_event(env, event_id).ok_or(ContractError::EventNotFound)
}
