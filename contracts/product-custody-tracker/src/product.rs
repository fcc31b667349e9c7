use soroban_sdk::{Address, BytesN, Env, String, Vec};

use crate::derivation;
use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::{Product, ProductStatus, Stage, StageInput, MAX_STAGES};
use crate::utils;

/// Registers a new product at its derived id and returns that id.
///
/// Validation runs in full before anything is written; re-invocation with
/// the same (owner, serial_number) pair always fails, there is no
/// idempotent retry path.
pub fn initialize_product(
    env: &Env,
    owner: &Address,
    serial_number: String,
    description: String,
    stages: Option<Vec<StageInput>>,
) -> Result<BytesN<32>, ContractError> {
    if !utils::is_valid_serial_number(&serial_number) {
        return Err(ContractError::InvalidSerialNumber);
    }
    if !utils::is_valid_description(&description) {
        return Err(ContractError::InvalidDescription);
    }

    let use_stages = stages.is_some();
    let mut stage_list = Vec::new(env);
    if let Some(inputs) = stages {
        if inputs.is_empty() {
            return Err(ContractError::NoStages);
        }
        if inputs.len() > MAX_STAGES {
            return Err(ContractError::TooManyStages);
        }
        for input in inputs.iter() {
            if !utils::is_valid_stage_name(&input.name) {
                return Err(ContractError::InvalidStageName);
            }
            stage_list.push_back(Stage {
                name: input.name.clone(),
                owner: input.owner,
                completed: false,
            });
        }
    }

    let product_id = derivation::derive_product_id(env, owner, &serial_number);
    if storage::has_product(env, &product_id) {
        return Err(ContractError::ProductAlreadyExists);
    }

    let timestamp = env.ledger().timestamp();
    let stage_count = stage_list.len();
    let product = Product {
        owner: owner.clone(),
        serial_number: serial_number.clone(),
        description,
        status: ProductStatus::Created,
        created_at: timestamp,
        events_counter: 0,
        stages: stage_list,
        current_stage_index: 0,
        use_stages,
    };
    storage::set_product(env, &product_id, &product);

    events::emit_product_initialized(
        env,
        product_id.clone(),
        owner.clone(),
        serial_number,
        stage_count,
        timestamp,
    );

    Ok(product_id)
}

pub fn get_product(env: &Env, product_id: &BytesN<32>) -> Result<Product, ContractError> {
    storage::get_product(env, product_id).ok_or(ContractError::ProductNotFound)
}
