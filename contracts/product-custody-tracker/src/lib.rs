#![no_std]

mod auth;
mod derivation;
mod error;
mod event_log;
mod events;
mod product;
mod storage;
mod transfer;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use error::ContractError;
pub use events::*;
pub use types::*;

#[contract]
pub struct ProductCustodyTracker;

#[contractimpl]
impl ProductCustodyTracker {
    /// Register a new product, optionally with an ordered stage list.
    /// Returns the product's derived id.
    pub fn initialize_product(
        env: Env,
        owner: Address,
        serial_number: String,
        description: String,
        stages: Option<Vec<StageInput>>,
    ) -> Result<BytesN<32>, ContractError> {
        owner.require_auth();
        product::initialize_product(&env, &owner, serial_number, description, stages)
    }

    /// Append a supply chain event for a product. `event_id` must be the
    /// id derived from the product's current event counter.
    pub fn log_event(
        env: Env,
        product_id: BytesN<32>,
        event_id: BytesN<32>,
        signer: Address,
        event_type: EventType,
        description: String,
    ) -> Result<(), ContractError> {
        signer.require_auth();
        event_log::log_event(&env, &product_id, &event_id, &signer, event_type, description)
    }

    /// Hand over top-level ownership of a product
    pub fn transfer_ownership(
        env: Env,
        product_id: BytesN<32>,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        current_owner.require_auth();
        transfer::transfer_ownership(&env, &product_id, &current_owner, &new_owner)
    }

    /// Fetch a product record by its derived id
    pub fn get_product(env: Env, product_id: BytesN<32>) -> Result<Product, ContractError> {
        product::get_product(&env, &product_id)
    }

    /// Fetch a logged event by its derived id
    pub fn get_event(env: Env, event_id: BytesN<32>) -> Result<SupplyChainEvent, ContractError> {
        event_log::get_event(&env, &event_id)
    }
}
