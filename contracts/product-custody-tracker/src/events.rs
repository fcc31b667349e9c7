use soroban_sdk::{contracttype, Address, BytesN, Env, String};

use crate::types::EventType;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductInitializedEvent {
    pub product_id: BytesN<32>,
    pub owner: Address,
    pub serial_number: String,
    pub stage_count: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventLoggedEvent {
    pub product_id: BytesN<32>,
    pub event_id: BytesN<32>,
    pub event_index: u64,
    pub event_type: EventType,
    pub stage_name: String,
    pub signer: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StageCompletedEvent {
    pub product_id: BytesN<32>,
    pub stage_index: u32,
    pub stage_name: String,
    pub new_owner: Option<Address>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductDeliveredEvent {
    pub product_id: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub product_id: BytesN<32>,
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

pub fn emit_product_initialized(
    env: &Env,
    product_id: BytesN<32>,
    owner: Address,
    serial_number: String,
    stage_count: u32,
    timestamp: u64,
) {
    let event = ProductInitializedEvent {
        product_id,
        owner,
        serial_number,
        stage_count,
        timestamp,
    };
    env.events().publish(("product_initialized",), event);
}

pub fn emit_event_logged(
    env: &Env,
    product_id: BytesN<32>,
    event_id: BytesN<32>,
    event_index: u64,
    event_type: EventType,
    stage_name: String,
    signer: Address,
    timestamp: u64,
) {
    let event = EventLoggedEvent {
        product_id,
        event_id,
        event_index,
        event_type,
        stage_name,
        signer,
        timestamp,
    };
    env.events().publish(("event_logged",), event);
}

pub fn emit_stage_completed(
    env: &Env,
    product_id: BytesN<32>,
    stage_index: u32,
    stage_name: String,
    new_owner: Option<Address>,
    timestamp: u64,
) {
    let event = StageCompletedEvent {
        product_id,
        stage_index,
        stage_name,
        new_owner,
        timestamp,
    };
    env.events().publish(("stage_completed",), event);
}

pub fn emit_product_delivered(env: &Env, product_id: BytesN<32>, timestamp: u64) {
    let event = ProductDeliveredEvent {
        product_id,
        timestamp,
    };
    env.events().publish(("product_delivered",), event);
}

pub fn emit_ownership_transferred(
    env: &Env,
    product_id: BytesN<32>,
    previous_owner: Address,
    new_owner: Address,
    timestamp: u64,
) {
    let event = OwnershipTransferredEvent {
        product_id,
        previous_owner,
        new_owner,
        timestamp,
    };
    env.events().publish(("ownership_transferred",), event);
}
