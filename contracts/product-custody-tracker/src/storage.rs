use soroban_sdk::{contracttype, BytesN, Env};

use crate::types::{Product, SupplyChainEvent};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Product(BytesN<32>), // derived product id
    Event(BytesN<32>),   // derived event id
}

pub fn has_product(env: &Env, product_id: &BytesN<32>) -> bool {
    let key = DataKey::Product(product_id.clone());
    env.storage().persistent().has(&key)
}

pub fn get_product(env: &Env, product_id: &BytesN<32>) -> Option<Product> {
    let key = DataKey::Product(product_id.clone());
    env.storage().persistent().get(&key)
}

pub fn set_product(env: &Env, product_id: &BytesN<32>, product: &Product) {
    let key = DataKey::Product(product_id.clone());
    env.storage().persistent().set(&key, product);
}

pub fn get_event(env: &Env, event_id: &BytesN<32>) -> Option<SupplyChainEvent> {
    let key = DataKey::Event(event_id.clone());
    env.storage().persistent().get(&key)
}

pub fn set_event(env: &Env, event_id: &BytesN<32>, event: &SupplyChainEvent) {
    let key = DataKey::Event(event_id.clone());
    env.storage().persistent().set(&key, event);
}
