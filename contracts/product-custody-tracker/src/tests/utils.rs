#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};

use crate::{
    derivation, ProductCustodyTracker, ProductCustodyTrackerClient, StageAuthority, StageInput,
};

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: ProductCustodyTrackerClient<'static>,
}

pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ProductCustodyTracker, ());
    let client = ProductCustodyTrackerClient::new(&env, &contract_id);

    TestContext {
        env,
        contract_id,
        client,
    }
}

pub fn assigned(env: &Env, name: &str, owner: &Address) -> StageInput {
    StageInput {
        name: String::from_str(env, name),
        owner: StageAuthority::Assigned(owner.clone()),
    }
}

pub fn inherited(env: &Env, name: &str) -> StageInput {
    StageInput {
        name: String::from_str(env, name),
        owner: StageAuthority::Inherit,
    }
}

/// Id of the next event slot, derived the same way the contract does it
pub fn next_event_id(ctx: &TestContext, product_id: &BytesN<32>) -> BytesN<32> {
    let product = ctx.client.get_product(product_id);
    derivation::derive_event_id(&ctx.env, product_id, product.events_counter)
}

pub fn string_of_len(env: &Env, len: usize) -> String {
    let bytes = [b'x'; 256];
    String::from_str(env, core::str::from_utf8(&bytes[..len]).unwrap())
}
