use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::types::MAX_SERIAL_NUMBER_LEN;

const PRODUCT_TAG: &[u8] = b"product";
const EVENT_TAG: &[u8] = b"event";

/// Derives the product id from the owner and serial number.
///
/// sha256 over the domain tag, the owner's XDR bytes, and the serial
/// number's raw UTF-8 bytes, unprefixed. Two products with the same
/// (owner, serial_number) pair always collide here, which is the
/// registry's uniqueness constraint.
///
/// `serial_number` must already satisfy the length budget.
pub fn derive_product_id(env: &Env, owner: &Address, serial_number: &String) -> BytesN<32> {
    let mut data = Bytes::from_slice(env, PRODUCT_TAG);
    data.append(&owner.clone().to_xdr(env));

    let len = serial_number.len() as usize;
    let mut buf = [0u8; MAX_SERIAL_NUMBER_LEN as usize];
    serial_number.copy_into_slice(&mut buf[..len]);
    data.append(&Bytes::from_slice(env, &buf[..len]));

    env.crypto().sha256(&data).into()
}

/// Derives the id of the `event_index`-th event of a product.
///
/// sha256 over the domain tag, the product id, and the index as
/// fixed-width little-endian bytes. Every event id encodes its own
/// ordinal, so ordinals stay collision-free without a shared counter.
pub fn derive_event_id(env: &Env, product_id: &BytesN<32>, event_index: u64) -> BytesN<32> {
    let mut data = Bytes::from_slice(env, EVENT_TAG);
    data.append(&Bytes::from_slice(env, &product_id.to_array()));
    data.append(&Bytes::from_slice(env, &event_index.to_le_bytes()));

    env.crypto().sha256(&data).into()
}
