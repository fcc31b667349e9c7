use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

// Length budgets shared by validation and id derivation
pub const MAX_SERIAL_NUMBER_LEN: u32 = 50;
pub const MAX_DESCRIPTION_LEN: u32 = 200;
pub const MAX_STAGE_NAME_LEN: u32 = 50;
pub const MAX_STAGES: u32 = 10;

/// Product status in the supply chain
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductStatus {
    Created,
    InTransit,
    Received,
    Delivered,
    Transferred,
}

/// Event kinds a custodian can log against a product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventType {
    Ongoing,
    Complete,
}

/// Who may act on a stage, and who receives custody once it completes.
/// `Inherit` defers both to whoever currently owns the product.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageAuthority {
    Inherit,
    Assigned(Address),
}

/// Creation-time form of a stage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StageInput {
    pub name: String,
    pub owner: StageAuthority,
}

/// An ordered custody phase; only `completed` evolves after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stage {
    pub name: String,
    pub owner: StageAuthority,
    pub completed: bool,
}

/// The traceable entity, one per (owner, serial_number) pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub owner: Address,
    pub serial_number: String,
    pub description: String,
    pub status: ProductStatus,
    pub created_at: u64,
    pub events_counter: u64,
    pub stages: Vec<Stage>,
    pub current_stage_index: u32,
    pub use_stages: bool,
}

/// An immutable, sequentially indexed log entry against a product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyChainEvent {
    pub product: BytesN<32>,
    pub event_type: EventType,
    pub description: String,
    pub stage_name: String,
    pub timestamp: u64,
    pub event_index: u64,
}
