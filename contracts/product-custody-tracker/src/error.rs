use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Input validation errors
    InvalidSerialNumber = 1,
    InvalidDescription = 2,
    InvalidStageName = 3,
    NoStages = 4,
    TooManyStages = 5,

    // Authorization errors
    UnauthorizedAccess = 6,

    // Counter errors
    CounterOverflow = 7,

    // Stage advance guards
    InvalidStageIndex = 8,
    StageNotCompleted = 9,
    ProductAlreadyDelivered = 10,

    // Record errors
    ProductAlreadyExists = 11,
    ProductNotFound = 12,
    EventNotFound = 13,
    InvalidEventAddress = 14,
}
