use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckInError {
    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),
    #[error("parking is full ({capacity} vehicles)")]
    Full { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckOutError {
    #[error("no parked vehicle with plate {0}")]
    NotFound(String),
}
