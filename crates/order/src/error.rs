use omnyom_schedule::{Ineligibility, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("start date not selectable: {0}")]
    StartDate(Ineligibility),

    #[error("order already exists: {0}")]
    DuplicateId(String),

    #[error("{0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;
