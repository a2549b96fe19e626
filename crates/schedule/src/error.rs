use time::{Date, Weekday};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid subscription length: {0} weeks (expected 1, 2 or 4)")]
    InvalidWeeks(u32),

    #[error("invalid delivery frequency: {0}")]
    InvalidFrequency(String),

    #[error("three-times-a-week deliveries cannot start on {0}")]
    InvalidStartWeekday(Weekday),

    #[error("deliveries starting {0} run past the supported date range")]
    OutOfRange(Date),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
