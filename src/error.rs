use thiserror::Error;

/// Domain-level errors for time-of-day construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A component or raw second count fell outside its valid bounds
    #[error("{field} must be between {min}-{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// Textual input did not decompose into three integer fields
    #[error("time string must be in HH:MM:SS format, got {input:?}")]
    Malformed { input: String },
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
