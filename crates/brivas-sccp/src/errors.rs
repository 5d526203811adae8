//! Error types for the SCCP address codec

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, SccpError>;

/// SCCP party address errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SccpError {
    /// The buffer ends before a field the header says is present
    #[error("Truncated input: need {needed} bytes, have {available}")]
    TruncatedInput {
        needed: usize,
        available: usize,
    },

    /// The declared length does not cover the fixed fields the indicator announces
    #[error("Length mismatch: declared length {declared}, fixed fields end at offset {consumed}")]
    LengthMismatch {
        declared: u8,
        consumed: usize,
    },

    /// Output buffer handed to the encoder is too short
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
    },

    #[error("Field {field} out of range: {value} > {max}")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// Encoded parameter would not fit a one-byte length
    #[error("Parameter too long: {0} bytes")]
    ParameterTooLong(usize),

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SccpError {
    /// True for the failures that mean "not enough bytes"
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    /// Signed digit length implied by a [`SccpError::LengthMismatch`]
    pub fn info_length(&self) -> Option<isize> {
        match self {
            Self::LengthMismatch { declared, consumed } => {
                Some(*declared as isize + 1 - *consumed as isize)
            }
            _ => None,
        }
    }
}
