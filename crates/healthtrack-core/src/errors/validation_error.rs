/// Input validation failures. Block submission; never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub fn out_of_range(field: &str, value: impl ToString, expected: &str) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}
