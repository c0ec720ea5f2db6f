//! Error types module
//!
//! Unified error type for the descriptor library. Constructing a
//! descriptor can never fail; errors arise only at the dynamic attribute
//! boundary and when decoding JSON.

use crate::models::AssetField;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Wrong value type for {field}: expected {expected}")]
    WrongType {
        field: AssetField,
        expected: &'static str,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
