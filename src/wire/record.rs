//! The wire contract: the flat record that crosses a boundary, plus the
//! JSON codec most transports use to move it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the wire codec.
///
/// Only the codec can fail. [`serialize`](crate::serialize) and
/// [`deserialize`](crate::deserialize) are total and never return one of
/// these.
#[derive(Error, Debug)]
pub enum WireError {
    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for wire codec operations.
pub type WireResult<T> = Result<T, WireError>;

/// The transport-safe representation of a throwable: three plain string
/// fields with no versioning and no nesting.
///
/// `name` identifies the error kind (`"Error"`, `"SyntaxError"`, ...);
/// `message` may be empty; `stack` carries the human-oriented trace text.
/// Records produced by [`serialize`](crate::serialize) always have a
/// non-empty `name` and `stack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedException {
    /// Wire name of the error kind.
    pub name: String,
    /// Human-readable message; possibly empty.
    pub message: String,
    /// Human-oriented stack text.
    pub stack: String,
}

impl SerializedException {
    /// Creates a record from its three fields.
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Encodes the record as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Json`] if encoding fails, which for three
    /// string fields effectively means never.
    pub fn to_json(&self) -> WireResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Json`] when the text is not a JSON object
    /// carrying the three string fields.
    pub fn from_json(json: &str) -> WireResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
