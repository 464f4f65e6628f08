//! The serializer: converts any throwable into a transport-safe record.
//!
//! Serialization is total. Every input, however hostile or malformed,
//! produces a [`SerializedException`] with all three fields populated:
//!
//! - A genuine [`Exception`](crate::Exception) keeps its kind name, its
//!   message, and its construction-time stack.
//! - A foreign error keeps its display text as the message but is
//!   flattened to the base `"Error"` name. Its `source()` chain is
//!   appended to the stack as `caused by:` lines.
//! - A non-error value (string, number, structured data, opaque payload)
//!   is stringified into the message, named `"Error"`, and given a
//!   synthesized stack noting that the thrown value was not an error.
//!
//! The record's `name` is derived from the trusted kind tag alone. No
//! payload-controlled text can place a foreign value under a built-in
//! subtype name.

use std::error::Error as StdError;

use crate::exception::{captured_frames, stack_header, ExceptionKind};
use crate::throwable::Throwable;
use crate::wire::record::SerializedException;

/// Converts any throwable into a plain record.
///
/// Never fails and never panics; inputs outside the exception hierarchy
/// degrade to the base `"Error"` name instead of being rejected.
///
/// # Examples
///
/// ```
/// use thrown::{serialize, Throwable};
///
/// let record = serialize(&Throwable::from(5));
/// assert_eq!(record.name, "Error");
/// assert_eq!(record.message, "5");
/// assert!(!record.stack.is_empty());
/// ```
pub fn serialize(value: &Throwable) -> SerializedException {
    match value {
        Throwable::Exception(exception) => SerializedException::from(exception),
        Throwable::Foreign(error) => foreign_record(error.as_ref()),
        other => synthesized_record(other),
    }
}

/// Builds the record for an error outside the hierarchy: base name, the
/// error's own text as message, and its cause chain in the stack.
fn foreign_record(error: &(dyn StdError + Send + Sync)) -> SerializedException {
    tracing::debug!("Flattening foreign error to the base kind: {}", error);

    let message = error.to_string();
    let mut stack = stack_header(ExceptionKind::Error.name(), &message);

    let mut source = error.source();
    while let Some(cause) = source {
        stack.push_str("\n    caused by: ");
        stack.push_str(&cause.to_string());
        source = cause.source();
    }

    SerializedException::new(ExceptionKind::Error.name(), message, stack)
}

/// Builds the record for a non-error value: base name, the stringified
/// value as message, and a synthesized stack.
fn synthesized_record(value: &Throwable) -> SerializedException {
    tracing::debug!(
        "Serializing non-error throwable ({}) as the base kind",
        value.label()
    );

    let message = value.to_string();
    let mut stack = stack_header(ExceptionKind::Error.name(), &message);
    stack.push_str("\n    (synthesized from a thrown ");
    stack.push_str(value.label());
    stack.push_str("; not a genuine error)");
    if let Some(frames) = captured_frames() {
        stack.push('\n');
        stack.push_str(&frames);
    }

    SerializedException::new(ExceptionKind::Error.name(), message, stack)
}
