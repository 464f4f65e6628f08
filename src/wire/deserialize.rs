//! The deserializer: rebuilds a live exception from a wire record.

use crate::exception::{Exception, ExceptionKind};
use crate::wire::record::SerializedException;

/// Rebuilds a live, throwable [`Exception`] from a record.
///
/// The record's `name` selects the concrete kind: each recognized
/// built-in subtype name reconstructs that subtype, while `"Error"` and
/// every unrecognized name fall back to the base kind. The `message` and
/// `stack` fields are force-assigned exactly as transmitted, so the
/// reconstructed object reports the sender's trace rather than a locally
/// captured one.
///
/// Never fails: any record with three string fields produces a live
/// error, ready to be returned or re-thrown on this side of the boundary.
///
/// # Examples
///
/// ```
/// use thrown::{deserialize, SerializedException};
///
/// let record = SerializedException::new("SyntaxError", "bad token", "SyntaxError: bad token");
/// let exception = deserialize(record);
///
/// assert_eq!(exception.name(), "SyntaxError");
/// assert_eq!(exception.message(), "bad token");
/// assert_eq!(exception.stack(), "SyntaxError: bad token");
/// ```
pub fn deserialize(record: SerializedException) -> Exception {
    let kind = match ExceptionKind::from_name(&record.name) {
        Some(kind) => kind,
        None => {
            tracing::debug!(
                "Unrecognized error kind {:?}, falling back to the base kind",
                record.name
            );
            ExceptionKind::Error
        }
    };

    Exception::from_wire(kind, record.message, record.stack)
}
