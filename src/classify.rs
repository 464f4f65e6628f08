//! The classifier: three pure predicates that characterize a caught
//! throwable before anything tries to read fields off it.
//!
//! All three answer from the [`Throwable`] tag and the trusted kind on
//! [`Exception`](crate::Exception). None of them inspect message text,
//! stack text, or any other payload-controlled data, so a value cannot
//! talk its way into a classification it was not constructed with.
//!
//! The predicates overlap deliberately: [`is_implicit_exception`] and
//! [`is_of_error`] each imply [`is_exception`], and for a genuine
//! exception they split the hierarchy in two. A built-in subtype satisfies
//! [`is_implicit_exception`] but not [`is_of_error`]; a base-kind
//! exception satisfies [`is_of_error`] but not [`is_implicit_exception`].
//!
//! # Examples
//!
//! ```
//! use thrown::{is_exception, is_implicit_exception, is_of_error};
//! use thrown::{Exception, ExceptionKind, Throwable};
//!
//! let base = Throwable::from(Exception::new("boom"));
//! assert!(is_exception(&base));
//! assert!(!is_implicit_exception(&base));
//! assert!(is_of_error(&base));
//!
//! let subtype = Throwable::from(Exception::with_kind(ExceptionKind::Syntax, "bad token"));
//! assert!(is_exception(&subtype));
//! assert!(is_implicit_exception(&subtype));
//! assert!(!is_of_error(&subtype));
//!
//! let number = Throwable::from(5);
//! assert!(!is_exception(&number));
//! ```

use crate::exception::ExceptionKind;
use crate::throwable::Throwable;

/// Returns true when the value is usable as an error: a genuine member of
/// the exception hierarchy, or any other value implementing the error
/// protocol.
///
/// Thrown strings, numbers, structured data, and opaque panic payloads
/// are not errors and return false.
pub fn is_exception(value: &Throwable) -> bool {
    matches!(value, Throwable::Exception(_) | Throwable::Foreign(_))
}

/// Returns true when the value is a genuine built-in error subtype, such
/// as a `SyntaxError` or `TypeError`.
///
/// False for base-kind exceptions, for foreign errors (whatever their
/// display text claims), and for every non-error value.
pub fn is_implicit_exception(value: &Throwable) -> bool {
    matches!(value, Throwable::Exception(exception) if exception.kind().is_subtype())
}

/// Returns true when the value is a genuine exception of exactly the base
/// kind: constructed as a plain `Error`, not as one of the built-in
/// subtypes.
///
/// False for subtypes, for foreign errors, and for every non-error value.
pub fn is_of_error(value: &Throwable) -> bool {
    matches!(value, Throwable::Exception(exception) if exception.kind() == ExceptionKind::Error)
}
