//! Classify, serialize, and deserialize anything a worker can throw.
//!
//! When a failure crosses a thread, process, or network boundary, the
//! receiving side needs a uniform, inspectable error no matter what was
//! actually thrown on the far side. This crate provides the three
//! operations that make that work:
//!
//! - **Classification**: [`is_exception`], [`is_implicit_exception`], and
//!   [`is_of_error`] characterize a caught [`Throwable`] by its true
//!   construction, never by spoofable text.
//! - **Serialization**: [`serialize`] turns any throwable into a flat
//!   [`SerializedException`] record of `name`, `message`, and `stack`,
//!   degrading to the base `"Error"` kind instead of failing.
//! - **Deserialization**: [`deserialize`] rebuilds a live [`Exception`]
//!   on the receiving side, reconstructing recognized built-in subtypes
//!   by name and falling back to the base kind for everything else.
//!
//! Only the built-in kinds in [`ExceptionKind`] round-trip their name.
//! Custom error types flatten to `"Error"`: the far side may not have the
//! matching type, and a uniformly receivable record beats a faithful name
//! nobody can reconstruct.
//!
//! # Examples
//!
//! ```
//! use thrown::{deserialize, serialize, Exception, ExceptionKind, Throwable};
//!
//! let thrown = Throwable::from(Exception::with_kind(
//!     ExceptionKind::Syntax,
//!     "unexpected token",
//! ));
//!
//! let record = serialize(&thrown);
//! assert_eq!(record.name, "SyntaxError");
//!
//! // ...the record crosses the boundary as three plain strings...
//!
//! let revived = deserialize(record);
//! assert_eq!(revived.name(), "SyntaxError");
//! assert_eq!(revived.message(), "unexpected token");
//! ```
//!
//! Values that are not errors at all still produce usable records:
//!
//! ```
//! use thrown::{is_exception, serialize, Throwable};
//!
//! let thrown = Throwable::from(5);
//! assert!(!is_exception(&thrown));
//!
//! let record = serialize(&thrown);
//! assert_eq!(record.name, "Error");
//! assert_eq!(record.message, "5");
//! ```

pub mod classify;
pub mod exception;
pub mod throwable;
pub mod wire;

pub use classify::{is_exception, is_implicit_exception, is_of_error};
pub use exception::{Exception, ExceptionKind};
pub use throwable::Throwable;
pub use wire::{deserialize, serialize, SerializedException, WireError, WireResult};
