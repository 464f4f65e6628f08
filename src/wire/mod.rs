//! Wire format support: the serialized record, the total conversion
//! operations in both directions, and the JSON codec.
//!
//! The flow across a boundary is always the same shape:
//!
//! ```text
//! Throwable --serialize--> SerializedException --transport--> SerializedException --deserialize--> Exception
//! ```
//!
//! [`serialize()`] and [`deserialize()`] never fail; only the JSON codec
//! on [`SerializedException`] returns a [`WireResult`].

mod deserialize;
mod record;
mod serialize;

pub use deserialize::deserialize;
pub use record::{SerializedException, WireError, WireResult};
pub use serialize::serialize;
