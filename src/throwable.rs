//! The input model for classification: anything a worker can throw.
//!
//! A failing task does not always hand back a well-behaved error. It may
//! panic with a string, abort with a number or a blob of structured data,
//! or return an error type the receiving side has never heard of.
//! [`Throwable`] is the tagged union of those possibilities, and the
//! constructors here recover one from the places Rust actually surfaces
//! thrown values: panic payloads, joined threads, and failed tokio tasks.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

use tokio::task::JoinError;

use crate::exception::Exception;

/// Any value that was thrown and caught.
///
/// The variant is the classification: predicates and serialization branch
/// on the tag, never on printable fields, so nothing a payload writes into
/// its own text can change how it is treated.
#[derive(Debug)]
pub enum Throwable {
    /// A genuine member of the exception hierarchy.
    Exception(Exception),
    /// Any other value implementing [`std::error::Error`]: structurally an
    /// error, but outside the hierarchy.
    Foreign(Box<dyn StdError + Send + Sync>),
    /// A thrown string, e.g. a `panic!` message.
    Text(String),
    /// A thrown number. Stored as `f64`, so integers beyond 2^53 lose
    /// precision.
    Number(f64),
    /// Thrown structured data.
    Data(serde_json::Value),
    /// A panic payload whose type could not be recovered.
    Opaque,
}

impl Throwable {
    /// Wraps any error-protocol value.
    ///
    /// A boxed [`Exception`] is reclaimed into the
    /// [`Exception`](Throwable::Exception) variant, so routing a genuine
    /// exception through the generic path cannot demote it to a foreign
    /// look-alike.
    pub fn foreign<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(error);
        Self::from(boxed)
    }

    /// Recovers the payload of an unwound panic, as returned by
    /// [`std::panic::catch_unwind`] or [`std::thread::JoinHandle::join`].
    ///
    /// Tries the common payload types in order: a thrown [`Exception`] or
    /// [`Throwable`], then strings, then numbers, then structured data. A
    /// payload of any other type becomes [`Throwable::Opaque`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Exception>() {
            Ok(exception) => return Self::Exception(*exception),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Throwable>() {
            Ok(throwable) => return *throwable,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(text) => return Self::Text(*text),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(text) => return Self::Text((*text).to_string()),
            Err(payload) => payload,
        };
        if let Some(number) = numeric_payload(&*payload) {
            return Self::Number(number);
        }
        match payload.downcast::<serde_json::Value>() {
            Ok(value) => Self::Data(*value),
            Err(_) => {
                tracing::debug!("panic payload of unknown type, treating as opaque");
                Self::Opaque
            }
        }
    }

    /// Recovers the throwable from a failed tokio task.
    ///
    /// A panicked task yields its panic payload via
    /// [`Throwable::from_panic`]; a cancelled task yields the join error
    /// itself, which is an ordinary error value.
    pub fn from_join_error(error: JoinError) -> Self {
        if error.is_panic() {
            Self::from_panic(error.into_panic())
        } else {
            Self::foreign(error)
        }
    }

    /// A short label for the payload class, used in synthesized stack
    /// notes and diagnostics.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Throwable::Exception(_) => "exception",
            Throwable::Foreign(_) => "foreign error",
            Throwable::Text(_) => "string",
            Throwable::Number(_) => "number",
            Throwable::Data(_) => "structured value",
            Throwable::Opaque => "opaque payload",
        }
    }
}

/// Extracts a numeric panic payload from the primitive widths `panic_any`
/// is realistically called with.
fn numeric_payload(payload: &(dyn Any + Send)) -> Option<f64> {
    if let Some(number) = payload.downcast_ref::<i32>() {
        return Some(f64::from(*number));
    }
    if let Some(number) = payload.downcast_ref::<i64>() {
        return Some(*number as f64);
    }
    if let Some(number) = payload.downcast_ref::<u32>() {
        return Some(f64::from(*number));
    }
    if let Some(number) = payload.downcast_ref::<u64>() {
        return Some(*number as f64);
    }
    if let Some(number) = payload.downcast_ref::<usize>() {
        return Some(*number as f64);
    }
    if let Some(number) = payload.downcast_ref::<f64>() {
        return Some(*number);
    }
    if let Some(number) = payload.downcast_ref::<f32>() {
        return Some(f64::from(*number));
    }
    None
}

impl fmt::Display for Throwable {
    /// The human-readable stringification of the thrown value. This is the
    /// text serialization uses as the record's `message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Throwable::Exception(exception) => write!(f, "{}", exception),
            Throwable::Foreign(error) => write!(f, "{}", error),
            Throwable::Text(text) => f.write_str(text),
            Throwable::Number(number) => write!(f, "{}", number),
            Throwable::Data(value) => write!(f, "{}", value),
            Throwable::Opaque => f.write_str("Box<dyn Any>"),
        }
    }
}

impl From<Exception> for Throwable {
    fn from(exception: Exception) -> Self {
        Self::Exception(exception)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Throwable {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Exception>() {
            Ok(exception) => Self::Exception(*exception),
            Err(error) => Self::Foreign(error),
        }
    }
}

impl From<String> for Throwable {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Throwable {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for Throwable {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Throwable {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<serde_json::Value> for Throwable {
    fn from(value: serde_json::Value) -> Self {
        Self::Data(value)
    }
}
