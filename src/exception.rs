//! The trusted exception hierarchy: the base error kind plus the built-in
//! subtypes that survive a trip across a boundary.
//!
//! Classification in this crate is identity-based. The kind tag on
//! [`Exception`] is private and only the constructors in this module can set
//! it, so a foreign error that renders itself as `"SyntaxError: ..."` can
//! never be mistaken for a genuine [`ExceptionKind::Syntax`] exception.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wire::SerializedException;

/// The closed set of error kinds that round-trip a boundary by name.
///
/// [`ExceptionKind::Error`] is the base kind; every other variant is a
/// built-in subtype. The wire names mirror the ECMAScript standard error
/// types so records can cross runtime boundaries unchanged. There is no
/// way to mint a kind outside this set: anything else is flattened to the
/// base kind during serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// The base error kind; wire name `"Error"`.
    Error,
    /// Wire name `"EvalError"`.
    Eval,
    /// Wire name `"RangeError"`.
    Range,
    /// Wire name `"ReferenceError"`.
    Reference,
    /// Wire name `"SyntaxError"`.
    Syntax,
    /// Wire name `"TypeError"`.
    Type,
    /// Wire name `"URIError"`.
    Uri,
}

impl ExceptionKind {
    /// Returns the wire name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ExceptionKind::Error => "Error",
            ExceptionKind::Eval => "EvalError",
            ExceptionKind::Range => "RangeError",
            ExceptionKind::Reference => "ReferenceError",
            ExceptionKind::Syntax => "SyntaxError",
            ExceptionKind::Type => "TypeError",
            ExceptionKind::Uri => "URIError",
        }
    }

    /// Looks up a kind by its exact wire name.
    ///
    /// Returns `None` for anything outside the recognized set. Callers
    /// choose the fallback; deserialization falls back to
    /// [`ExceptionKind::Error`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Error" => Some(ExceptionKind::Error),
            "EvalError" => Some(ExceptionKind::Eval),
            "RangeError" => Some(ExceptionKind::Range),
            "ReferenceError" => Some(ExceptionKind::Reference),
            "SyntaxError" => Some(ExceptionKind::Syntax),
            "TypeError" => Some(ExceptionKind::Type),
            "URIError" => Some(ExceptionKind::Uri),
            _ => None,
        }
    }

    /// Returns true for every built-in subtype and false for the base kind.
    pub fn is_subtype(self) -> bool {
        !matches!(self, ExceptionKind::Error)
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live, throwable error with a trusted kind tag.
///
/// All fields are private: the constructors are the only way to set the
/// kind, which is what makes the classifier's verdicts spoof-proof. The
/// stack text is captured once at construction and preserved verbatim
/// through serialization; a deserialized exception carries the sender's
/// stack, not a local one.
///
/// Serializing an `Exception` with serde produces exactly the wire record
/// shape (`{"name", "message", "stack"}`), and any well-formed record
/// deserializes back into an `Exception`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SerializedException", from = "SerializedException")]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
    stack: String,
}

impl Exception {
    /// Creates a base-kind exception with the given message.
    ///
    /// The stack text starts with the `"Error: <message>"` header and
    /// includes backtrace frames when backtrace capture is enabled (see
    /// [`std::backtrace::Backtrace::capture`]).
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(ExceptionKind::Error, message)
    }

    /// Creates an exception of the given built-in kind.
    ///
    /// The kind argument is the closed [`ExceptionKind`] enum, so this is
    /// a trusted constructor: no spoofed kind can be minted through it.
    pub fn with_kind(kind: ExceptionKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut stack = stack_header(kind.name(), &message);
        if let Some(frames) = captured_frames() {
            stack.push('\n');
            stack.push_str(&frames);
        }
        Self {
            kind,
            message,
            stack,
        }
    }

    /// Rebuilds an exception from wire fields.
    ///
    /// The stack is force-assigned from the record rather than captured,
    /// so the reconstructed object reports the sender's trace.
    pub(crate) fn from_wire(kind: ExceptionKind, message: String, stack: String) -> Self {
        Self {
            kind,
            message,
            stack,
        }
    }

    /// The trusted kind tag.
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// The wire name of the kind, e.g. `"Error"` or `"SyntaxError"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The human-readable message; may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack text captured at construction, or carried over the wire
    /// for a deserialized exception.
    pub fn stack(&self) -> &str {
        &self.stack
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.name())
        } else {
            write!(f, "{}: {}", self.name(), self.message)
        }
    }
}

impl std::error::Error for Exception {}

impl From<&Exception> for SerializedException {
    fn from(exception: &Exception) -> Self {
        SerializedException::new(
            exception.name(),
            exception.message.clone(),
            exception.stack.clone(),
        )
    }
}

impl From<Exception> for SerializedException {
    fn from(exception: Exception) -> Self {
        SerializedException::new(exception.name(), exception.message, exception.stack)
    }
}

impl From<SerializedException> for Exception {
    fn from(record: SerializedException) -> Self {
        crate::wire::deserialize(record)
    }
}

/// Formats the first line of a stack text: `"<name>: <message>"`, or the
/// bare name when the message is empty.
pub(crate) fn stack_header(name: &str, message: &str) -> String {
    if message.is_empty() {
        name.to_string()
    } else {
        format!("{}: {}", name, message)
    }
}

/// Returns the formatted backtrace frames when capture is enabled,
/// `None` otherwise.
pub(crate) fn captured_frames() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string().trim_end().to_string()),
        _ => None,
    }
}
