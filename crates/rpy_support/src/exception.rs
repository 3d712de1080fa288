use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of exception the runtime raises for arithmetic failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// The result does not fit the integer type.
    OverflowError,
    /// An argument has the right type but an unusable value.
    ValueError,
    /// Division or modulo by zero.
    ZeroDivisionError,
}

impl ExceptionKind {
    /// Returns the name of the exception class.
    pub fn name(self) -> &'static str {
        match self {
            ExceptionKind::OverflowError => "OverflowError",
            ExceptionKind::ValueError => "ValueError",
            ExceptionKind::ZeroDivisionError => "ZeroDivisionError",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The host's exception mechanism, as seen from code that detects an arithmetic failure.
///
/// The returned exception is handed back to the caller as the `Err` of its result by
/// [`fail_exception!`](crate::fail_exception) and friends.
pub trait RaiseSimpleException {
    /// The value that carries a raised exception.
    type Exception;

    /// Builds the exception of the given `kind` with `message`.
    fn raise_simple_exception(&self, kind: ExceptionKind, message: &str) -> Self::Exception;
}

/// An exception of a builtin kind carrying only a message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SimpleException {
    /// The exception class.
    pub kind: ExceptionKind,
    /// The message the exception was raised with.
    pub message: String,
}

/// The default [`RaiseSimpleException`] implementation which raises [`SimpleException`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleRaiser;

impl RaiseSimpleException for SimpleRaiser {
    type Exception = SimpleException;

    fn raise_simple_exception(&self, kind: ExceptionKind, message: &str) -> SimpleException {
        log::debug!("raising {kind}: {message}");
        SimpleException {
            kind,
            message: message.to_owned(),
        }
    }
}
