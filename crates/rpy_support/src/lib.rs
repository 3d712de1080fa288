//! Runtime support for translated RPython programs
//!
//! Generated code links against this crate for three things:
//!
//! * accessors for structure fields and array items that are either raw or checked, selected once
//!   per build through cargo features (see [`ActiveAccess`]);
//! * fatal reporters that print a diagnostic and abort the process ([`rpy_abort`] and
//!   [`assert_failed`]);
//! * triggers that hand overflow, invalid-value and zero-division failures to the host exception
//!   mechanism ([`RaiseSimpleException`]).
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod abort;
mod access;
pub mod arith;
mod array;
mod assert;
mod config;
mod exception;
mod misc;

pub use crate::{
    abort::{rpy_abort, write_abort_diagnostic, ABORT_MESSAGE},
    access::{ActiveAccess, Checked, MemoryAccess, Unchecked},
    array::{ArrayBuf, ArrayBufError, NoLengthArray, VarArray},
    assert::{assert_failed, format_assertion_failure, SourceLocation},
    config::{AccessMode, BuildConfig, ConfigError},
    exception::{ExceptionKind, RaiseSimpleException, SimpleException, SimpleRaiser},
    misc::{jit_record_known_class, min, RUNNING_ON_LLINTERP},
};

#[doc(hidden)]
pub use crate::assert::enclosing_function_name;
