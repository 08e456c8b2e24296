//! Runtime value core for the Calla scripting language: the dynamic `Value`
//! representation, arithmetic coercion rules, the iteration protocol, and
//! the native-function calling convention that the surrounding evaluator
//! builds upon.

pub mod diagnostics;
pub mod iter;
pub mod ops;
pub mod runtime;
pub mod stdlib;
pub mod value;

pub use diagnostics::{CallaError, Diagnostic, DiagnosticKind, Result};
pub use iter::{RangeIter, StringIter, ValueIter};
pub use runtime::Runtime;
pub use value::{NativeFunction, Value, ValueKind};
