use std::{
    cell::{RefCell, RefMut},
    io::{self, Write},
};

use indexmap::IndexMap;

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    value::{Value, ValueKind},
};

/// Process-scoped runtime state, constructed once at start-up and passed by
/// reference to everything that needs it.
///
/// Owns the "nothing" singleton, the builtin registry, and the output stream
/// used by `print`.
pub struct Runtime {
    nothing: Value,
    builtins: IndexMap<&'static str, Value>,
    out: RefCell<Box<dyn Write>>,
}

impl Runtime {
    /// A runtime writing to the process's standard output.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// A runtime writing to a caller-supplied stream.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let mut runtime = Self {
            nothing: Value::new(ValueKind::Nothing),
            builtins: IndexMap::new(),
            out: RefCell::new(out),
        };
        crate::stdlib::install(&mut runtime);
        runtime
    }

    /// The shared absence value. Every call returns a clone of the same
    /// allocation; there is never a second instance.
    pub fn nothing(&self) -> Value {
        self.nothing.clone()
    }

    /// Registers a native function under `name`, replacing any previous
    /// binding. Used by the prelude and by evaluator-supplied builtins.
    pub fn register(&mut self, name: &'static str, value: Value) {
        self.builtins.insert(name, value);
    }

    pub fn builtin(&self, name: &str) -> Option<Value> {
        self.builtins.get(name).cloned()
    }

    /// Invokes a callee with the native calling convention. Only
    /// NativeFunction values are callable.
    pub fn call(&self, callee: &Value, args: &[Value], location: &str) -> Result<Value> {
        match &*callee.0 {
            ValueKind::NativeFunction(fun) => fun.call(self, args, location),
            _ => Err(Diagnostic::new(
                DiagnosticKind::TypeOperand,
                format!("{} is not callable", callee.type_name()),
                location,
            )
            .into()),
        }
    }

    pub(crate) fn out_mut(&self) -> RefMut<'_, Box<dyn Write>> {
        self.out.borrow_mut()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
