use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    diagnostics::Result,
    iter::ValueIter,
    runtime::Runtime,
};

/// A single runtime datum, shared by reference count across the interpreter.
///
/// Payload-bearing kinds (strings, iterators) are freed when the last holder
/// releases its clone.
#[derive(Clone)]
pub struct Value(pub Rc<ValueKind>);

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Self(Rc::new(kind))
    }

    pub fn int(value: i64) -> Self {
        Self::new(ValueKind::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Self::new(ValueKind::Float(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ValueKind::Str(value.into()))
    }

    /// A half-open integer range; `end` is exclusive.
    pub fn range(start: i64, end: i64) -> Self {
        Self::new(ValueKind::Range(start, end))
    }

    pub fn iterator(iter: Box<dyn ValueIter>) -> Self {
        Self::new(ValueKind::Iterator(RefCell::new(iter)))
    }

    pub fn native(
        name: &'static str,
        callback: impl Fn(&Runtime, &[Value], &str) -> Result<Value> + 'static,
    ) -> Self {
        Self::new(ValueKind::NativeFunction(NativeFunction {
            name,
            callback: Rc::new(callback),
        }))
    }

    pub fn type_name(&self) -> &'static str {
        match &*self.0 {
            ValueKind::Nothing => "Nothing",
            ValueKind::Int(_) => "Int",
            ValueKind::Float(_) => "Float",
            ValueKind::Str(_) => "Str",
            ValueKind::Range(..) => "Range",
            ValueKind::Iterator(_) => "Iterator",
            ValueKind::NativeFunction(_) => "Function",
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(&*self.0, ValueKind::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::Nothing => write!(f, "nothing"),
            ValueKind::Int(n) => write!(f, "{n}"),
            ValueKind::Float(n) => write!(f, "{n}"),
            ValueKind::Str(s) => write!(f, "{s}"),
            ValueKind::Range(start, end) => write!(f, "{start}..{end}"),
            ValueKind::Iterator(_) => write!(f, "<iterator>"),
            ValueKind::NativeFunction(fun) => write!(f, "<builtin function: {}>", fun.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::Str(s) => write!(f, "\"{s}\""),
            _ => fmt::Display::fmt(self, f),
        }
    }
}

/// The kind tag and its payload; exactly one payload is active per instance.
pub enum ValueKind {
    Nothing,
    Int(i64),
    Float(f64),
    Str(String),
    /// Half-open: `start..end`, end exclusive.
    Range(i64, i64),
    /// Cursor state is interior-mutable; only the iteration accessors touch it.
    Iterator(RefCell<Box<dyn ValueIter>>),
    NativeFunction(NativeFunction),
}

/// A first-class builtin: a display name plus a trait-object callable with
/// the fixed signature `(&Runtime, args, location) -> Result<Value>`.
///
/// The wrapper performs no arity or type checking; each callable's body is
/// responsible for validating its own arguments.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    callback: Rc<dyn Fn(&Runtime, &[Value], &str) -> Result<Value>>,
}

impl NativeFunction {
    pub fn call(&self, runtime: &Runtime, args: &[Value], location: &str) -> Result<Value> {
        (self.callback)(runtime, args, location)
    }
}
