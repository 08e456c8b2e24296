//! Arithmetic dispatch over kind pairs.
//!
//! Int pairs stay exact, mixed Int/Float pairs promote the integer operand,
//! `+` concatenates strings, and `*` repeats a string by an integer count.
//! Every other combination is a `TypeOperand` fault.

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    value::{Value, ValueKind},
};

impl Value {
    pub fn add(&self, other: &Value, location: &str) -> Result<Value> {
        match (&*self.0, &*other.0) {
            (ValueKind::Int(a), ValueKind::Int(b)) => Ok(Value::int(a + b)),
            (ValueKind::Int(a), ValueKind::Float(b)) => Ok(Value::float(*a as f64 + b)),
            (ValueKind::Float(a), ValueKind::Int(b)) => Ok(Value::float(a + *b as f64)),
            (ValueKind::Float(a), ValueKind::Float(b)) => Ok(Value::float(a + b)),
            (ValueKind::Str(a), ValueKind::Str(b)) => Ok(Value::string(format!("{a}{b}"))),
            _ => Err(self.operand_fault("+", other, location)),
        }
    }

    pub fn sub(&self, other: &Value, location: &str) -> Result<Value> {
        match (&*self.0, &*other.0) {
            (ValueKind::Int(a), ValueKind::Int(b)) => Ok(Value::int(a - b)),
            (ValueKind::Int(a), ValueKind::Float(b)) => Ok(Value::float(*a as f64 - b)),
            (ValueKind::Float(a), ValueKind::Int(b)) => Ok(Value::float(a - *b as f64)),
            (ValueKind::Float(a), ValueKind::Float(b)) => Ok(Value::float(a - b)),
            _ => Err(self.operand_fault("-", other, location)),
        }
    }

    pub fn mul(&self, other: &Value, location: &str) -> Result<Value> {
        match (&*self.0, &*other.0) {
            (ValueKind::Int(a), ValueKind::Int(b)) => Ok(Value::int(a * b)),
            (ValueKind::Int(a), ValueKind::Float(b)) => Ok(Value::float(*a as f64 * b)),
            (ValueKind::Float(a), ValueKind::Int(b)) => Ok(Value::float(a * *b as f64)),
            (ValueKind::Float(a), ValueKind::Float(b)) => Ok(Value::float(a * b)),
            // A count of zero or less repeats into the empty string.
            (ValueKind::Str(s), ValueKind::Int(n)) => {
                Ok(Value::string(s.repeat((*n).max(0) as usize)))
            }
            _ => Err(self.operand_fault("*", other, location)),
        }
    }

    /// Integer division truncates toward zero; dividing an Int by the Int
    /// zero is a checked `DivisionByZero` fault. Float division follows
    /// IEEE-754 and never faults.
    pub fn div(&self, other: &Value, location: &str) -> Result<Value> {
        match (&*self.0, &*other.0) {
            (ValueKind::Int(_), ValueKind::Int(0)) => Err(Diagnostic::new(
                DiagnosticKind::DivisionByZero,
                "division by zero",
                location,
            )
            .into()),
            (ValueKind::Int(a), ValueKind::Int(b)) => Ok(Value::int(a / b)),
            (ValueKind::Int(a), ValueKind::Float(b)) => Ok(Value::float(*a as f64 / b)),
            (ValueKind::Float(a), ValueKind::Int(b)) => Ok(Value::float(a / *b as f64)),
            (ValueKind::Float(a), ValueKind::Float(b)) => Ok(Value::float(a / b)),
            _ => Err(self.operand_fault("/", other, location)),
        }
    }

    /// Str × Int indexing: the one-character substring at `other`.
    pub fn index(&self, other: &Value, location: &str) -> Result<Value> {
        match (&*self.0, &*other.0) {
            (ValueKind::Str(s), ValueKind::Int(idx)) => usize::try_from(*idx)
                .ok()
                .and_then(|idx| s.chars().nth(idx))
                .map(|ch| Value::string(ch.to_string()))
                .ok_or_else(|| {
                    Diagnostic::new(
                        DiagnosticKind::IndexOutOfBounds,
                        format!("index {idx} out of bounds"),
                        location,
                    )
                    .into()
                }),
            _ => Err(Diagnostic::new(
                DiagnosticKind::TypeOperand,
                format!(
                    "cannot index {} with {}",
                    self.type_name(),
                    other.type_name()
                ),
                location,
            )
            .into()),
        }
    }

    fn operand_fault(&self, op: &str, other: &Value, location: &str) -> crate::CallaError {
        Diagnostic::new(
            DiagnosticKind::TypeOperand,
            format!(
                "invalid operands to binary `{op}`: {} and {}",
                self.type_name(),
                other.type_name()
            ),
            location,
        )
        .into()
    }
}
