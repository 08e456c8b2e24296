//! The iteration protocol.
//!
//! An iterator is obtained only through [`Value::iter`] on a Str or Range
//! value and is immediately wrapped into an Iterator-kind [`Value`]. The
//! sequence it produces is finite and single-use; callers must observe a
//! `true` [`ValueIter::has_next`] before each [`ValueIter::next`].

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    value::{Value, ValueKind},
};

/// Capability interface for the two concrete iterators.
pub trait ValueIter {
    /// Pure predicate; does not move the cursor.
    fn has_next(&self) -> bool;

    /// Produces the next element and advances the cursor. Must only be
    /// called after `has_next` was last observed `true`.
    fn next(&mut self) -> Value;
}

/// Yields each character of the source as a one-character Str, in order.
///
/// Owns a copy of the source string plus a byte cursor; the cursor always
/// rests on a character boundary.
pub struct StringIter {
    source: String,
    cursor: usize,
}

impl StringIter {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            cursor: 0,
        }
    }
}

impl ValueIter for StringIter {
    fn has_next(&self) -> bool {
        self.cursor < self.source.len()
    }

    fn next(&mut self) -> Value {
        let mut chars = self.source[self.cursor..].chars();
        match chars.next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                Value::string(ch.to_string())
            }
            None => Value::string(""),
        }
    }
}

/// Yields every integer in `[current, end)`, in order.
pub struct RangeIter {
    current: i64,
    end: i64,
}

impl RangeIter {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            current: start,
            end,
        }
    }
}

impl ValueIter for RangeIter {
    fn has_next(&self) -> bool {
        self.current < self.end
    }

    fn next(&mut self) -> Value {
        let value = Value::int(self.current);
        self.current += 1;
        value
    }
}

impl Value {
    /// Obtains an iterator over this value, wrapped as an Iterator-kind
    /// Value. Defined for Str and Range only.
    pub fn iter(&self, location: &str) -> Result<Value> {
        match &*self.0 {
            ValueKind::Str(s) => Ok(Value::iterator(Box::new(StringIter::new(s)))),
            ValueKind::Range(start, end) => Ok(Value::iterator(Box::new(RangeIter::new(
                *start, *end,
            )))),
            _ => Err(Diagnostic::new(
                DiagnosticKind::NotIterable,
                format!("{} is not iterable", self.type_name()),
                location,
            )
            .into()),
        }
    }

    /// Kind-checked `has_next` on an Iterator-kind Value.
    pub fn has_next(&self, location: &str) -> Result<bool> {
        match &*self.0 {
            ValueKind::Iterator(iter) => Ok(iter.borrow().has_next()),
            _ => Err(self.not_an_iterator(location)),
        }
    }

    /// Kind-checked `next` on an Iterator-kind Value; advances the cursor.
    pub fn advance(&self, location: &str) -> Result<Value> {
        match &*self.0 {
            ValueKind::Iterator(iter) => Ok(iter.borrow_mut().next()),
            _ => Err(self.not_an_iterator(location)),
        }
    }

    fn not_an_iterator(&self, location: &str) -> crate::CallaError {
        Diagnostic::new(
            DiagnosticKind::NotIterable,
            format!("expected Iterator, found {}", self.type_name()),
            location,
        )
        .into()
    }
}
