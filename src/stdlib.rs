//! Builtins shipped with the runtime core.

use std::io::Write;

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    runtime::Runtime,
    value::{Value, ValueKind},
};

pub fn install(runtime: &mut Runtime) {
    runtime.register("print", Value::native("print", io_print));
    runtime.register("len", Value::native("len", string_len));
}

/// Renders each argument followed by a space, then one trailing newline for
/// the whole call. Accepts any number of arguments and returns nothing.
fn io_print(runtime: &Runtime, args: &[Value], _location: &str) -> Result<Value> {
    let mut out = runtime.out_mut();
    for arg in args {
        write!(out, "{arg} ")?;
    }
    writeln!(out)?;
    Ok(runtime.nothing())
}

fn string_len(_runtime: &Runtime, args: &[Value], location: &str) -> Result<Value> {
    ensure_exact(args, 1, "len", location)?;
    match &*args[0].0 {
        ValueKind::Str(s) => Ok(Value::int(s.chars().count() as i64)),
        _ => Err(Diagnostic::new(
            DiagnosticKind::TypeOperand,
            format!("`len` expected Str but found {}", args[0].type_name()),
            location,
        )
        .into()),
    }
}

fn ensure_exact(args: &[Value], expected: usize, name: &str, location: &str) -> Result<()> {
    if args.len() != expected {
        return Err(Diagnostic::new(
            DiagnosticKind::TypeOperand,
            format!(
                "`{name}` expected {expected} arguments but received {}",
                args.len()
            ),
            location,
        )
        .into());
    }
    Ok(())
}
