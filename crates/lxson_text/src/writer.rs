//! Rendering value trees back to text.
//!
//! [`to_lxson`] produces canonical, re-parseable LxSON: unordered maps
//! render in sorted key order, so equal trees render to equal text.
//! [`format_tabbed`] is a lossy indentation-based layout for logs and
//! consoles.

use lxson_value::{Error, Kind, Result, Value};

/// Renders `value` as parseable LxSON text.
///
/// Floats always carry a decimal point so they re-parse as floats. Because
/// the format has no escape sequences, a string renders inside whichever
/// quote character it does not contain.
///
/// # Errors
/// Returns a type error for values the format cannot carry: `Undefined`,
/// handles, non-finite floats, floats whose shortest rendering needs an
/// exponent, and strings containing both quote characters.
pub fn to_lxson(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<()> {
    match value.kind() {
        Kind::Bool => {
            out.push_str(if value.as_bool()? { "true" } else { "false" });
            Ok(())
        }
        Kind::Int => {
            out.push_str(&value.as_int()?.to_string());
            Ok(())
        }
        Kind::Float => write_float(out, value.as_float()?),
        Kind::String => write_quoted(out, value.as_str()?),
        Kind::Array => {
            out.push('[');
            for (i, entry) in value.iter()?.enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, entry.value())?;
            }
            out.push(']');
            Ok(())
        }
        Kind::Map | Kind::OrderedMap | Kind::DecoratedMap => {
            out.push('{');
            for (i, entry) in value.iter()?.enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_key(out, entry.key()?)?;
                out.push(':');
                write_value(out, entry.value())?;
            }
            out.push('}');
            Ok(())
        }
        Kind::Undefined | Kind::Handle => {
            Err(Error::wrong_kind("rendering as LxSON text", value.kind()))
        }
    }
}

fn write_float(out: &mut String, n: f64) -> Result<()> {
    if !n.is_finite() {
        return Err(Error::wrong_kind(
            "rendering a non-finite float as LxSON text",
            Kind::Float,
        ));
    }
    let formatted = format!("{n:?}");
    if formatted.contains(['e', 'E']) {
        return Err(Error::wrong_kind(
            "rendering an exponent-range float as LxSON text",
            Kind::Float,
        ));
    }
    out.push_str(&formatted);
    Ok(())
}

fn write_quoted(out: &mut String, s: &str) -> Result<()> {
    let quote = if !s.contains('"') {
        '"'
    } else if !s.contains('\'') {
        '\''
    } else {
        return Err(Error::wrong_kind(
            "quoting a string that contains both quote characters",
            Kind::String,
        ));
    };
    out.push(quote);
    out.push_str(s);
    out.push(quote);
    Ok(())
}

fn write_key(out: &mut String, key: &str) -> Result<()> {
    if is_bare_key(key) {
        out.push_str(key);
        Ok(())
    } else {
        write_quoted(out, key)
    }
}

/// A key renders unquoted when it matches the identifier production the
/// parser accepts for unquoted keys.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders `value` as indented `key : value` lines for diagnostics.
///
/// Arrays flatten into their elements, nested containers indent by four
/// spaces, and kinds with no text form print as `<unknown>`. The output is
/// for human eyes; it is not parseable.
#[must_use]
pub fn format_tabbed(value: &Value) -> String {
    let mut buffer = String::new();
    fmt_tabbed(&mut buffer, value, "");
    buffer
}

fn fmt_tabbed(buffer: &mut String, value: &Value, indent: &str) {
    match value.kind() {
        Kind::Array => {
            if let Ok(entries) = value.iter() {
                for entry in entries {
                    fmt_tabbed(buffer, entry.value(), indent);
                }
            }
        }
        Kind::Map | Kind::OrderedMap | Kind::DecoratedMap => {
            if let Ok(entries) = value.iter() {
                for entry in entries {
                    let child = entry.value();
                    buffer.push_str(indent);
                    buffer.push_str(entry.key().unwrap_or_default());
                    buffer.push_str(" : ");
                    if child.is_array() || child.is_map() {
                        buffer.push('\n');
                        buffer.push_str(indent);
                        let deeper = format!("{indent}    ");
                        fmt_tabbed(buffer, child, &deeper);
                    } else {
                        fmt_tabbed(buffer, child, indent);
                    }
                }
            }
        }
        Kind::Bool => {
            buffer.push_str(if value.query(false) { "true\n" } else { "false\n" });
        }
        Kind::Int => {
            buffer.push_str(&format!("{}\n", value.query(0i64)));
        }
        Kind::Float => {
            buffer.push_str(&format!("{:.6}\n", value.query(0.0f64)));
        }
        Kind::String => {
            buffer.push_str(&format!("{}\n", value.as_str().unwrap_or_default()));
        }
        Kind::Undefined | Kind::Handle => buffer.push_str("<unknown>\n"),
    }
}
