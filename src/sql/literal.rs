use crate::error::SeedResult;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Number, Value};
use std::fmt;
use std::io;

/// A single SQL literal in a `VALUES (...)` list
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    /// Quoted string, single quotes doubled
    Text(String),
    /// ISO-8601 text, quoted as-is for PostgreSQL to cast
    Timestamp(String),
    /// Unquoted number: integers exactly as written, floats in shortest form
    Number(String),
    /// Serialized JSON document cast to `jsonb`
    Jsonb(String),
    /// `ARRAY[...]` of text (or NULL) elements
    TextArray(Vec<SqlValue>),
}

impl SqlValue {
    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(s) => SqlValue::Text(s.to_string()),
            None => SqlValue::Null,
        }
    }

    pub fn timestamp(value: Option<&str>) -> Self {
        match value {
            Some(s) => SqlValue::Timestamp(s.to_string()),
            None => SqlValue::Null,
        }
    }

    pub fn number(value: &Number) -> Self {
        SqlValue::Number(number_literal(&value.to_string()))
    }

    /// Serialize a JSON value with `", "` / `": "` separators, keys in document order
    pub fn jsonb(value: &Value) -> SeedResult<Self> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        value.serialize(&mut serializer)?;
        Ok(SqlValue::Jsonb(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// A missing list and an empty list both become the typed empty array
    pub fn text_array(items: Option<&[Option<String>]>) -> Self {
        let elements = items
            .unwrap_or_default()
            .iter()
            .map(|item| SqlValue::text(item.as_deref()))
            .collect();
        SqlValue::TextArray(elements)
    }
}

/// Canonical text for a JSON number literal.
///
/// Integer literals keep every digit whatever their size. Anything with a
/// fraction or exponent is a float and prints in shortest round-trip form,
/// switching to scientific notation outside `1e-4 <= |x| < 1e16`
/// (`250.20` -> `250.2`, `2.0` -> `2.0`, `1e20` -> `1e+20`).
pub fn number_literal(literal: &str) -> String {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if digits.bytes().all(|b| b == b'0') {
            return "0".to_string();
        }
        return literal.to_string();
    }

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => float_literal(value),
        _ => literal.to_string(),
    }
}

fn float_literal(value: f64) -> String {
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let body = if !(-4..16).contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, exp_sign, exponent.abs())
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    };

    format!("{}{}", sign, body)
}

/// Double every single quote so the text is safe inside a `'...'` literal
pub fn escape_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Text(s) | SqlValue::Timestamp(s) => write!(f, "'{}'", escape_quotes(s)),
            SqlValue::Number(n) => f.write_str(n),
            SqlValue::Jsonb(doc) => write!(f, "'{}'::jsonb", escape_quotes(doc)),
            SqlValue::TextArray(items) if items.is_empty() => f.write_str("ARRAY[]::TEXT[]"),
            SqlValue::TextArray(items) => {
                f.write_str("ARRAY[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Compact JSON with a space after every `,` and `:`, non-ASCII escaped as `\uXXXX`
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut run_start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[run_start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            run_start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[run_start..].as_bytes())
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(number_literal(value).as_bytes())
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
