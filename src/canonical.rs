//! Canonical JSON text.
//!
//! The root hash and the output file share one text form: the one Python's
//! `json.dumps` produces with default arguments. Items are separated by
//! `", "`, keys by `": "`, there is no indentation or trailing newline, and
//! every non-ASCII character inside a string is written as a lowercase
//! `\uXXXX` escape (surrogate pairs above U+FFFF). Object members keep their
//! insertion order.
//!
//! Numbers follow Python's `repr`: integer literals are written exactly as
//! given (`-0` becomes `0`), floats use the shortest round-trip digits, switch
//! to exponent form outside `1e-4 <= |x| < 1e16`, and pad the exponent to two
//! digits (`1.5e-07`, `1e+16`).

use crate::error::{ExecTreeError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fmt::LowerExp;
use std::io::{self, Write};

/// `serde_json` formatter emitting the canonical text form
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if is_integer_literal(value) {
            let value = if value == "-0" { "0" } else { value };
            return writer.write_all(value.as_bytes());
        }

        match value.parse::<f64>() {
            Ok(float) => writer.write_all(float_repr(float).as_bytes()),
            Err(_) => writer.write_all(value.as_bytes()),
        }
    }
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Python `repr` of a float
fn float_repr<F>(value: F) -> String
where
    F: Copy + LowerExp + Into<f64>,
{
    let wide: f64 = value.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        let text = if wide > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.25e-7`
    let scientific = format!("{:e}", value);
    let (negative, body) = match scientific.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, scientific.as_str()),
    };
    let (mantissa, exponent) = body.split_once('e').unwrap_or((body, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if (-4..16).contains(&exponent) {
        let point = exponent + 1;
        if point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
            out.push_str(&digits);
        } else {
            let point = point as usize;
            if point >= digits.len() {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(point - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..point]);
                out.push('.');
                out.push_str(&digits[point..]);
            }
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("e{}{:02}", sign, exponent.unsigned_abs()));
    }
    out
}

/// Serialize a value to canonical JSON bytes
pub fn to_canonical_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ExecTreeError::Serialization(e.to_string()))?;
    Ok(out)
}

/// Serialize a value to a canonical JSON string
pub fn to_canonical_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let bytes = to_canonical_vec(value)?;
    String::from_utf8(bytes).map_err(|e| ExecTreeError::Serialization(e.to_string()))
}
