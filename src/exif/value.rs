//! Raw tag value representation
//!
//! Decoded EXIF fields arrive as one of a small set of value kinds. The
//! kind is carried explicitly as an enum variant so downstream code can
//! branch on it directly instead of probing runtime types, and so the
//! opaque-payload classification stays in exactly one place.

use std::fmt;

use exif::Value;

use crate::exif::table::RawTagTable;
use crate::utils::string_utils;

/// A single raw tag value
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Single integer value
    Integer(i64),
    /// Single floating point value (rationals are resolved on conversion)
    Float(f64),
    /// Decoded text
    Text(String),
    /// Opaque binary payload
    Bytes(Vec<u8>),
    /// Multiple integer values
    IntegerList(Vec<i64>),
    /// Multiple floating point values
    FloatList(Vec<f64>),
    /// Nested tag table (the GPS group)
    SubTable(RawTagTable),
}

impl TagValue {
    /// Whether this value is an opaque binary payload
    ///
    /// Binary payloads never reach an output sink.
    pub fn is_binary(&self) -> bool {
        matches!(self, TagValue::Bytes(_))
    }

    /// Numeric view of a scalar value, if it has one
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TagValue::Integer(v) => Some(*v as f64),
            TagValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a degrees/minutes/seconds component triple
    pub fn as_triple(&self) -> Option<(f64, f64, f64)> {
        match self {
            TagValue::FloatList(v) if v.len() >= 3 => Some((v[0], v[1], v[2])),
            TagValue::IntegerList(v) if v.len() >= 3 => {
                Some((v[0] as f64, v[1] as f64, v[2] as f64))
            }
            _ => None,
        }
    }

    /// The value as decoded text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a nested tag table, if it is one
    pub fn as_sub_table(&self) -> Option<&RawTagTable> {
        match self {
            TagValue::SubTable(table) => Some(table),
            _ => None,
        }
    }

    /// Converts a decoded field value into its tagged representation
    ///
    /// Counted numeric fields collapse to a scalar when they hold exactly
    /// one component. ASCII fields are decoded lossily. BYTE and UNDEFINED
    /// fields keep their raw bytes; a field the decoder could not type at
    /// all is kept as an empty payload so it classifies as opaque.
    pub fn from_raw(value: &Value) -> TagValue {
        match value {
            Value::Byte(data) => TagValue::Bytes(data.clone()),
            Value::Undefined(data, _) => TagValue::Bytes(data.clone()),
            Value::Ascii(parts) => {
                let text = parts
                    .iter()
                    .map(|part| string_utils::decode_tag_text(part))
                    .collect::<Vec<_>>()
                    .join(", ");
                TagValue::Text(text)
            }
            Value::Short(v) => integers(v.iter().map(|&x| x as i64)),
            Value::Long(v) => integers(v.iter().map(|&x| x as i64)),
            Value::SByte(v) => integers(v.iter().map(|&x| x as i64)),
            Value::SShort(v) => integers(v.iter().map(|&x| x as i64)),
            Value::SLong(v) => integers(v.iter().map(|&x| x as i64)),
            Value::Rational(v) => floats(v.iter().map(|r| r.to_f64())),
            Value::SRational(v) => floats(v.iter().map(|r| r.to_f64())),
            Value::Float(v) => floats(v.iter().map(|&x| x as f64)),
            Value::Double(v) => floats(v.iter().copied()),
            // Fields the decoder could not type carry no usable payload
            _ => TagValue::Bytes(Vec::new()),
        }
    }
}

fn integers(values: impl Iterator<Item = i64>) -> TagValue {
    let collected: Vec<i64> = values.collect();
    match collected.as_slice() {
        [single] => TagValue::Integer(*single),
        _ => TagValue::IntegerList(collected),
    }
}

fn floats(values: impl Iterator<Item = f64>) -> TagValue {
    let collected: Vec<f64> = values.collect();
    match collected.as_slice() {
        [single] => TagValue::Float(*single),
        _ => TagValue::FloatList(collected),
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Integer(v) => write!(f, "{}", v),
            // Debug formatting keeps the decimal point on whole numbers
            TagValue::Float(v) => write!(f, "{:?}", v),
            TagValue::Text(s) => write!(f, "{}", s),
            TagValue::Bytes(data) => write!(f, "<{} bytes>", data.len()),
            TagValue::IntegerList(v) => write!(f, "{:?}", v),
            TagValue::FloatList(v) => write!(f, "{:?}", v),
            TagValue::SubTable(table) => write!(f, "<{} entries>", table.len()),
        }
    }
}
