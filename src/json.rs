//! JSON utility functions
//!
//! Total accessors over `serde_json` values. Every helper answers "absent"
//! instead of failing when the data has the wrong shape, so callers can walk
//! loosely-typed records without scattering type checks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parse one JSON document with no nesting limit
///
/// Records nest ingredients arbitrarily deep, so the parser's recursion limit
/// is lifted and the stack grows on demand instead. Trailing non-whitespace
/// is an error.
pub fn parse_record(text: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Return the field as a string slice, or `None` if missing or not a string
pub fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Return the field as an object, or `None` if missing or not an object
pub fn object_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}

/// Return the field as a slice of elements, or `None` unless it is an array
/// holding at least one element
pub fn nonempty_array_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a [Value]> {
    map.get(key)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .map(Vec::as_slice)
}

/// Trim `text`, returning `None` when nothing is left
pub fn nonblank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Raw UTF-8 byte length of an optional string
pub fn utf8_len(text: Option<&str>) -> u64 {
    text.map_or(0, |s| s.len() as u64)
}

/// Byte length of the compact JSON encoding of `value`
///
/// The encoding has no whitespace, keeps object keys in insertion order and
/// writes non-ASCII characters literally. Serialization failures count as
/// zero bytes.
///
/// # Examples
/// ```
/// use off_estimator::json::compact_json_len;
///
/// assert_eq!(compact_json_len(&vec!["é"]), 6);
/// ```
pub fn compact_json_len<T: Serialize + ?Sized>(value: &T) -> u64 {
    let mut counter = ByteCounter::default();
    match serde_json::to_writer(&mut counter, value) {
        Ok(()) => counter.count,
        Err(_) => 0,
    }
}

/// Writer that only tallies bytes, so sizing a value never buffers its encoding
#[derive(Default)]
struct ByteCounter {
    count: u64,
}

impl std::io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.count += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
