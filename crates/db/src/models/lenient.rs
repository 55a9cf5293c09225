//! Integer fields that also accept numeric strings.
//!
//! HTML form inputs hand the dashboard their values as strings, so `"3"` has
//! to be read the same as `3`. An empty string on an optional field means
//! "not provided".

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn parse<E: serde::de::Error>(raw: NumberOrString) -> Result<Option<i64>, E> {
    match raw {
        NumberOrString::Number(n) => Ok(Some(n)),
        NumberOrString::String(s) if s.trim().is_empty() => Ok(None),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| E::custom(format!("expected an integer, got '{s}'"))),
    }
}

/// Required `i64` (ids).
pub fn i64_required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    parse(NumberOrString::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("expected an integer, got an empty string"))
}

/// Optional `i64`; `null` and `""` both read as `None`.
pub fn i64_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(raw) => parse(raw),
        None => Ok(None),
    }
}

/// Optional `i32`; `null` and `""` both read as `None`.
pub fn i32_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    i64_optional(deserializer)?
        .map(i32::try_from)
        .transpose()
        .map_err(|_| D::Error::custom("integer out of range"))
}
