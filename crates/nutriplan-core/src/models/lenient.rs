// ABOUTME: Forgiving serde deserializers for half-filled user input
// ABOUTME: Coerces numeric strings and unknown enum values instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lenient field deserializers
//!
//! Profile and meal-log records are frequently produced from form input that
//! is still being typed. A field that cannot be understood becomes `None`
//! (or zero) so the calculators can substitute their defaults.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Enum types that can be parsed from loosely formatted strings
pub trait LossyEnum: Sized {
    /// Parse a value, returning `None` for anything unrecognized
    fn parse_lossy(raw: &str) -> Option<Self>;
}

/// Read a JSON value as a finite `f64`, accepting numeric strings
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Deserialize an optional `f64`, mapping garbage to `None`
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Deserialize an `f64`, mapping absent or garbage values to zero
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_f64(deserializer)?.unwrap_or(0.0))
}

/// Deserialize an optional non-negative integer (ages), truncating fractions
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = optional_f64(deserializer)?;
    Ok(number
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.trunc() as u32))
}

/// Deserialize an optional enum through [`LossyEnum`]
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn optional_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LossyEnum,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => T::parse_lossy(&raw),
        _ => None,
    })
}

/// Deserialize a list of strings, dropping non-string and blank entries
///
/// A single string is accepted as a comma separated list.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    })
}
