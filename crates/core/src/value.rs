//! Value - Closed algebraic type for passport entries
//!
//! Passport values arrive as loosely-typed JSON. Rather than passing raw
//! JSON around, every entry is narrowed into one of five shapes at the
//! boundary, and each read site states which shape it expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single passport entry.
///
/// The common case for answered questions is `Array`: a multi-select
/// answer holding granular dot-hierarchical keys. `Object` carries opaque
/// structured data (e.g. site geometry) that this engine never inspects.
///
/// Untagged deserialization tries variants in declaration order, so
/// booleans and numbers are claimed before plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag (category summaries are typically these)
    Bool(bool),
    /// Decimal number (fee amounts)
    Number(Decimal),
    /// Single scalar answer
    String(String),
    /// Multi-select granular answers
    Array(Vec<String>),
    /// Opaque structured data, stored but never interpreted
    Object(serde_json::Value),
}

impl Value {
    /// Narrow to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Narrow to a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Narrow to the granular-answer array
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Narrow to a decimal amount.
    ///
    /// Accepts numbers directly and numeric strings (amounts frequently
    /// arrive as strings from upstream form inputs).
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Number(d) => Some(*d),
            Value::String(s) => Decimal::from_str_exact(s).ok(),
            _ => None,
        }
    }

    /// Truthiness as used by conditional rules: absent, `false`, zero,
    /// empty string, and empty array all fail a condition lookup.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(d) => !d.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(v) => !v.is_null(),
        }
    }

    /// Exact scalar comparison against a rule's expected string.
    ///
    /// Strings compare literally; booleans compare against their
    /// canonical `"true"`/`"false"` rendering; numbers compare
    /// numerically when the expected string parses as a decimal.
    /// Arrays and objects never match a scalar.
    pub fn matches_scalar(&self, expected: &str) -> bool {
        match self {
            Value::String(s) => s == expected,
            Value::Bool(b) => expected == if *b { "true" } else { "false" },
            Value::Number(d) => Decimal::from_str_exact(expected)
                .map(|e| e == *d)
                .unwrap_or(false),
            Value::Array(_) | Value::Object(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => write!(f, "[{}]", items.join(", ")),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Number(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Array(items)
    }
}
