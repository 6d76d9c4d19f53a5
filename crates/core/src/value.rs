//! Field values and declared field types
//!
//! This module contains `FieldValue`, the runtime representation of a single
//! form field's content, and `FieldType`, the declared property type that
//! drives widget dispatch. Conversions are best-effort and fail closed:
//! a value that cannot be converted yields `None` (or an empty string),
//! never a panic. Numeric and date parsing is locale-independent.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldValue
// ============================================================================

/// Runtime value of a single field, as held in a value buffer or model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    /// Absent or null value
    Null,
    /// String value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (UTC)
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Check whether this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert to a display string (empty string for null)
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(v) => v.clone(),
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Bool(v) => v.to_string(),
            FieldValue::Date(v) => v.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Best-effort integer conversion
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Float(v) => Some(*v as i64),
            FieldValue::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Best-effort floating point conversion
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Best-effort boolean conversion
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            FieldValue::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Best-effort timestamp conversion (RFC 3339 for text values)
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(v) => Some(*v),
            FieldValue::Text(v) => DateTime::parse_from_rfc3339(v.trim())
                .ok()
                .map(|d| d.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Date(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}

// ============================================================================
// FieldType
// ============================================================================

/// Declared property type of a field, as recorded in its descriptor
///
/// Widget dispatch keys off this declared type, not the runtime value:
/// a field declared `Integer` renders a numeric input even while its
/// buffered value is still `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// String property
    Text,
    /// Integer property (or nullable integer)
    Integer,
    /// Floating point property
    Float,
    /// Boolean property (or nullable boolean)
    Boolean,
    /// Timestamp property (or nullable timestamp)
    DateTime,
    /// Any other declared type, identified by name
    Other(String),
}

impl FieldType {
    /// Default value supplied when invoking an action that expects an
    /// argument of this type and none is given
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldType::Text => FieldValue::Text(String::new()),
            FieldType::Integer => FieldValue::Int(0),
            FieldType::Float => FieldValue::Float(0.0),
            FieldType::Boolean => FieldValue::Bool(false),
            FieldType::DateTime | FieldType::Other(_) => FieldValue::Null,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::DateTime => write!(f, "datetime"),
            FieldType::Other(name) => write!(f, "{}", name),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
