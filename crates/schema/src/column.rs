//! Column groups
//!
//! A column group is a named layout region into which multiple fields are
//! placed side by side. Groups are declared with the model schema and are
//! read-only afterwards; layout looks them up by name.

use serde::{Deserialize, Serialize};

/// Number of span units in one layout row
pub const ROW_SPAN_UNITS: u8 = 12;

/// A named layout region for grouped fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    /// Group name, unique within a model schema
    pub name: String,

    /// Ordering weight (lower renders first)
    pub order: i32,

    /// Relative width in span units (out of [`ROW_SPAN_UNITS`])
    pub width: u8,

    /// Leading offset in span units
    pub offset: u8,
}

impl ColumnGroup {
    /// Create a new column group spanning a full row
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
            width: ROW_SPAN_UNITS,
            offset: 0,
        }
    }

    /// Set the relative width
    pub fn with_width(mut self, width: u8) -> Self {
        self.width = width.min(ROW_SPAN_UNITS);
        self
    }

    /// Set the leading offset
    pub fn with_offset(mut self, offset: u8) -> Self {
        self.offset = offset.min(ROW_SPAN_UNITS);
        self
    }

    /// Total span units this group occupies, offset included
    pub fn total_span(&self) -> u8 {
        (self.width + self.offset).min(ROW_SPAN_UNITS)
    }
}

// ============================================================================
// Tests
// ============================================================================
