//! Selector abstraction for element location.
//!
//! A [`Selector`] is an opaque locator value. Page objects build them once
//! from typed parameters (row index, column name) instead of templating raw
//! strings at every call site, so a grid coordinate always resolves to the
//! same, unique locator.

use std::fmt;

/// An opaque CSS locator.
///
/// Constructed via [`Selector::css`] and refined with [`Selector::within`]
/// (descendant scope) or [`Selector::and`] (same-element refinement such as
/// a state class or attribute).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    /// Create a selector from a raw CSS string.
    #[must_use]
    pub fn css(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Scope a child selector under this one (descendant combinator).
    #[must_use]
    pub fn within(&self, child: &str) -> Self {
        Self(format!("{} {child}", self.0))
    }

    /// Refine this selector on the same element, e.g. `.show`,
    /// `:not([disabled])` or `[aria-expanded='true']`.
    #[must_use]
    pub fn and(&self, suffix: &str) -> Self {
        Self(format!("{}{suffix}", self.0))
    }

    /// The raw CSS text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-based table row index, matching `:nth-child` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row(u32);

impl Row {
    /// Create a row index. Rows are 1-based; zero is not a valid row.
    #[must_use]
    pub fn new(index: u32) -> Self {
        debug_assert!(index >= 1, "rows are 1-based");
        Self(index)
    }

    /// The raw 1-based index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed column names for list grids.
///
/// Each list page declares its own column enum and maps every variant to the
/// class fragment the grid markup uses (`td.column-<name>`).
pub trait ColumnName: Copy {
    /// The column's class fragment in the grid markup.
    fn as_str(&self) -> &'static str;
}
