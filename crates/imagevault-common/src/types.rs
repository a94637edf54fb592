//! Sort key definitions for image listings.
//!
//! The sortable columns and the sort direction are closed enums. Client
//! input resolves through lenient lookups: an unrecognized sort field falls
//! back to the id column, and anything that is not a case-insensitive
//! `"desc"` sorts ascending. Malformed input is never rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column an image listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// The store-assigned record id (insertion order).
    Id,
    /// The upload timestamp.
    UploadedAt,
    /// The byte size of the original image.
    Size,
}

impl SortField {
    /// Resolve a client-supplied sort key.
    ///
    /// Unrecognized keys fall back to [`SortField::Id`] rather than failing.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "uploaded_at" => Self::UploadedAt,
            "size" => Self::Size,
            _ => Self::Id,
        }
    }

    /// Returns the database column name for this sort field.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::UploadedAt => "uploaded_at",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Direction an image listing is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Resolve a client-supplied order key.
    ///
    /// Any case-insensitive match of `"desc"` sorts descending; everything
    /// else sorts ascending.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}
