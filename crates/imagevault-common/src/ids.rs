//! Typed ID wrapper for image records.
//!
//! This module provides a newtype wrapper around the store-assigned integer
//! id so record identifiers cannot be confused with other integers (sizes,
//! counts) at API boundaries.

use serde::{Deserialize, Serialize};

/// Unique identifier for an image record.
///
/// Assigned by the store on insert (SQLite `AUTOINCREMENT` rowid) and never
/// reused after deletion. There is no constructor for fresh ids; values only
/// come out of the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(i64);

impl ImageId {
    /// Returns the raw integer value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ImageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ImageId> for i64 {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
