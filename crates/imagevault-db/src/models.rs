//! Internal Rust models matching the database schema.
//!
//! This module provides strongly-typed structures that map to the `images`
//! table. Row-to-model mapping is done by an explicit parse function in the
//! query layer; the structs here carry no database state.

use chrono::{DateTime, Utc};
use imagevault_common::ImageId;
use serde::{Deserialize, Serialize};

/// A persisted image record.
///
/// The record owns the lifecycle of its database row and the deletion of the
/// three artifact files it points at. Existence of the row is independent of
/// the physical existence of the files: an external pipeline creates them,
/// and they may have been removed out-of-band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    /// Store-assigned id, never reused after deletion.
    pub id: ImageId,
    /// Location of the original uploaded image.
    pub image_path: String,
    /// Location of the derived thumbnail.
    pub thumbnail_path: String,
    /// Location of the derived embedding file.
    pub embedding_path: String,
    /// Byte size of the original image.
    pub size: i64,
    /// When the image was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl ImageRecord {
    /// The three artifact paths owned by this record, in cleanup order.
    #[must_use]
    pub fn artifact_paths(&self) -> [&str; 3] {
        [
            self.image_path.as_str(),
            self.thumbnail_path.as_str(),
            self.embedding_path.as_str(),
        ]
    }
}

/// Insert shape for a new image record.
///
/// The id is assigned by the store; `uploaded_at` defaults to the insertion
/// time when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewImage {
    pub image_path: String,
    pub thumbnail_path: String,
    pub embedding_path: String,
    pub size: i64,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}
