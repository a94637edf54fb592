//! High-level image store coordinating database rows with artifact cleanup.
//!
//! Each operation checks its own connection out of the pool and returns it
//! on every exit path. Deletions commit the row removal first and only then
//! touch the filesystem: a crash in between leaves an orphaned file, never
//! a row pointing at state that cannot be explained.

use imagevault_common::{ImageId, Result, SortField, SortOrder};
use imagevault_db::models::{ImageRecord, NewImage};
use imagevault_db::pool::{get_conn, init_pool, DbPool};
use imagevault_db::queries::images;

use crate::config::Config;

use super::cleanup::remove_artifacts;

/// Metadata store for uploaded images.
///
/// Owns the lifecycle of the database rows; artifact files are created by an
/// external pipeline but deleted here once their owning record is deleted.
#[derive(Clone)]
pub struct ImageStore {
    pool: DbPool,
}

impl ImageStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database configured in `config` and create a store over it.
    ///
    /// Runs pending migrations as part of pool initialization.
    pub fn open(config: &Config) -> Result<Self> {
        let pool = init_pool(&config.database.path.to_string_lossy())?;
        Ok(Self::new(pool))
    }

    /// Insert a new image record and return its store-assigned id.
    ///
    /// `uploaded_at` defaults to the insertion time when absent. A failed
    /// insert leaves no partial state behind.
    pub async fn add(&self, image: NewImage) -> Result<ImageId> {
        let conn = get_conn(&self.pool)?;
        let id = images::insert_image(&conn, &image)?;
        tracing::debug!("Inserted image record {}", id);
        Ok(id)
    }

    /// Get a record by id. Absence is a value, not an error.
    pub async fn get(&self, id: ImageId) -> Result<Option<ImageRecord>> {
        let conn = get_conn(&self.pool)?;
        images::get_image(&conn, id)
    }

    /// List all records in natural (insertion) order.
    ///
    /// Runs a fresh query on every call.
    pub async fn list(&self) -> Result<Vec<ImageRecord>> {
        let conn = get_conn(&self.pool)?;
        images::list_images(&conn)
    }

    /// List all records sorted by a client-supplied field and direction.
    ///
    /// Keys resolve leniently: an unrecognized `sort_by` sorts by id, and
    /// anything but a case-insensitive `"desc"` sorts ascending. Malformed
    /// input is a policy fallback here, not an error.
    pub async fn list_sorted(&self, sort_by: &str, order: &str) -> Result<Vec<ImageRecord>> {
        let field = SortField::from_key(sort_by);
        let order = SortOrder::from_key(order);

        let conn = get_conn(&self.pool)?;
        images::list_images_sorted(&conn, field, order)
    }

    /// Delete a record and its three artifact files.
    ///
    /// Returns `false` without touching anything when no row matches.
    /// Otherwise the row deletion is committed first, then the files are
    /// removed on a blocking worker; files already gone are skipped and any
    /// other cleanup failure is logged without affecting the result. The
    /// return value answers for the database only.
    pub async fn delete(&self, id: ImageId) -> Result<bool> {
        let record = {
            let mut conn = get_conn(&self.pool)?;
            match images::remove_image(&mut conn, id)? {
                Some(record) => record,
                None => return Ok(false),
            }
        };

        match tokio::task::spawn_blocking(move || remove_artifacts(&record)).await {
            Ok(removed) => tracing::debug!("Deleted image {} ({} files removed)", id, removed),
            Err(e) => tracing::warn!("Artifact cleanup task for image {} failed: {}", id, e),
        }

        Ok(true)
    }

    /// Delete every record and its artifact files, returning the row count.
    ///
    /// All rows are removed in one committed transaction, then file cleanup
    /// runs row by row; one record's cleanup failure never stops the rest.
    /// An empty table returns `0` without writing anything.
    pub async fn delete_all(&self) -> Result<u64> {
        let records = {
            let mut conn = get_conn(&self.pool)?;
            images::remove_all_images(&mut conn)?
        };

        let count = records.len() as u64;
        if count == 0 {
            return Ok(0);
        }

        let cleanup = tokio::task::spawn_blocking(move || {
            records
                .iter()
                .map(|record| remove_artifacts(record))
                .sum::<usize>()
        });
        match cleanup.await {
            Ok(removed) => {
                tracing::info!("Deleted {} image records ({} files removed)", count, removed)
            }
            Err(e) => tracing::warn!("Artifact cleanup task failed: {}", e),
        }

        Ok(count)
    }
}
