//! Best-effort removal of a record's artifact files.

use std::path::Path;

use imagevault_db::models::ImageRecord;

/// Remove the three artifact files of a deleted record.
///
/// Files that are already gone are skipped silently; records outlive their
/// files routinely (manual removal, an earlier interrupted cleanup). Any
/// other filesystem error is logged and the remaining files are still
/// attempted. The caller has already committed the row deletion, so nothing
/// here can fail the operation.
///
/// Returns the number of files actually removed.
pub(crate) fn remove_artifacts(record: &ImageRecord) -> usize {
    let mut removed = 0;

    for path_str in record.artifact_paths() {
        let path = Path::new(path_str);
        if !path.exists() {
            continue;
        }
        match std::fs::remove_file(path) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to remove artifact {} of image {}: {}",
                    path.display(),
                    record.id,
                    e
                );
            }
        }
    }

    removed
}
