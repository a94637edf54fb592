//! Shared test harness for integration tests.
//!
//! Provides [`TestVault`], which creates a temp directory holding a
//! file-backed SQLite database plus the artifact files each inserted record
//! points at. File-backed so that every store operation can check out its
//! own pooled connection, as in production.

use std::path::PathBuf;
use std::sync::Once;

use imagevault::ImageStore;
use imagevault_db::models::NewImage;
use imagevault_db::pool::init_pool;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Test harness wrapping an [`ImageStore`] backed by an on-disk database
/// in a temp directory.
pub struct TestVault {
    pub store: ImageStore,
    root: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestVault {
    /// Create a new harness with an empty database.
    pub fn new() -> Self {
        init_tracing();

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("vault.db");
        let pool = init_pool(db_path.to_str().unwrap()).expect("failed to init pool");
        let root = dir.path().to_path_buf();

        Self {
            store: ImageStore::new(pool),
            root,
            _dir: dir,
        }
    }

    /// Write the three artifact files for `stem` and return the insert shape
    /// pointing at them.
    pub fn new_image(&self, stem: &str, size: i64) -> NewImage {
        let image = self.root.join(format!("{stem}.jpg"));
        let thumbnail = self.root.join(format!("{stem}_thumb.jpg"));
        let embedding = self.root.join(format!("{stem}.bin"));
        for path in [&image, &thumbnail, &embedding] {
            std::fs::write(path, b"artifact").expect("failed to write artifact");
        }

        NewImage {
            image_path: image.to_string_lossy().into_owned(),
            thumbnail_path: thumbnail.to_string_lossy().into_owned(),
            embedding_path: embedding.to_string_lossy().into_owned(),
            size,
            uploaded_at: None,
        }
    }

    /// True when all three artifacts of `image` exist on disk.
    pub fn artifacts_exist(&self, image: &NewImage) -> bool {
        [
            &image.image_path,
            &image.thumbnail_path,
            &image.embedding_path,
        ]
        .iter()
        .all(|p| std::path::Path::new(p.as_str()).exists())
    }
}
