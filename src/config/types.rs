use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory the upload pipeline writes original images into
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,

    /// Directory the pipeline writes thumbnails into
    #[serde(default = "default_thumbnail_dir")]
    pub thumbnail_dir: PathBuf,

    /// Directory the pipeline writes embedding files into
    #[serde(default = "default_embedding_dir")]
    pub embedding_dir: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("imagevault.db")
}
fn default_image_dir() -> PathBuf {
    PathBuf::from("data/images")
}
fn default_thumbnail_dir() -> PathBuf {
    PathBuf::from("data/thumbnails")
}
fn default_embedding_dir() -> PathBuf {
    PathBuf::from("data/embeddings")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            thumbnail_dir: default_thumbnail_dir(),
            embedding_dir: default_embedding_dir(),
        }
    }
}
