//! Imagevault-DB: Database schema, migrations, and query operations
//!
//! This crate provides database functionality for imagevault using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use imagevault_db::models::NewImage;
//! use imagevault_db::pool::{init_pool, get_conn};
//! use imagevault_db::queries::images;
//!
//! let pool = init_pool("/var/lib/imagevault/db.sqlite").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let id = images::insert_image(
//!     &conn,
//!     &NewImage {
//!         image_path: "uploads/cat.jpg".into(),
//!         thumbnail_path: "thumbnails/cat.jpg".into(),
//!         embedding_path: "embeddings/cat.bin".into(),
//!         size: 204_800,
//!         uploaded_at: None,
//!     },
//! )
//! .unwrap();
//! println!("Inserted image {}", id);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
