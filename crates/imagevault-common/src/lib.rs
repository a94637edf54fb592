//! Imagevault-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across imagevault:
//!
//! - **Typed IDs**: A type-safe wrapper around the store-assigned record id
//! - **Sort Keys**: Closed enums for the sortable columns and sort direction
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use imagevault_common::{Error, ImageId, Result, SortField, SortOrder};
//!
//! // Typed record ids wrap the database rowid
//! let id = ImageId::from(42);
//! assert_eq!(id.as_i64(), 42);
//!
//! // Sort keys resolve leniently from client input
//! assert_eq!(SortField::from_key("size"), SortField::Size);
//! assert_eq!(SortField::from_key("bogus"), SortField::Id);
//! assert_eq!(SortOrder::from_key("DESC"), SortOrder::Desc);
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::not_found("image"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
