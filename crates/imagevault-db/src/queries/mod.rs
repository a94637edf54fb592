//! Database query operations.
//!
//! Query functions take a borrowed connection and return models from
//! `crate::models`. Callers own the connection scope; the store layer checks
//! one out of the pool per operation.

pub mod images;
