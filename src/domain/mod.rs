//! # Domain Layer
//!
//! Core lookup logic of the café service, independent of HTTP and configuration.
//!
//! ## Structure
//!
//! - **catalog**: Immutable city → café list mapping
//! - **query**: Query validation, selection and rendering
//!
//! Everything here is synchronous and pure; the catalog is never mutated
//! once built, so concurrent readers need no coordination.

pub mod catalog;
pub mod query;

// Re-export commonly used types
pub use catalog::Catalog;
pub use query::{render, select, CafeQuery, QueryError};
