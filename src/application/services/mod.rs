//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CafeService**: Café lookup by city with count and name filters

pub mod cafe_service;

pub use cafe_service::{CafeListDto, CafeService, CafeServiceImpl};
