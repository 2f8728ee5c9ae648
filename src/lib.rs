//! # Cafe Finder Library
//!
//! This crate provides a small HTTP service answering "list up to N cafés in
//! city C, optionally filtered by a name substring S" over an immutable
//! in-memory catalog.
//!
//! ## Module Structure
//!
//! ```text
//! cafe_finder/
//! +-- config/         Configuration management
//! +-- domain/         Catalog, query validation and selection
//! +-- application/    Cafe service
//! +-- infrastructure/ Catalog loading and metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core lookup logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
