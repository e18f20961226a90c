//! Core domain layer for Codecat.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (walking the tree, reading files, writing the bundle) is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
pub mod error;
pub mod filter;
pub mod record;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use filter::CollectionFilter;
pub use record::{RECORD_SEPARATOR, Record, RecordBody};
