//! Codecat Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Codecat
//! source-bundling tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          codecat-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (CollectService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: SourceTree, BundleSink)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    codecat-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │       (CollectionFilter, Record)        │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use codecat_core::application::CollectService;
//!
//! // Use application service (with injected adapters)
//! let service = CollectService::new(source, sink);
//! let report = service.collect("./".as_ref(), "all_code.txt".as_ref()).unwrap();
//! println!("{} files bundled", report.total());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CollectReport, CollectService,
        ports::{BundleSink, SourceTree},
    };
    pub use crate::domain::{CollectionFilter, RECORD_SEPARATOR, Record, RecordBody};
    pub use crate::error::{CollectError, CollectResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
