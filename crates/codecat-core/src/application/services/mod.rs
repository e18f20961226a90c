//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "bundle a source tree into one file".

pub mod collect_service;

pub use collect_service::{CollectReport, CollectService};
