//! Command implementations.
//!
//! `codecat` has a single use case, so there is exactly one command and no
//! dispatch table: `main` calls straight into [`collect::execute`].

pub mod collect;
