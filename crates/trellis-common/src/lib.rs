//! Common utilities for the Trellis HTML builder.
//!
//! This crate provides shared infrastructure used by the other Trellis crates:
//! - **Warning System** - deduplicated diagnostics for input that was
//!   silently normalized away (empty attribute names, unsupported values)

pub mod warning;
