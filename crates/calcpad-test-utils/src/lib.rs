#![deny(unsafe_code)]

//! Shared test utilities for the Calcpad workspace.
//!
//! Provides config builders, keystroke drivers, and tracing helpers so that
//! individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! calcpad-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod keys;
pub mod tracing_setup;

pub use keys::{press, press_on_fresh};
