//! Service layer containing probe logic and side-effect helpers.
//!
//! ## Service map
//! - `probe.rs` — run one GET per probe, classify the outcome, build the summary.
//! - `config.rs` — config file loading and flag/env/file/default merging.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod output;
pub mod probe;
