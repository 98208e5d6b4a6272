//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — all/fetch/filter.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate request and classification logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
