//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the remote response shape and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — envelope/record shapes, probe queries, report/output structs.
//! - `constants.rs` — endpoint defaults, public sample key, probe limits.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
