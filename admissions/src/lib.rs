//! Admission eligibility screening.
//!
//! This crate decides whether a student record qualifies for a desired
//! course under a fixed rule table, and which alternative courses the same
//! record would qualify for. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rule table, gates, percentage
//!   math, recommendation scan). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (append-only audit logs).
//!
//! [`validate`] sits at the boundary: it turns untrusted wire input into a
//! [`core::types::Student`] or reports exactly which field constraint failed.

pub mod core;
pub mod io;
pub mod validate;
