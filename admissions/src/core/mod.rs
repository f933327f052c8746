//! Deterministic, pure eligibility logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests. The
//! rule table is static and immutable, so any number of concurrent
//! evaluations may share it without synchronization.

pub mod evaluator;
pub mod percentage;
pub mod recommender;
pub mod rules;
pub mod types;
pub mod verdict;
