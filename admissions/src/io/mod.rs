//! Side-effecting operations, kept out of the pure core.

pub mod audit;
