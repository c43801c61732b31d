//! Whole-engine test suites.
//!
//! - `integration.rs`: gameplay scenarios driven through the public API
//! - `determinism.rs`: same seed and inputs give identical games
//! - `properties.rs`: property tests over random input sequences
//! - `helpers.rs`: engine builders and placement utilities

mod determinism;
mod helpers;
mod properties;

pub use helpers::*;
