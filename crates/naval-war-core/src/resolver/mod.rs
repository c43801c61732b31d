//! Resolvers for the detect phase of a tick.
//!
//! Resolvers read entity state and report what should happen; the engine
//! applies the results. Keeping the two apart means no collection is ever
//! mutated structurally while it is being iterated.
//!
//! # Passes
//!
//! - [`depth_triggered`]: bombs that sank past the depth threshold
//! - [`first_contact`]: the first submarine a box overlaps
//! - [`resolve_blast`]: area damage from one explosion, reported as [`Kill`]s
//!
//! # Invariants
//!
//! - Detection never changes liveness; only the engine deactivates entities
//! - Results follow collection order, so a seeded game replays identically

mod blast;
mod collision;

pub use blast::{resolve_blast, Kill};
pub use collision::{depth_triggered, first_contact};
