//! # Naval War Core
//!
//! Simulation core for Naval War, a 2D arcade game: a ship patrols the
//! shoreline, drops depth charges or launches homing missiles, and scores
//! by sinking submarines that cross the sea band.
//!
//! This crate holds the gameplay only. Windows, sprites and key capture
//! belong to the host, which feeds elapsed time and player input into an
//! [`Engine`] and draws the [`WorldSnapshot`] it hands back.
//!
//! ## Architecture
//!
//! - **Entities**: ship, bombs, submarines, missiles, explosions ([`entity`])
//! - **Resolvers**: depth, contact and blast checks that report, never mutate ([`resolver`])
//! - **Engine**: owns every collection and applies what the resolvers report ([`engine`])
//!
//! ## Usage
//!
//! ```
//! use naval_war_core::{Command, Engine, EngineConfig, SimEvent};
//!
//! let mut engine = Engine::seeded(EngineConfig::default(), 7)?;
//! engine.start();
//! engine.apply(Command::DropBomb);
//! for _ in 0..60 {
//!     engine.tick(16);
//! }
//! let events = engine.drain_events();
//! assert!(events.iter().any(|e| matches!(e, SimEvent::Detonation { .. })));
//! # Ok::<(), naval_war_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod consts;
pub mod engine;
pub mod entity;
pub mod event;
pub mod geometry;
pub mod input;
pub mod resolver;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, EngineConfig, WorldGeometry};
pub use engine::Engine;
pub use event::{DetonationCause, SimEvent};
pub use input::{Command, Intents};
pub use snapshot::WorldSnapshot;
