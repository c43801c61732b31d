//! Entity module for the naval simulation.
//!
//! This module provides the core entity types:
//! - [`EntityId`]: Unique identifier handed out by the engine
//! - [`EntityKind`]: Type classification used in snapshots, events and logs
//! - [`Body`]: Position, size and the one-way `active` flag every entity carries
//! - [`Entity`]: The per-tick update contract implemented by each concrete kind
//!
//! # Lifecycle
//!
//! Every entity starts active. [`Body::deactivate`] is the only way to change
//! the flag and there is no way back: an inactive entity takes no further part
//! in updates or collisions and is purged by its owning collection.
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use naval_war_core::entity::{Bomb, Entity, EntityId};
//!
//! let mut bomb = Bomb::new(EntityId::new(7), DVec2::new(100.0, 50.0));
//! assert!(bomb.is_active());
//! bomb.update(16.0);
//! assert!(bomb.body().position().y > 50.0);
//! ```

pub mod bomb;
pub mod explosion;
pub mod missile;
pub mod ship;
pub mod submarine;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Rect;

pub use bomb::Bomb;
pub use explosion::Explosion;
pub use missile::Missile;
pub use ship::{Cooldown, Ship};
pub use submarine::{Side, Submarine, SubmarineKind};

/// Unique identifier for an entity.
///
/// Identifiers are assigned monotonically by the engine and never reused
/// within one game, so they double as a stable creation order.
///
/// # Example
///
/// ```
/// use naval_war_core::entity::EntityId;
///
/// let id1 = EntityId::new(1);
/// let id2 = EntityId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Entity type tag.
///
/// The set of kinds is closed: the engine owns one collection per kind and
/// matches on this tag when reporting events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's surface ship.
    Ship,
    /// A sinking depth charge.
    Bomb,
    /// An enemy submarine transiting the sea band.
    Submarine,
    /// A homing missile.
    Missile,
    /// A blast; damage happens at creation, the rest is cosmetic.
    Explosion,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ship => write!(f, "Ship"),
            Self::Bomb => write!(f, "Bomb"),
            Self::Submarine => write!(f, "Submarine"),
            Self::Missile => write!(f, "Missile"),
            Self::Explosion => write!(f, "Explosion"),
        }
    }
}

/// Position, size and liveness shared by every entity.
///
/// `position` is the top-left corner in continuous world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    position: DVec2,
    size: DVec2,
    active: bool,
}

impl Body {
    /// Creates an active body.
    #[must_use]
    pub const fn new(position: DVec2, size: DVec2) -> Self {
        Self {
            position,
            size,
            active: true,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> DVec2 {
        self.position
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> DVec2 {
        self.size
    }

    /// Returns `true` until [`Body::deactivate`] is called.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the body inactive. Irreversible.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub(crate) fn translate(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Continuous center of the body.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.position + self.size / 2.0
    }

    /// Bounding box with every coordinate truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            self.size.x as i32,
            self.size.y as i32,
        )
    }

    /// Bounding box with every coordinate rounded to the nearest pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_bounds(&self) -> Rect {
        Rect::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
            self.size.x.round() as i32,
            self.size.y.round() as i32,
        )
    }
}

/// The per-tick contract shared by every entity kind.
///
/// `update` receives the elapsed time in milliseconds and must be a no-op on
/// an inactive entity.
pub trait Entity {
    /// The entity's identifier.
    fn id(&self) -> EntityId;

    /// The entity's kind tag.
    fn kind(&self) -> EntityKind;

    /// Shared position/size/liveness state.
    fn body(&self) -> &Body;

    /// Advances the entity by `elapsed_ms`.
    fn update(&mut self, elapsed_ms: f64);

    /// Returns `true` while the entity takes part in the simulation.
    fn is_active(&self) -> bool {
        self.body().is_active()
    }

    /// Bounding box used for collisions and rendering.
    fn bounds(&self) -> Rect {
        self.body().bounds()
    }
}

/// Number of reference frames covered by `elapsed_ms`.
#[must_use]
pub(crate) fn frame_steps(elapsed_ms: f64) -> f64 {
    elapsed_ms / crate::consts::FRAME_MS
}
