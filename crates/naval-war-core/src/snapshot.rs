//! Owned, read-only views of the world for rendering.
//!
//! Every value here is a copy. Holding a snapshot never borrows the engine,
//! so a renderer may keep it across ticks or send it to another thread.

use serde::{Deserialize, Serialize};

use crate::entity::{Bomb, Entity, EntityId, Explosion, Missile, Ship, Submarine, SubmarineKind};
use crate::geometry::Rect;

/// The ship as the renderer needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    /// Hull box.
    pub bounds: Rect,
    /// Continuous left edge.
    pub x: f64,
    /// `-1` facing left, `+1` facing right.
    pub facing: i8,
    /// Time until the next bomb can drop.
    pub bomb_cooldown_ms: f64,
    /// Time until the next missile can launch.
    pub missile_cooldown_ms: f64,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            bounds: ship.bounds(),
            x: ship.x(),
            facing: ship.facing(),
            bomb_cooldown_ms: ship.bomb_cooldown().remaining(),
            missile_cooldown_ms: ship.missile_cooldown().remaining(),
        }
    }
}

/// A live depth charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombView {
    /// Bomb id.
    pub id: EntityId,
    /// Bomb box.
    pub bounds: Rect,
}

impl From<&Bomb> for BombView {
    fn from(bomb: &Bomb) -> Self {
        Self {
            id: bomb.id(),
            bounds: bomb.bounds(),
        }
    }
}

/// A live submarine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmarineView {
    /// Submarine id.
    pub id: EntityId,
    /// Hull box.
    pub bounds: Rect,
    /// Class, for sprite selection.
    pub kind: SubmarineKind,
    /// Remaining hit points.
    pub hit_points: u32,
    /// Sprite variant fixed at spawn.
    pub variant: u8,
    /// `true` when travelling right.
    pub heading_right: bool,
}

impl From<&Submarine> for SubmarineView {
    fn from(sub: &Submarine) -> Self {
        Self {
            id: sub.id(),
            bounds: sub.bounds(),
            kind: sub.submarine_kind(),
            hit_points: sub.hit_points(),
            variant: sub.variant(),
            heading_right: sub.velocity_x() > 0.0,
        }
    }
}

/// A fireball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    /// Explosion id.
    pub id: EntityId,
    /// Fireball box.
    pub bounds: Rect,
    /// Blast radius.
    pub radius: f64,
    /// Age over lifetime, in `[0, 1]`, for fade and frame selection.
    pub progress: f64,
}

impl From<&Explosion> for ExplosionView {
    fn from(explosion: &Explosion) -> Self {
        Self {
            id: explosion.id(),
            bounds: explosion.bounds(),
            radius: explosion.radius(),
            progress: explosion.progress(),
        }
    }
}

/// A missile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    /// Missile id.
    pub id: EntityId,
    /// Missile box, rounded to whole pixels.
    pub bounds: Rect,
    /// Heading in radians, always finite.
    pub heading: f64,
}

impl From<&Missile> for MissileView {
    fn from(missile: &Missile) -> Self {
        Self {
            id: missile.id(),
            bounds: missile.bounds(),
            heading: missile.heading(),
        }
    }
}

/// Everything a frame needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// World width.
    pub width: i32,
    /// World height.
    pub height: i32,
    /// Top of the sea band.
    pub sea_top: f64,
    /// Depth at which bombs auto-detonate.
    pub depth_threshold: f64,
    /// Score so far.
    pub score: u32,
    /// The player's ship.
    pub ship: ShipView,
    /// Live bombs.
    pub bombs: Vec<BombView>,
    /// Live submarines.
    pub submarines: Vec<SubmarineView>,
    /// Explosions still visible.
    pub explosions: Vec<ExplosionView>,
    /// Missiles in flight.
    pub missiles: Vec<MissileView>,
}
