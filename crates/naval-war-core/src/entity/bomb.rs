//! Depth charges.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Body, Entity, EntityId, EntityKind};
use crate::consts::{BOMB_GRAVITY, BOMB_HEIGHT, BOMB_INITIAL_VY, BOMB_WIDTH};

/// A sinking depth charge.
///
/// Sink speed starts at [`BOMB_INITIAL_VY`] and grows by [`BOMB_GRAVITY`]
/// per step. Each update covers at least one step, even for short frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    id: EntityId,
    body: Body,
    vy: f64,
    exploded: bool,
}

impl Bomb {
    /// Creates a bomb with its top-left corner at `position`.
    #[must_use]
    pub fn new(id: EntityId, position: DVec2) -> Self {
        Self {
            id,
            body: Body::new(position, DVec2::new(BOMB_WIDTH, BOMB_HEIGHT)),
            vy: BOMB_INITIAL_VY,
            exploded: false,
        }
    }

    /// Current sink speed, px per step.
    #[must_use]
    pub const fn vertical_velocity(&self) -> f64 {
        self.vy
    }

    /// Returns `true` once the bomb has detonated.
    #[must_use]
    pub const fn has_exploded(&self) -> bool {
        self.exploded
    }

    /// Latches the detonation and deactivates the bomb.
    ///
    /// Returns `false` if the bomb had already exploded, in which case
    /// nothing changes.
    pub fn explode(&mut self) -> bool {
        if self.exploded {
            return false;
        }
        self.exploded = true;
        self.body.deactivate();
        true
    }
}

impl Entity for Bomb {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Bomb
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, elapsed_ms: f64) {
        if !self.body.is_active() {
            return;
        }
        let steps = super::frame_steps(elapsed_ms).max(1.0);
        self.body.translate(DVec2::new(0.0, self.vy * steps));
        self.vy += BOMB_GRAVITY * steps;
    }
}
