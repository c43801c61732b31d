//! Explosions.
//!
//! Damage is dealt once, when the engine resolves the blast at creation
//! (see [`crate::resolver::resolve_blast`]). The `Explosion` entity only
//! carries the visible fireball through its lifetime.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Body, Entity, EntityId, EntityKind};
use crate::consts::EXPLOSION_LIFETIME_MS;

/// A fading fireball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    id: EntityId,
    body: Body,
    radius: f64,
    age_ms: f64,
    lifetime_ms: f64,
}

impl Explosion {
    /// Creates a fireball of `radius` centered on `center`.
    #[must_use]
    pub fn new(id: EntityId, center: DVec2, radius: f64) -> Self {
        Self {
            id,
            body: Body::new(center - DVec2::splat(radius), DVec2::splat(radius * 2.0)),
            radius,
            age_ms: 0.0,
            lifetime_ms: EXPLOSION_LIFETIME_MS,
        }
    }

    /// Blast radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Blast center.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.body.center()
    }

    /// Time since detonation.
    #[must_use]
    pub const fn age_ms(&self) -> f64 {
        self.age_ms
    }

    /// Fraction of the lifetime elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }

    /// Returns `true` once the fireball has burned out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.body.is_active()
    }
}

impl Entity for Explosion {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Explosion
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, elapsed_ms: f64) {
        if !self.body.is_active() {
            return;
        }
        self.age_ms += elapsed_ms;
        if self.age_ms >= self.lifetime_ms {
            self.body.deactivate();
        }
    }
}
