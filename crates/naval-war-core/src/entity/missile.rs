//! Homing missiles.
//!
//! Every tick a missile re-acquires the nearest active submarine (squared
//! distance between box centers, first one wins on ties) and points its
//! velocity at it. With nothing to chase it climbs straight up.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Body, Entity, EntityId, EntityKind, Submarine};
use crate::config::WorldGeometry;
use crate::consts::{
    MISSILE_BOUNDS_MARGIN_X, MISSILE_BOUNDS_MARGIN_Y, MISSILE_HEIGHT, MISSILE_LAUNCH_VY,
    MISSILE_LIFETIME_MS, MISSILE_MIN_STEER_DISTANCE, MISSILE_SPEED, MISSILE_WIDTH,
};
use crate::geometry::Rect;

/// Returns the index of the active submarine whose box center is nearest
/// to `from`, or `None` when no submarine is active.
#[must_use]
pub fn nearest_target(from: DVec2, submarines: &[Submarine]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, sub) in submarines.iter().enumerate() {
        if !sub.is_active() {
            continue;
        }
        let d2 = from.distance_squared(sub.bounds().center());
        if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
            best = Some((index, d2));
        }
    }
    best.map(|(index, _)| index)
}

/// A player-launched homing missile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    id: EntityId,
    body: Body,
    velocity: DVec2,
    age_ms: f64,
    min_corner: DVec2,
    max_corner: DVec2,
    expired: bool,
}

impl Missile {
    /// Creates a missile centered on `center`, climbing.
    #[must_use]
    pub fn new(id: EntityId, center: DVec2, world: &WorldGeometry) -> Self {
        let size = DVec2::new(MISSILE_WIDTH, MISSILE_HEIGHT);
        Self {
            id,
            body: Body::new(center - size / 2.0, size),
            velocity: DVec2::new(0.0, MISSILE_LAUNCH_VY),
            age_ms: 0.0,
            min_corner: DVec2::new(-MISSILE_BOUNDS_MARGIN_X, -MISSILE_BOUNDS_MARGIN_Y),
            max_corner: DVec2::new(
                world.width + MISSILE_BOUNDS_MARGIN_X,
                world.height + MISSILE_BOUNDS_MARGIN_Y,
            ),
            expired: false,
        }
    }

    /// Current velocity, px per step.
    #[must_use]
    pub const fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Time in flight.
    #[must_use]
    pub const fn age_ms(&self) -> f64 {
        self.age_ms
    }

    /// Returns `true` if the missile ran out of fuel or left the play area
    /// (as opposed to striking a target).
    #[must_use]
    pub const fn expired(&self) -> bool {
        self.expired
    }

    /// Heading angle in radians (`atan2(vy, vx)`); straight up when the
    /// velocity is zero.
    #[must_use]
    pub fn heading(&self) -> f64 {
        if self.velocity == DVec2::ZERO {
            return -FRAC_PI_2;
        }
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Points the velocity at the nearest active submarine, or straight up
    /// when there is none. A target closer than
    /// [`MISSILE_MIN_STEER_DISTANCE`] keeps the previous heading.
    pub fn retarget(&mut self, submarines: &[Submarine]) {
        let center = self.body.center();
        match nearest_target(center, submarines) {
            Some(index) => {
                let offset = submarines[index].bounds().center() - center;
                let distance = offset.length();
                if distance > MISSILE_MIN_STEER_DISTANCE {
                    self.velocity = offset / distance * MISSILE_SPEED;
                }
            }
            None => self.velocity = DVec2::new(0.0, -MISSILE_SPEED),
        }
    }

    /// Marks the missile spent after it struck something.
    pub fn detonate(&mut self) {
        self.body.deactivate();
    }

    fn out_of_bounds(&self) -> bool {
        let p = self.body.position();
        p.x < self.min_corner.x || p.x > self.max_corner.x || p.y < self.min_corner.y || p.y > self.max_corner.y
    }
}

impl Entity for Missile {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Missile
    }

    fn body(&self) -> &Body {
        &self.body
    }

    /// Ages and integrates the missile. Steering happens in
    /// [`Missile::retarget`], which the engine runs first.
    fn update(&mut self, elapsed_ms: f64) {
        if !self.body.is_active() {
            return;
        }
        self.age_ms += elapsed_ms;
        if self.age_ms >= MISSILE_LIFETIME_MS {
            self.expired = true;
            self.body.deactivate();
            return;
        }

        self.body.translate(self.velocity * super::frame_steps(elapsed_ms));

        if self.out_of_bounds() {
            self.expired = true;
            self.body.deactivate();
        }
    }

    fn bounds(&self) -> Rect {
        self.body.rounded_bounds()
    }
}
