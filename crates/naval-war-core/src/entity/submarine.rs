//! Enemy submarines.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Body, Entity, EntityId, EntityKind};
use crate::config::WorldGeometry;
use crate::consts::{
    ARMORED_PROBABILITY, BLACK_SCORE, BLACK_SPEED_RANGE, BOB_AMPLITUDE, BOB_PHASE_STEP,
    RED_PROBABILITY, RED_SCORE, RED_SPEED_RANGE, SUBMARINE_DESPAWN_MARGIN, SUBMARINE_HEIGHT,
    SUBMARINE_SPAWN_BAND_MARGIN, SUBMARINE_SPAWN_TOP_OFFSET, SUBMARINE_VARIANTS, SUBMARINE_WIDTH,
};

/// Submarine class. Decides speed band and score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmarineKind {
    /// Fast, worth [`RED_SCORE`].
    Red,
    /// Slow, worth [`BLACK_SCORE`].
    Black,
}

impl SubmarineKind {
    /// Score granted for sinking this kind.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Red => RED_SCORE,
            Self::Black => BLACK_SCORE,
        }
    }

    /// Half-open speed range, px per step.
    #[must_use]
    pub const fn speed_range(self) -> (f64, f64) {
        match self {
            Self::Red => RED_SPEED_RANGE,
            Self::Black => BLACK_SPEED_RANGE,
        }
    }
}

/// Screen edge a submarine enters from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Enters at the left edge and travels right.
    Left,
    /// Enters at the right edge and travels left.
    Right,
}

impl Side {
    /// `-1` for left, `+1` for right.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Direction of travel along x: opposite to the spawn side.
    #[must_use]
    pub const fn heading(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// A submarine transiting the sea band.
///
/// Kind and score are fixed at construction. Hit points only go down;
/// the engine deactivates the hull once they reach zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submarine {
    pub(crate) id: EntityId,
    body: Body,
    kind: SubmarineKind,
    side: Side,
    vx: f64,
    bob_phase: f64,
    hit_points: u32,
    variant: u8,
    despawn_min_x: f64,
    despawn_max_x: f64,
}

impl Submarine {
    /// Creates a one-hit submarine at the `side` spawn edge, at the sea top,
    /// moving at the bottom of its kind's speed band with zero bob phase.
    ///
    /// Use the `with_*` builders to override individual properties.
    #[must_use]
    pub fn new(id: EntityId, kind: SubmarineKind, side: Side, world: &WorldGeometry) -> Self {
        let x = match side {
            Side::Left => -SUBMARINE_WIDTH,
            Side::Right => world.width + SUBMARINE_WIDTH,
        };
        Self {
            id,
            body: Body::new(
                DVec2::new(x, world.sea_top),
                DVec2::new(SUBMARINE_WIDTH, SUBMARINE_HEIGHT),
            ),
            kind,
            side,
            vx: kind.speed_range().0 * side.heading(),
            bob_phase: 0.0,
            hit_points: 1,
            variant: 0,
            despawn_min_x: -SUBMARINE_DESPAWN_MARGIN,
            despawn_max_x: world.width + SUBMARINE_DESPAWN_MARGIN,
        }
    }

    /// Rolls a submarine for `side`: kind, hit points, speed, depth, bob
    /// phase and sprite variant all come from `rng`.
    pub fn spawn<R: Rng + ?Sized>(id: EntityId, side: Side, world: &WorldGeometry, rng: &mut R) -> Self {
        let kind = if rng.gen_bool(RED_PROBABILITY) {
            SubmarineKind::Red
        } else {
            SubmarineKind::Black
        };
        let hit_points = if rng.gen_bool(ARMORED_PROBABILITY) { 2 } else { 1 };
        let (min_speed, max_speed) = kind.speed_range();
        let speed = rng.gen_range(min_speed..max_speed);
        let band = (world.height - world.sea_top - SUBMARINE_SPAWN_BAND_MARGIN).max(0.0);
        let y = world.sea_top + SUBMARINE_SPAWN_TOP_OFFSET + rng.gen::<f64>() * band;
        let bob_phase = rng.gen::<f64>() * TAU;
        let variant = rng.gen_range(0..SUBMARINE_VARIANTS);

        let mut sub = Self::new(id, kind, side, world)
            .with_speed(speed)
            .with_hit_points(hit_points)
            .with_bob_phase(bob_phase)
            .with_variant(variant);
        sub.body.set_position(DVec2::new(sub.body.position().x, y));
        sub
    }

    /// Places the hull's top-left corner at `position`.
    #[must_use]
    pub fn with_position(mut self, position: DVec2) -> Self {
        self.body.set_position(position);
        self
    }

    /// Sets the speed magnitude, keeping the direction of travel.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.vx = speed * self.side.heading();
        self
    }

    /// Sets the hit-point pool.
    #[must_use]
    pub fn with_hit_points(mut self, hit_points: u32) -> Self {
        self.hit_points = hit_points;
        self
    }

    /// Sets the initial bob phase in radians.
    #[must_use]
    pub fn with_bob_phase(mut self, bob_phase: f64) -> Self {
        self.bob_phase = bob_phase;
        self
    }

    /// Sets the sprite variant.
    #[must_use]
    pub fn with_variant(mut self, variant: u8) -> Self {
        self.variant = variant;
        self
    }

    /// Submarine class.
    #[must_use]
    pub const fn submarine_kind(&self) -> SubmarineKind {
        self.kind
    }

    /// Score granted when this hull is sunk.
    #[must_use]
    pub const fn score_value(&self) -> u32 {
        self.kind.score()
    }

    /// Spawn edge.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Signed horizontal speed, px per step.
    #[must_use]
    pub const fn velocity_x(&self) -> f64 {
        self.vx
    }

    /// Remaining hit points.
    #[must_use]
    pub const fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Sprite variant in `[0, SUBMARINE_VARIANTS)`.
    #[must_use]
    pub const fn variant(&self) -> u8 {
        self.variant
    }

    /// Returns `true` when hit points are exhausted.
    #[must_use]
    pub const fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Removes up to `amount` hit points. Returns `true` only on the call
    /// that brings them to zero.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if self.hit_points == 0 {
            return false;
        }
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.hit_points == 0
    }

    pub(crate) fn deactivate(&mut self) {
        self.body.deactivate();
    }
}

impl Entity for Submarine {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Submarine
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, elapsed_ms: f64) {
        if !self.body.is_active() {
            return;
        }
        let steps = super::frame_steps(elapsed_ms);
        self.bob_phase += BOB_PHASE_STEP * steps;
        self.body.translate(DVec2::new(
            self.vx * steps,
            self.bob_phase.sin() * BOB_AMPLITUDE * steps,
        ));

        let x = self.body.position().x;
        if x < self.despawn_min_x || x > self.despawn_max_x {
            self.body.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn world() -> WorldGeometry {
        WorldGeometry::new(800.0, 600.0)
    }

    #[test]
    fn left_spawn_starts_off_screen_moving_right() {
        let sub = Submarine::new(EntityId::new(1), SubmarineKind::Black, Side::Left, &world());
        assert_eq!(sub.side().sign(), -1);
        assert_eq!(sub.body().position().x, -80.0);
        assert!(sub.velocity_x() > 0.0);
    }

    #[test]
    fn right_spawn_starts_off_screen_moving_left() {
        let sub = Submarine::new(EntityId::new(1), SubmarineKind::Red, Side::Right, &world());
        assert_eq!(sub.side().sign(), 1);
        assert_eq!(sub.body().position().x, 880.0);
        assert!(sub.velocity_x() < 0.0);
    }

    #[test]
    fn score_is_fixed_by_kind() {
        let red = Submarine::new(EntityId::new(1), SubmarineKind::Red, Side::Left, &world())
            .with_hit_points(2);
        let black = Submarine::new(EntityId::new(2), SubmarineKind::Black, Side::Left, &world());
        assert_eq!(red.score_value(), 20);
        assert_eq!(black.score_value(), 10);
    }

    #[test]
    fn damage_reports_only_the_killing_blow() {
        let mut sub = Submarine::new(EntityId::new(1), SubmarineKind::Red, Side::Left, &world())
            .with_hit_points(2);
        assert!(!sub.apply_damage(1));
        assert_eq!(sub.hit_points(), 1);
        assert!(sub.apply_damage(1));
        assert!(sub.is_sunk());
        assert!(!sub.apply_damage(1));
        assert_eq!(sub.hit_points(), 0);
    }

    #[test]
    fn update_moves_and_bobs() {
        let mut sub = Submarine::new(EntityId::new(1), SubmarineKind::Black, Side::Left, &world())
            .with_position(DVec2::new(100.0, 300.0))
            .with_speed(1.5);
        sub.update(16.0);
        let pos = sub.body().position();
        assert!((pos.x - 101.5).abs() < 1e-9);
        assert!((pos.y - (300.0 + 0.03_f64.sin() * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn leaves_play_past_despawn_margin() {
        let mut sub = Submarine::new(EntityId::new(1), SubmarineKind::Red, Side::Left, &world())
            .with_position(DVec2::new(999.0, 300.0))
            .with_speed(2.0);
        sub.update(16.0);
        assert!(!sub.is_active());
    }

    #[test]
    fn spawn_edge_is_not_a_despawn() {
        let mut sub = Submarine::new(EntityId::new(1), SubmarineKind::Black, Side::Right, &world());
        sub.update(16.0);
        assert!(sub.is_active());
    }

    #[test]
    fn rolled_submarines_respect_their_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let w = world();
        for i in 0..200 {
            let side = if i % 2 == 0 { Side::Left } else { Side::Right };
            let sub = Submarine::spawn(EntityId::new(i), side, &w, &mut rng);
            let (lo, hi) = sub.submarine_kind().speed_range();
            let speed = sub.velocity_x().abs();
            assert!(speed >= lo && speed < hi);
            assert_eq!(sub.velocity_x().signum(), side.heading());
            assert!(sub.hit_points() == 1 || sub.hit_points() == 2);
            assert!(sub.variant() < SUBMARINE_VARIANTS);
            let y = sub.body().position().y;
            assert!(y >= w.sea_top + 20.0 && y <= w.height - 60.0);
        }
    }
}
