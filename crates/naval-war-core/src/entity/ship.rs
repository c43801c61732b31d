//! The player's ship and its weapon cooldowns.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Body, Bomb, Entity, EntityId, EntityKind, Missile};
use crate::config::WorldGeometry;
use crate::consts::{
    BOMB_DROP_INTERVAL_MS, BOMB_WIDTH, MISSILE_LAUNCH_INTERVAL_MS, SHIP_HEIGHT, SHIP_STEP,
    SHIP_WIDTH,
};

/// Elapsed-time gate between successive uses of a weapon.
///
/// # Example
///
/// ```
/// use naval_war_core::entity::Cooldown;
///
/// let mut gate = Cooldown::new(400.0);
/// assert!(gate.try_trigger());
/// assert!(!gate.try_trigger());
/// gate.tick(400.0);
/// assert!(gate.is_ready());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: f64,
    interval: f64,
}

impl Cooldown {
    /// Creates a ready cooldown that re-arms to `interval` on use.
    #[must_use]
    pub const fn new(interval: f64) -> Self {
        Self {
            remaining: 0.0,
            interval,
        }
    }

    /// Time left before the weapon can fire again. Never negative.
    #[must_use]
    pub const fn remaining(&self) -> f64 {
        self.remaining
    }

    /// The re-arm interval.
    #[must_use]
    pub const fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns `true` when the gate is open.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Decays the remaining time, saturating at zero.
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - elapsed_ms).max(0.0);
        }
    }

    /// Re-arms the gate if it is open. Returns whether it fired.
    pub fn try_trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining = self.interval;
        true
    }
}

/// The player-controlled surface ship.
///
/// Lateral position is clamped to `[0, world_width - SHIP_WIDTH]`. Movement
/// only happens through [`Ship::move_by`]; `update` just decays cooldowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    id: EntityId,
    body: Body,
    world_width: f64,
    facing: i8,
    bomb_cooldown: Cooldown,
    missile_cooldown: Cooldown,
}

impl Ship {
    /// Creates a ship with its top-left corner at `position`, facing right.
    ///
    /// `world_width` must be at least [`SHIP_WIDTH`]; the engine validates
    /// this before constructing a ship.
    #[must_use]
    pub fn new(id: EntityId, position: DVec2, world_width: f64) -> Self {
        Self {
            id,
            body: Body::new(position, DVec2::new(SHIP_WIDTH, SHIP_HEIGHT)),
            world_width,
            facing: 1,
            bomb_cooldown: Cooldown::new(BOMB_DROP_INTERVAL_MS),
            missile_cooldown: Cooldown::new(MISSILE_LAUNCH_INTERVAL_MS),
        }
    }

    /// `-1` when facing left, `+1` when facing right.
    #[must_use]
    pub const fn facing(&self) -> i8 {
        self.facing
    }

    /// Left edge of the hull.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.body.position().x
    }

    /// Largest legal `x`.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.world_width - self.body.size().x
    }

    /// Depth-charge cooldown.
    #[must_use]
    pub const fn bomb_cooldown(&self) -> &Cooldown {
        &self.bomb_cooldown
    }

    /// Missile cooldown.
    #[must_use]
    pub const fn missile_cooldown(&self) -> &Cooldown {
        &self.missile_cooldown
    }

    /// Moves one discrete step in `direction` (`< 0` left, `> 0` right,
    /// `0` stays put) and clamps to the world. A non-zero direction also
    /// updates the facing.
    pub fn move_by(&mut self, direction: i8) {
        if direction != 0 {
            self.facing = direction.signum();
        }
        let mut position = self.body.position();
        position.x = (position.x + f64::from(direction.signum()) * SHIP_STEP).clamp(0.0, self.max_x());
        self.body.set_position(position);
    }

    /// Releases a depth charge below the hull center if the drop cooldown
    /// has elapsed, re-arming it.
    pub fn drop_bomb(&mut self, id: EntityId) -> Option<Bomb> {
        if !self.bomb_cooldown.try_trigger() {
            return None;
        }
        let position = self.body.position();
        let size = self.body.size();
        let spawn = DVec2::new(position.x + size.x / 2.0 - BOMB_WIDTH / 2.0, position.y + size.y);
        Some(Bomb::new(id, spawn))
    }

    /// Launches a homing missile from the hull center if the launch
    /// cooldown has elapsed, re-arming it.
    pub fn launch_missile(&mut self, id: EntityId, world: &WorldGeometry) -> Option<Missile> {
        if !self.missile_cooldown.try_trigger() {
            return None;
        }
        Some(Missile::new(id, self.body.center(), world))
    }
}

impl Entity for Ship {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, elapsed_ms: f64) {
        self.bomb_cooldown.tick(elapsed_ms);
        self.missile_cooldown.tick(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldGeometry {
        WorldGeometry::new(800.0, 600.0)
    }

    fn ship_at(x: f64) -> Ship {
        Ship::new(EntityId::new(0), DVec2::new(x, 198.0), 800.0)
    }

    mod cooldown_tests {
        use super::*;

        #[test]
        fn starts_ready() {
            assert!(Cooldown::new(400.0).is_ready());
        }

        #[test]
        fn trigger_rearms_to_interval() {
            let mut gate = Cooldown::new(400.0);
            assert!(gate.try_trigger());
            assert!((gate.remaining() - 400.0).abs() < f64::EPSILON);
            assert!(!gate.try_trigger());
        }

        #[test]
        fn tick_saturates_at_zero() {
            let mut gate = Cooldown::new(400.0);
            gate.try_trigger();
            gate.tick(1000.0);
            assert_eq!(gate.remaining(), 0.0);
            assert!(gate.is_ready());
        }

        #[test]
        fn partial_tick_stays_closed() {
            let mut gate = Cooldown::new(400.0);
            gate.try_trigger();
            gate.tick(384.0);
            assert!(!gate.is_ready());
            gate.tick(16.0);
            assert!(gate.is_ready());
        }
    }

    #[test]
    fn move_steps_by_fixed_amount() {
        let mut ship = ship_at(350.0);
        ship.move_by(1);
        assert!((ship.x() - 354.8).abs() < 1e-9);
        ship.move_by(-1);
        assert!((ship.x() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn move_updates_facing() {
        let mut ship = ship_at(350.0);
        assert_eq!(ship.facing(), 1);
        ship.move_by(-1);
        assert_eq!(ship.facing(), -1);
        ship.move_by(0);
        assert_eq!(ship.facing(), -1);
        ship.move_by(1);
        assert_eq!(ship.facing(), 1);
    }

    #[test]
    fn move_clamps_left() {
        let mut ship = ship_at(2.0);
        ship.move_by(-1);
        assert_eq!(ship.x(), 0.0);
    }

    #[test]
    fn move_clamps_right() {
        let mut ship = ship_at(698.0);
        ship.move_by(1);
        assert_eq!(ship.x(), 700.0);
        ship.move_by(1);
        assert_eq!(ship.x(), 700.0);
    }

    #[test]
    fn bomb_spawns_below_hull_center() {
        let mut ship = ship_at(350.0);
        let bomb = ship.drop_bomb(EntityId::new(1)).unwrap();
        let pos = bomb.body().position();
        assert!((pos.x - 388.0).abs() < 1e-9);
        assert!((pos.y - 246.0).abs() < 1e-9);
    }

    #[test]
    fn second_drop_inside_cooldown_is_refused() {
        let mut ship = ship_at(350.0);
        assert!(ship.drop_bomb(EntityId::new(1)).is_some());
        ship.update(200.0);
        assert!(ship.drop_bomb(EntityId::new(2)).is_none());
        ship.update(200.0);
        assert!(ship.drop_bomb(EntityId::new(3)).is_some());
    }

    #[test]
    fn missile_cooldown_is_independent_of_bombs() {
        let mut ship = ship_at(350.0);
        assert!(ship.drop_bomb(EntityId::new(1)).is_some());
        assert!(ship.launch_missile(EntityId::new(2), &world()).is_some());
        assert!(ship.launch_missile(EntityId::new(3), &world()).is_none());
        ship.update(4999.0);
        assert!(ship.launch_missile(EntityId::new(4), &world()).is_none());
        ship.update(1.0);
        assert!(ship.launch_missile(EntityId::new(5), &world()).is_some());
    }

    #[test]
    fn missile_launches_from_hull_center() {
        let mut ship = ship_at(350.0);
        let missile = ship.launch_missile(EntityId::new(1), &world()).unwrap();
        assert_eq!(missile.body().center(), DVec2::new(400.0, 222.0));
    }
}
