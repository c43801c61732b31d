//! The simulation engine and its per-tick loop.
//!
//! [`Engine`] owns the ship and every bomb, submarine, missile and explosion.
//! Each [`Engine::tick`] runs a fixed sequence of phases:
//!
//! 1. **SHIP**: decay weapon cooldowns
//! 2. **INTEGRATE**: move bombs, submarines, explosions, then steer and move missiles
//! 3. **DEPTH**: detonate bombs that sank past the depth threshold
//! 4. **CONTACT**: detonate bombs, then missiles, touching a live submarine
//! 5. **PURGE**: drop inactive entities from their collections
//! 6. **SPAWN**: advance the spawn timer and maybe launch a submarine
//!
//! Every detonation resolves its blast immediately, so kills from one
//! explosion are visible to the next one in the same tick.
//!
//! # Determinism
//!
//! All randomness comes from the injected RNG. Two engines built from the
//! same seed and fed the same inputs produce identical snapshots.
//!
//! # Example
//!
//! ```
//! use naval_war_core::{Engine, EngineConfig, Intents};
//!
//! let mut engine = Engine::seeded(EngineConfig::default(), 42).unwrap();
//! engine.start();
//! for _ in 0..120 {
//!     engine.step(16, Intents::MOVE_RIGHT | Intents::DROP_BOMB);
//! }
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.sea_top, 228.0);
//! assert!(snapshot.ship.x > 350.0);
//! ```

use std::fmt;
use std::mem;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig, WorldGeometry};
use crate::consts::{
    CONTACT_BLAST_RADIUS, DEPTH_BLAST_RADIUS, FIRST_SPAWN_DELAY_MS, MISSILE_BLAST_RADIUS,
    SHIP_DRAFT, SHIP_WIDTH, SPAWN_DELAY_MS,
};
use crate::entity::{Bomb, Entity, EntityId, Explosion, Missile, Ship, Side, Submarine};
use crate::event::{DetonationCause, SimEvent};
use crate::input::{Command, Intents};
use crate::resolver::{depth_triggered, first_contact, resolve_blast, Kill};
use crate::snapshot::{ShipView, WorldSnapshot};

// =============================================================================
// Engine
// =============================================================================

/// The Naval War simulation.
///
/// Generic over the random source so tests and replays can inject any
/// seeded [`Rng`]; [`Engine::seeded`] uses [`ChaCha8Rng`].
///
/// The engine starts stopped. While stopped, [`Engine::tick`] does nothing
/// and all state is kept, so [`Engine::start`] resumes where it left off.
#[derive(Clone)]
pub struct Engine<R: Rng = ChaCha8Rng> {
    config: EngineConfig,
    world: WorldGeometry,
    rng: R,
    ship: Ship,
    bombs: Vec<Bomb>,
    submarines: Vec<Submarine>,
    explosions: Vec<Explosion>,
    missiles: Vec<Missile>,
    score: u32,
    running: bool,
    elapsed_ms: u64,
    spawn_timer_ms: f64,
    next_spawn_delay_ms: f64,
    next_id: u64,
    events: Vec<SimEvent>,
}

impl<R: Rng> fmt::Debug for Engine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("score", &self.score)
            .field("running", &self.running)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("bombs", &self.bombs.len())
            .field("submarines", &self.submarines.len())
            .field("explosions", &self.explosions.len())
            .field("missiles", &self.missiles.len())
            .finish_non_exhaustive()
    }
}

impl Engine<ChaCha8Rng> {
    /// Creates an engine driven by a [`ChaCha8Rng`] seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not describe a playable world.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine for `config`, drawing all randomness from `rng`.
    ///
    /// The ship (id 0) is centered horizontally and sits just above the sea
    /// top. Score and spawn timer start at zero; the first submarine is due
    /// after a delay in `[1000, 2500)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not describe a playable world.
    pub fn new(config: EngineConfig, mut rng: R) -> Result<Self, ConfigError> {
        let world = config.geometry()?;
        #[allow(clippy::cast_possible_truncation)]
        let ship_x = (config.width - SHIP_WIDTH as i32) / 2;
        let ship = Ship::new(
            EntityId::new(0),
            DVec2::new(f64::from(ship_x), world.sea_top - f64::from(SHIP_DRAFT)),
            world.width,
        );
        let next_spawn_delay_ms = rng.gen_range(FIRST_SPAWN_DELAY_MS.0..FIRST_SPAWN_DELAY_MS.1);

        Ok(Self {
            config,
            world,
            rng,
            ship,
            bombs: Vec::new(),
            submarines: Vec::new(),
            explosions: Vec::new(),
            missiles: Vec::new(),
            score: 0,
            running: false,
            elapsed_ms: 0,
            spawn_timer_ms: 0.0,
            next_spawn_delay_ms,
            next_id: 1,
            events: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Lets [`Engine::tick`] advance the world.
    pub fn start(&mut self) {
        self.running = true;
        trace!(elapsed_ms = self.elapsed_ms, "engine started");
    }

    /// Freezes the world. State is kept intact.
    pub fn stop(&mut self) {
        self.running = false;
        trace!(elapsed_ms = self.elapsed_ms, "engine stopped");
    }

    /// Returns `true` between [`Engine::start`] and [`Engine::stop`].
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the simulation by `elapsed_ms`. Does nothing while stopped.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if !self.running {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let dt = elapsed_ms as f64;
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        // PHASE 1: SHIP
        self.ship.update(dt);

        // PHASE 2: INTEGRATE
        for bomb in &mut self.bombs {
            bomb.update(dt);
        }
        for sub in &mut self.submarines {
            sub.update(dt);
        }
        for explosion in &mut self.explosions {
            explosion.update(dt);
        }
        for missile in &mut self.missiles {
            if missile.is_active() {
                missile.retarget(&self.submarines);
                missile.update(dt);
            }
        }

        // PHASE 3: DEPTH
        for index in depth_triggered(&self.bombs, self.world.depth_threshold) {
            self.detonate_bomb(index, DEPTH_BLAST_RADIUS, DetonationCause::Depth);
        }

        // PHASE 4: CONTACT
        for index in 0..self.bombs.len() {
            if !self.bombs[index].is_active() {
                continue;
            }
            if first_contact(&self.bombs[index].bounds(), &self.submarines).is_some() {
                self.detonate_bomb(index, CONTACT_BLAST_RADIUS, DetonationCause::Contact);
            }
        }
        for index in 0..self.missiles.len() {
            if !self.missiles[index].is_active() {
                continue;
            }
            let bounds = self.missiles[index].bounds();
            if first_contact(&bounds, &self.submarines).is_some() {
                let missile = &mut self.missiles[index];
                missile.detonate();
                let source = missile.id();
                self.detonate(source, bounds.center(), MISSILE_BLAST_RADIUS, DetonationCause::MissileHit);
            }
        }

        // PHASE 5: PURGE
        self.purge();

        // PHASE 6: SPAWN
        self.spawn_timer_ms += dt;
        if self.spawn_timer_ms >= self.next_spawn_delay_ms {
            let side = if self.rng.gen_bool(0.5) { Side::Left } else { Side::Right };
            self.spawn_submarine(side);
            self.spawn_timer_ms = 0.0;
            self.next_spawn_delay_ms = self.rng.gen_range(SPAWN_DELAY_MS.0..SPAWN_DELAY_MS.1);
        }
    }

    /// Applies the held `intents` in order, then ticks.
    pub fn step(&mut self, elapsed_ms: u64, intents: Intents) {
        for command in intents.commands() {
            self.apply(command);
        }
        self.tick(elapsed_ms);
    }

    // -------------------------------------------------------------------------
    // Player commands
    // -------------------------------------------------------------------------

    /// Executes one player command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.player_move_left(),
            Command::MoveRight => self.player_move_right(),
            Command::DropBomb => {
                self.player_drop_bomb();
            }
            Command::LaunchMissile => {
                self.player_launch_missile();
            }
        }
    }

    /// Moves the ship one step left, clamped to the world.
    pub fn player_move_left(&mut self) {
        self.ship.move_by(-1);
    }

    /// Moves the ship one step right, clamped to the world.
    pub fn player_move_right(&mut self) {
        self.ship.move_by(1);
    }

    /// Drops a depth charge if the drop cooldown has elapsed.
    ///
    /// Returns the new bomb's id, or `None` if the cooldown refused it.
    pub fn player_drop_bomb(&mut self) -> Option<EntityId> {
        let id = EntityId::new(self.next_id);
        let bomb = self.ship.drop_bomb(id)?;
        self.next_id += 1;
        debug!(bomb_id = %id, x = bomb.body().position().x, "bomb dropped");
        self.bombs.push(bomb);
        self.events.push(SimEvent::BombDropped { id });
        Some(id)
    }

    /// Launches a homing missile if the launch cooldown has elapsed.
    ///
    /// Returns the new missile's id, or `None` if the cooldown refused it.
    pub fn player_launch_missile(&mut self) -> Option<EntityId> {
        let id = EntityId::new(self.next_id);
        let missile = self.ship.launch_missile(id, &self.world)?;
        self.next_id += 1;
        debug!(missile_id = %id, "missile launched");
        self.missiles.push(missile);
        self.events.push(SimEvent::MissileLaunched { id });
        Some(id)
    }

    // -------------------------------------------------------------------------
    // Spawning and kills
    // -------------------------------------------------------------------------

    /// Rolls a new submarine entering from `side` and returns its id.
    pub fn spawn_submarine(&mut self, side: Side) -> EntityId {
        let id = self.allocate_id();
        let sub = Submarine::spawn(id, side, &self.world, &mut self.rng);
        debug!(
            submarine_id = %id,
            kind = ?sub.submarine_kind(),
            side = ?side,
            hit_points = sub.hit_points(),
            "submarine spawned"
        );
        self.events.push(SimEvent::SubmarineSpawned {
            id,
            kind: sub.submarine_kind(),
            side,
            hit_points: sub.hit_points(),
        });
        self.submarines.push(sub);
        id
    }

    /// Adds a hand-built submarine, giving it a fresh id which is returned.
    #[doc(hidden)]
    pub fn insert_submarine(&mut self, mut sub: Submarine) -> EntityId {
        let id = self.allocate_id();
        sub.id = id;
        self.submarines.push(sub);
        id
    }

    /// Credits a kill reported by [`resolve_blast`]: adds its score and takes
    /// the submarine out of play.
    ///
    /// Ignored unless the submarine is still in play with no hit points left.
    /// Returns whether the kill was credited.
    pub(crate) fn register_kill(&mut self, kill: &Kill) -> bool {
        let Some(sub) = self
            .submarines
            .iter_mut()
            .find(|s| s.id() == kill.submarine && s.is_active() && s.is_sunk())
        else {
            return false;
        };
        sub.deactivate();
        self.score = self.score.saturating_add(kill.score);
        info!(
            submarine_id = %kill.submarine,
            gain = kill.score,
            score = self.score,
            "submarine destroyed"
        );
        self.events.push(SimEvent::SubmarineDestroyed {
            id: kill.submarine,
            score: kill.score,
        });
        true
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn detonate_bomb(&mut self, index: usize, radius: f64, cause: DetonationCause) {
        let bomb = &mut self.bombs[index];
        if !bomb.explode() {
            return;
        }
        let source = bomb.id();
        let center = bomb.bounds().center();
        self.detonate(source, center, radius, cause);
    }

    fn detonate(&mut self, source: EntityId, center: DVec2, radius: f64, cause: DetonationCause) {
        let id = self.allocate_id();
        debug!(source = %source, %cause, radius, x = center.x, y = center.y, "detonation");
        self.explosions.push(Explosion::new(id, center, radius));
        self.events.push(SimEvent::Detonation {
            source,
            cause,
            center,
            radius,
        });
        for kill in resolve_blast(center, radius, &mut self.submarines) {
            self.register_kill(&kill);
        }
    }

    fn purge(&mut self) {
        let before = (
            self.bombs.len(),
            self.submarines.len(),
            self.explosions.len(),
            self.missiles.len(),
        );

        for sub in self.submarines.iter().filter(|s| !s.is_active() && !s.is_sunk()) {
            debug!(submarine_id = %sub.id(), "submarine escaped");
            self.events.push(SimEvent::SubmarineEscaped { id: sub.id() });
        }
        for missile in self.missiles.iter().filter(|m| !m.is_active() && m.expired()) {
            debug!(missile_id = %missile.id(), age_ms = missile.age_ms(), "missile expired");
            self.events.push(SimEvent::MissileExpired { id: missile.id() });
        }

        self.bombs.retain(Entity::is_active);
        self.submarines.retain(Entity::is_active);
        self.explosions.retain(Entity::is_active);
        self.missiles.retain(Entity::is_active);

        trace!(
            bombs = before.0 - self.bombs.len(),
            submarines = before.1 - self.submarines.len(),
            explosions = before.2 - self.explosions.len(),
            missiles = before.3 - self.missiles.len(),
            "purged inactive entities"
        );
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The configuration the engine was built from.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derived world lines.
    #[must_use]
    pub const fn world(&self) -> &WorldGeometry {
        &self.world
    }

    /// World width.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.config.width
    }

    /// World height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.config.height
    }

    /// Top of the sea band.
    #[must_use]
    pub const fn sea_top(&self) -> f64 {
        self.world.sea_top
    }

    /// Depth at which bombs auto-detonate.
    #[must_use]
    pub const fn depth_threshold(&self) -> f64 {
        self.world.depth_threshold
    }

    /// Score so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Simulated time accumulated by running ticks.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Copy of the ship.
    #[must_use]
    pub fn ship(&self) -> Ship {
        self.ship.clone()
    }

    /// Copies of the live bombs.
    #[must_use]
    pub fn bombs(&self) -> Vec<Bomb> {
        self.bombs.clone()
    }

    /// Copies of the live submarines.
    #[must_use]
    pub fn submarines(&self) -> Vec<Submarine> {
        self.submarines.clone()
    }

    /// Copies of the visible explosions.
    #[must_use]
    pub fn explosions(&self) -> Vec<Explosion> {
        self.explosions.clone()
    }

    /// Copies of the missiles in flight.
    #[must_use]
    pub fn missiles(&self) -> Vec<Missile> {
        self.missiles.clone()
    }

    /// Owned view of everything a frame needs to draw.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            width: self.config.width,
            height: self.config.height,
            sea_top: self.world.sea_top,
            depth_threshold: self.world.depth_threshold,
            score: self.score,
            ship: ShipView::from(&self.ship),
            bombs: self.bombs.iter().map(Into::into).collect(),
            submarines: self.submarines.iter().map(Into::into).collect(),
            explosions: self.explosions.iter().map(Into::into).collect(),
            missiles: self.missiles.iter().map(Into::into).collect(),
        }
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        mem::take(&mut self.events)
    }

    /// One-line summary for a status bar or log.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Score={} ShipX={:.1} bombs={} subs={} exps={} missiles={}",
            self.score,
            self.ship.x(),
            self.bombs.len(),
            self.submarines.len(),
            self.explosions.len(),
            self.missiles.len()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
