//! Gameplay tuning constants.
//!
//! Time values are in milliseconds (the unit `Engine::tick` is fed with),
//! distances in world pixels. Per-step speeds are expressed against the
//! reference frame time [`FRAME_MS`].

/// Reference frame time. Velocities are tuned per 16 ms step.
pub const FRAME_MS: f64 = 16.0;

/// Sea band starts at this fraction of the world height.
pub const SEA_TOP_RATIO: f64 = 0.38;

/// Bombs detonate this far down the sea band.
pub const DEPTH_THRESHOLD_RATIO: f64 = 0.45;

// -----------------------------------------------------------------------------
// Ship
// -----------------------------------------------------------------------------

/// Ship hull width.
pub const SHIP_WIDTH: f64 = 100.0;
/// Ship hull height.
pub const SHIP_HEIGHT: f64 = 48.0;
/// Ship rides this far above the sea line.
pub const SHIP_DRAFT: i32 = 30;
/// Pixels moved per move command.
pub const SHIP_STEP: f64 = 4.8;
/// Minimum time between depth-charge drops.
pub const BOMB_DROP_INTERVAL_MS: f64 = 400.0;
/// Minimum time between missile launches.
pub const MISSILE_LAUNCH_INTERVAL_MS: f64 = 5000.0;

// -----------------------------------------------------------------------------
// Bomb
// -----------------------------------------------------------------------------

/// Depth-charge width.
pub const BOMB_WIDTH: f64 = 24.0;
/// Depth-charge height.
pub const BOMB_HEIGHT: f64 = 36.0;
/// Initial sink speed, px per step.
pub const BOMB_INITIAL_VY: f64 = 2.2;
/// Sink acceleration, px per step per step.
pub const BOMB_GRAVITY: f64 = 0.06;
/// Blast radius when a bomb reaches the depth threshold.
pub const DEPTH_BLAST_RADIUS: f64 = 70.0;
/// Blast radius when a bomb strikes a submarine.
pub const CONTACT_BLAST_RADIUS: f64 = 60.0;

// -----------------------------------------------------------------------------
// Submarine
// -----------------------------------------------------------------------------

/// Submarine hull width.
pub const SUBMARINE_WIDTH: f64 = 80.0;
/// Submarine hull height.
pub const SUBMARINE_HEIGHT: f64 = 40.0;
/// Probability that a spawned submarine is red.
pub const RED_PROBABILITY: f64 = 0.4;
/// Probability that a spawned submarine carries two hit points.
pub const ARMORED_PROBABILITY: f64 = 0.15;
/// Score for sinking a red submarine.
pub const RED_SCORE: u32 = 20;
/// Score for sinking a black submarine.
pub const BLACK_SCORE: u32 = 10;
/// Black submarine speed range, px per step.
pub const BLACK_SPEED_RANGE: (f64, f64) = (1.2, 2.0);
/// Red submarine speed range, px per step.
pub const RED_SPEED_RANGE: (f64, f64) = (2.0, 2.8);
/// Bob phase advance per step, radians.
pub const BOB_PHASE_STEP: f64 = 0.03;
/// Vertical bob amplitude per step.
pub const BOB_AMPLITUDE: f64 = 0.5;
/// Spawn depth offset below the sea line.
pub const SUBMARINE_SPAWN_TOP_OFFSET: f64 = 20.0;
/// Spawn band is the sea height minus this margin.
pub const SUBMARINE_SPAWN_BAND_MARGIN: f64 = 80.0;
/// Submarines leaving the world by more than this are despawned.
pub const SUBMARINE_DESPAWN_MARGIN: f64 = 200.0;
/// Number of distinct hull sprites per submarine kind.
pub const SUBMARINE_VARIANTS: u8 = 2;

// -----------------------------------------------------------------------------
// Missile
// -----------------------------------------------------------------------------

/// Missile body width.
pub const MISSILE_WIDTH: f64 = 24.0;
/// Missile body height.
pub const MISSILE_HEIGHT: f64 = 10.0;
/// Missile cruise speed, px per step.
pub const MISSILE_SPEED: f64 = 5.0;
/// Vertical velocity a fresh missile launches with.
pub const MISSILE_LAUNCH_VY: f64 = -3.0;
/// Flight time budget.
pub const MISSILE_LIFETIME_MS: f64 = 8000.0;
/// Targets closer than this keep the previous heading.
pub const MISSILE_MIN_STEER_DISTANCE: f64 = 0.1;
/// Vertical out-of-bounds margin.
pub const MISSILE_BOUNDS_MARGIN_Y: f64 = 100.0;
/// Horizontal out-of-bounds margin.
pub const MISSILE_BOUNDS_MARGIN_X: f64 = 2000.0;
/// Blast radius of a missile strike.
pub const MISSILE_BLAST_RADIUS: f64 = 50.0;

// -----------------------------------------------------------------------------
// Explosion & spawning
// -----------------------------------------------------------------------------

/// Visible lifetime of an explosion.
pub const EXPLOSION_LIFETIME_MS: f64 = 500.0;
/// Damage dealt by one blast.
pub const BLAST_DAMAGE: u32 = 1;
/// Delay range before the first submarine.
pub const FIRST_SPAWN_DELAY_MS: (f64, f64) = (1000.0, 2500.0);
/// Delay range between later submarines.
pub const SPAWN_DELAY_MS: (f64, f64) = (800.0, 2800.0);
