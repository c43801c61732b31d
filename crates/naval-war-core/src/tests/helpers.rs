//! Builders and utilities shared by the engine test suites.

use glam::DVec2;

use crate::entity::{Entity, EntityId, Side, Submarine, SubmarineKind};
use crate::event::SimEvent;
use crate::input::Intents;
use crate::{Engine, EngineConfig};

/// Frame length used by every scenario.
pub const FRAME: u64 = 16;

// =============================================================================
// Engine Setup
// =============================================================================

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Builds an 800x600 engine from `seed` and starts it.
pub fn started_engine(seed: u64) -> Engine {
    init_tracing();
    let mut engine = Engine::seeded(EngineConfig::default(), seed).unwrap();
    engine.start();
    engine
}

/// Runs `frames` frames of [`FRAME`] with the same held `intents`.
pub fn run(engine: &mut Engine, frames: usize, intents: Intents) {
    for _ in 0..frames {
        engine.step(FRAME, intents);
    }
}

// =============================================================================
// Submarine Placement
// =============================================================================

/// Inserts a submarine with zero horizontal speed and its top-left corner
/// at `position`. It still bobs.
pub fn place_submarine(
    engine: &mut Engine,
    kind: SubmarineKind,
    position: DVec2,
    hit_points: u32,
) -> EntityId {
    let sub = Submarine::new(EntityId::new(0), kind, Side::Left, engine.world())
        .with_position(position)
        .with_speed(0.0)
        .with_hit_points(hit_points);
    engine.insert_submarine(sub)
}

/// Looks up a live submarine by id.
pub fn find_submarine(engine: &Engine, id: EntityId) -> Option<Submarine> {
    engine.submarines().into_iter().find(|s| s.id() == id)
}

// =============================================================================
// Event Queries
// =============================================================================

/// Number of events matching `predicate`.
pub fn count_events(events: &[SimEvent], predicate: impl Fn(&SimEvent) -> bool) -> usize {
    events.iter().filter(|e| predicate(e)).count()
}

/// Total score reported by `SubmarineDestroyed` events.
pub fn destroyed_score(events: &[SimEvent]) -> u32 {
    events
        .iter()
        .map(|e| match e {
            SimEvent::SubmarineDestroyed { score, .. } => *score,
            _ => 0,
        })
        .sum()
}
