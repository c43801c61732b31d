//! Area damage from explosions.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::BLAST_DAMAGE;
use crate::entity::{Entity, EntityId, Submarine};

/// A submarine sunk by a blast, with the score it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kill {
    /// The sunk submarine.
    pub submarine: EntityId,
    /// Score granted for it.
    pub score: u32,
}

/// Applies one blast to every live submarine in range.
///
/// A submarine is in range when the distance from `center` to its box
/// center is at most `radius + max(w, h) / 2`. Each one in range loses
/// [`BLAST_DAMAGE`] hit points. Submarines brought to zero are returned as
/// kills in collection order; deactivating them and adding the score is
/// left to the caller.
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use naval_war_core::config::WorldGeometry;
/// use naval_war_core::entity::{EntityId, Side, Submarine, SubmarineKind};
/// use naval_war_core::resolver::resolve_blast;
///
/// let world = WorldGeometry::new(800.0, 600.0);
/// let mut subs = vec![
///     Submarine::new(EntityId::new(1), SubmarineKind::Red, Side::Left, &world)
///         .with_position(DVec2::new(300.0, 300.0)),
/// ];
/// let kills = resolve_blast(DVec2::new(340.0, 320.0), 70.0, &mut subs);
/// assert_eq!(kills.len(), 1);
/// assert_eq!(kills[0].score, 20);
/// ```
pub fn resolve_blast(center: DVec2, radius: f64, submarines: &mut [Submarine]) -> Vec<Kill> {
    let mut kills = Vec::new();
    for sub in submarines.iter_mut() {
        if !sub.is_active() || sub.is_sunk() {
            continue;
        }
        let bounds = sub.bounds();
        let reach = radius + f64::from(bounds.max_extent()) / 2.0;
        if center.distance(bounds.center()) > reach {
            continue;
        }
        if sub.apply_damage(BLAST_DAMAGE) {
            kills.push(Kill {
                submarine: sub.id(),
                score: sub.score_value(),
            });
        }
    }
    kills
}
