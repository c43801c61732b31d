//! Events reported by the engine while it ticks.
//!
//! The engine appends to an internal log and the host drains it with
//! [`crate::Engine::drain_events`], typically once per frame, to trigger
//! sounds, effects or telemetry. Events never feed back into the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::{EntityId, Side, SubmarineKind};

/// What set off an explosion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetonationCause {
    /// A bomb sank past the depth threshold.
    Depth,
    /// A bomb touched a submarine.
    Contact,
    /// A missile struck a submarine.
    MissileHit,
}

impl fmt::Display for DetonationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth => write!(f, "depth"),
            Self::Contact => write!(f, "contact"),
            Self::MissileHit => write!(f, "missile-hit"),
        }
    }
}

/// A notable state change inside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A submarine entered from a screen edge.
    SubmarineSpawned {
        /// New submarine.
        id: EntityId,
        /// Its class.
        kind: SubmarineKind,
        /// Edge it entered from.
        side: Side,
        /// Starting hit points.
        hit_points: u32,
    },
    /// The ship released a depth charge.
    BombDropped {
        /// New bomb.
        id: EntityId,
    },
    /// The ship fired a homing missile.
    MissileLaunched {
        /// New missile.
        id: EntityId,
    },
    /// A bomb or missile exploded.
    Detonation {
        /// Bomb or missile that went off.
        source: EntityId,
        /// Trigger.
        cause: DetonationCause,
        /// Blast center.
        center: DVec2,
        /// Blast radius.
        radius: f64,
    },
    /// A submarine lost its last hit point.
    SubmarineDestroyed {
        /// Sunk submarine.
        id: EntityId,
        /// Score granted.
        score: u32,
    },
    /// A submarine left the play area without being sunk.
    SubmarineEscaped {
        /// Escaped submarine.
        id: EntityId,
    },
    /// A missile ran out of fuel or flew out of bounds.
    MissileExpired {
        /// Spent missile.
        id: EntityId,
    },
}

impl SimEvent {
    /// Identifier of the entity the event is about.
    #[must_use]
    pub const fn subject(&self) -> EntityId {
        match self {
            Self::SubmarineSpawned { id, .. }
            | Self::BombDropped { id }
            | Self::MissileLaunched { id }
            | Self::SubmarineDestroyed { id, .. }
            | Self::SubmarineEscaped { id }
            | Self::MissileExpired { id } => *id,
            Self::Detonation { source, .. } => *source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_names_the_entity() {
        let event = SimEvent::Detonation {
            source: EntityId::new(4),
            cause: DetonationCause::Depth,
            center: DVec2::new(400.0, 380.0),
            radius: 70.0,
        };
        assert_eq!(event.subject(), EntityId::new(4));
        assert_eq!(
            SimEvent::SubmarineEscaped { id: EntityId::new(9) }.subject(),
            EntityId::new(9)
        );
    }

    #[test]
    fn cause_display() {
        assert_eq!(DetonationCause::Depth.to_string(), "depth");
        assert_eq!(DetonationCause::Contact.to_string(), "contact");
        assert_eq!(DetonationCause::MissileHit.to_string(), "missile-hit");
    }

    #[test]
    fn serializes_to_json() {
        let event = SimEvent::SubmarineDestroyed {
            id: EntityId::new(3),
            score: 20,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
