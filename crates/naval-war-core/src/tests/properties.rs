//! Property tests over random seeds and input sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::entity::SubmarineKind;
use crate::event::SimEvent;
use crate::input::Intents;

use super::helpers::{started_engine, FRAME};

fn intents_strategy() -> impl Strategy<Value = Intents> {
    (0_u8..16).prop_map(Intents::from_bits_truncate)
}

fn game_strategy() -> impl Strategy<Value = (u64, Vec<Intents>)> {
    (any::<u64>(), prop::collection::vec(intents_strategy(), 50..400))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ship_stays_inside_the_world(seed in any::<u64>(), moves in prop::collection::vec(any::<bool>(), 0..500)) {
        let mut engine = started_engine(seed);
        for right in moves {
            if right {
                engine.player_move_right();
            } else {
                engine.player_move_left();
            }
            let x = engine.ship().x();
            prop_assert!((0.0..=700.0).contains(&x), "ship x {x}");
        }
    }

    #[test]
    fn purged_entities_never_come_back((seed, inputs) in game_strategy()) {
        let mut engine = started_engine(seed);
        let mut live: HashSet<u64> = HashSet::new();
        let mut gone: HashSet<u64> = HashSet::new();

        for intents in inputs {
            engine.step(FRAME, intents);
            let snapshot = engine.snapshot();
            let now: HashSet<u64> = snapshot.bombs.iter().map(|b| b.id.as_u64())
                .chain(snapshot.submarines.iter().map(|s| s.id.as_u64()))
                .chain(snapshot.explosions.iter().map(|e| e.id.as_u64()))
                .chain(snapshot.missiles.iter().map(|m| m.id.as_u64()))
                .collect();
            for id in &now {
                prop_assert!(!gone.contains(id), "entity {id} reappeared");
            }
            gone.extend(live.difference(&now).copied());
            live = now;
        }
    }

    #[test]
    fn missile_headings_are_finite((seed, inputs) in game_strategy()) {
        let mut engine = started_engine(seed);
        for intents in inputs {
            engine.step(FRAME, intents | Intents::LAUNCH_MISSILE);
            for missile in engine.snapshot().missiles {
                prop_assert!(missile.heading.is_finite());
            }
        }
    }

    #[test]
    fn every_bomb_detonates_at_most_once((seed, inputs) in game_strategy()) {
        let mut engine = started_engine(seed);
        let mut sources = HashSet::new();
        for intents in inputs {
            engine.step(FRAME, intents);
            for event in engine.drain_events() {
                if let SimEvent::Detonation { source, .. } = event {
                    prop_assert!(sources.insert(source), "{source} detonated twice");
                }
            }
        }
    }

    #[test]
    fn score_matches_kills_by_kind((seed, inputs) in game_strategy()) {
        let mut engine = started_engine(seed);
        let mut kinds = std::collections::HashMap::new();
        let mut expected = 0;
        for intents in inputs {
            engine.step(FRAME, intents);
            for event in engine.drain_events() {
                match event {
                    SimEvent::SubmarineSpawned { id, kind, .. } => {
                        kinds.insert(id, kind);
                    }
                    SimEvent::SubmarineDestroyed { id, score } => {
                        let want = match kinds.get(&id) {
                            Some(SubmarineKind::Red) => 20,
                            Some(SubmarineKind::Black) => 10,
                            None => score,
                        };
                        prop_assert_eq!(score, want);
                        expected += score;
                    }
                    _ => {}
                }
            }
        }
        prop_assert_eq!(engine.score(), expected);
    }
}
