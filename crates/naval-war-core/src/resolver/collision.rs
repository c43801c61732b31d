//! Overlap and depth checks.

use crate::entity::{Bomb, Entity, Submarine};
use crate::geometry::Rect;

/// Indices of live bombs whose box bottom has reached `depth_threshold`.
#[must_use]
pub fn depth_triggered(bombs: &[Bomb], depth_threshold: f64) -> Vec<usize> {
    bombs
        .iter()
        .enumerate()
        .filter(|(_, bomb)| bomb.is_active() && f64::from(bomb.bounds().bottom()) >= depth_threshold)
        .map(|(index, _)| index)
        .collect()
}

/// Index of the first live submarine whose box overlaps `bounds`.
#[must_use]
pub fn first_contact(bounds: &Rect, submarines: &[Submarine]) -> Option<usize> {
    submarines
        .iter()
        .position(|sub| sub.is_active() && sub.bounds().overlaps(bounds))
}
