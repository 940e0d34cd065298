//! Random board layout generation
//!
//! Circles are scattered independently and uniformly within board bounds.
//! Overlap is allowed; there is no collision avoidance.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use super::state::{Circle, ColorState};
use crate::consts::BOARD_SIZE;

/// Rejected game-start conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The player has not entered a positive circle count
    #[error("no point count entered")]
    NoPoints,
}

/// Generate `count` circles with ids 1..=count at uniformly random positions.
///
/// Callers must reject `count == 0` before getting here; see [`crate::sim::start`].
pub fn generate_circles<R: Rng>(count: u32, rng: &mut R) -> Vec<Circle> {
    (1..=count)
        .map(|id| Circle {
            id,
            pos: Vec2::new(
                rng.random_range(0.0..BOARD_SIZE),
                rng.random_range(0.0..BOARD_SIZE),
            ),
            color: ColorState::Neutral,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RngState;
    use proptest::prelude::*;

    #[test]
    fn test_generate_ids_dense_and_unique() {
        let mut rng = RngState::new(42).to_rng();
        let circles = generate_circles(10, &mut rng);
        assert_eq!(circles.len(), 10);
        for (i, c) in circles.iter().enumerate() {
            assert_eq!(c.id, i as u32 + 1);
            assert_eq!(c.color, ColorState::Neutral);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = RngState::new(7).to_rng();
        let mut b = RngState::new(7).to_rng();
        let la = generate_circles(5, &mut a);
        let lb = generate_circles(5, &mut b);
        for (ca, cb) in la.iter().zip(&lb) {
            assert_eq!(ca.pos, cb.pos);
        }
    }

    proptest! {
        #[test]
        fn prop_layout_within_bounds(count in 1u32..200, seed in any::<u64>()) {
            let mut rng = RngState::new(seed).to_rng();
            let circles = generate_circles(count, &mut rng);
            prop_assert_eq!(circles.len(), count as usize);
            for c in &circles {
                prop_assert!(c.pos.x >= 0.0 && c.pos.x < BOARD_SIZE);
                prop_assert!(c.pos.y >= 0.0 && c.pos.y < BOARD_SIZE);
            }
        }
    }
}
