//! Game state and core types
//!
//! Everything needed to snapshot or replay a run lives here.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet
    Idle,
    /// Accepting clicks, timer active
    Running,
    /// Every circle cleared in order
    Won,
    /// An out-of-order click ended the run
    Lost,
}

impl GamePhase {
    /// True while clicks are accepted and the timer advances
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    /// True once the run has ended (either outcome)
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Visual state of a circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorState {
    /// Not yet clicked
    Neutral,
    /// Correctly clicked, flashing before removal
    Highlighted,
}

/// A clickable numbered target on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    /// 1-based sequence number, unique per run
    pub id: u32,
    /// Top-left offset within board bounds
    pub pos: Vec2,
    pub color: ColorState,
}

/// A pending highlight-then-remove event for a correctly clicked circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledRemoval {
    pub circle_id: u32,
    /// Virtual clock time at which the circle leaves the board
    pub due_ms: u64,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Bumped on every game start so restarts get fresh layouts
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Target circle count N for the current/last run
    pub points: u32,
    /// The id the next correct click must carry
    pub next_expected: u32,
    /// User-visible timer; advances only while `Running`
    pub elapsed_ms: u64,
    /// Monotonic virtual clock; never pauses, drives the removal queue
    pub clock_ms: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Active circles (sorted by id for determinism)
    pub circles: Vec<Circle>,
    /// Pending highlight-then-remove events
    pub removals: Vec<ScheduledRemoval>,
}

impl GameState {
    /// Create a fresh idle state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            points: 0,
            next_expected: 1,
            elapsed_ms: 0,
            clock_ms: 0,
            phase: GamePhase::Idle,
            circles: Vec::new(),
            removals: Vec::new(),
        }
    }

    /// Look up an active circle by id
    pub fn circle(&self, id: u32) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    /// Status line for the HUD
    pub fn status_line(&self) -> &'static str {
        match self.phase {
            GamePhase::Idle | GamePhase::Running => "Let's Play",
            GamePhase::Lost => "Game Over",
            GamePhase::Won => "All Cleared",
        }
    }
}
