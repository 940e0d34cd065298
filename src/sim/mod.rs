//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual-time tick only (callers supply elapsed milliseconds)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod layout;
pub mod state;
pub mod tick;

pub use layout::{StartError, generate_circles};
pub use state::{Circle, ColorState, GamePhase, GameState, RngState, ScheduledRemoval};
pub use tick::{click, start, tick};
