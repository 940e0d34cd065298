//! Bida Rush - click the numbered circles in ascending order
//!
//! Core modules:
//! - `sim`: Deterministic game core (layout, state machine, virtual-time tick)
//! - `ui`: HUD formatting and DOM glue for the browser build
//! - `settings`: Persisted user preferences (LocalStorage on web)

pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions in CSS pixels (circles scatter in 0..BOARD_SIZE on
    /// each axis)
    pub const BOARD_SIZE: f32 = 300.0;

    /// Rendered circle diameter in CSS pixels
    pub const CIRCLE_DIAMETER: f32 = 40.0;

    /// Timer tick period in milliseconds
    pub const TICK_MS: u64 = 10;

    /// How long a correctly clicked circle stays highlighted before removal
    pub const HIGHLIGHT_MS: u64 = 300;
}
