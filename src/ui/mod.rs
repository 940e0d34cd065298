//! HUD formatting and browser DOM glue

pub mod hud;

pub use hud::format_elapsed;
