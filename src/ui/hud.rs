//! Status line, timer readout and board element updates
//!
//! The pure formatting helpers live at the top so they test on any target;
//! everything touching the DOM is wasm-only.

use crate::sim::{ColorState, GamePhase};

#[cfg(target_arch = "wasm32")]
use crate::sim::GameState;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Format the elapsed timer as `seconds.tenths` (raw value is milliseconds)
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let seconds = elapsed_ms / 1000;
    let tenths = (elapsed_ms % 1000) / 100;
    format!("{}.{}", seconds, tenths)
}

/// CSS color for the status line
pub fn status_color(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Lost => "red",
        GamePhase::Won => "green",
        GamePhase::Idle | GamePhase::Running => "black",
    }
}

/// CSS background color for a circle
pub fn circle_fill(color: ColorState) -> &'static str {
    match color {
        ColorState::Neutral => "white",
        ColorState::Highlighted => "red",
    }
}

/// Label for the Play/Restart control
pub fn play_label(phase: GamePhase) -> &'static str {
    if phase.is_running() { "Restart" } else { "Play" }
}

/// Refresh status line, timer readout and button label from game state
#[cfg(target_arch = "wasm32")]
pub fn update_hud(document: &web_sys::Document, state: &GameState) {
    if let Some(el) = document.get_element_by_id("status") {
        el.set_text_content(Some(state.status_line()));
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("color", status_color(state.phase));
        }
    }

    if let Some(el) = document.get_element_by_id("time") {
        el.set_text_content(Some(&format!("{}s", format_elapsed(state.elapsed_ms))));
    }

    if let Some(el) = document.get_element_by_id("play-btn") {
        el.set_text_content(Some(play_label(state.phase)));
    }
}

/// Sync existing circle elements with the active set: recolor highlighted
/// circles and drop elements for circles the sim has removed.
#[cfg(target_arch = "wasm32")]
pub fn sync_circles(document: &web_sys::Document, state: &GameState) {
    let Some(board) = document.get_element_by_id("board") else {
        return;
    };

    let children = board.children();
    // Walk backwards so removals don't shift the live collection under us
    for i in (0..children.length()).rev() {
        let Some(el) = children.item(i) else { continue };
        let Some(id) = el
            .get_attribute("data-id")
            .and_then(|v| v.parse::<u32>().ok())
        else {
            continue;
        };

        match state.circle(id) {
            Some(circle) => {
                if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = el
                        .style()
                        .set_property("background-color", circle_fill(circle.color));
                }
            }
            None => el.remove(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0.0");
        assert_eq!(format_elapsed(1234), "1.2");
        assert_eq!(format_elapsed(999), "0.9");
        assert_eq!(format_elapsed(10_050), "10.0");
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(status_color(GamePhase::Idle), "black");
        assert_eq!(status_color(GamePhase::Lost), "red");
        assert_eq!(status_color(GamePhase::Won), "green");
        assert_eq!(play_label(GamePhase::Running), "Restart");
        assert_eq!(play_label(GamePhase::Won), "Play");
    }

    #[test]
    fn test_circle_fill() {
        assert_eq!(circle_fill(ColorState::Neutral), "white");
        assert_eq!(circle_fill(ColorState::Highlighted), "red");
    }
}
