//! Pure state transitions: start, click, tick
//!
//! The host (browser interval or test harness) drives the game entirely
//! through these three functions, so the whole state machine runs on
//! virtual time and stays deterministic.

use super::layout::{StartError, generate_circles};
use super::state::{ColorState, GamePhase, GameState, ScheduledRemoval};
use crate::consts::HIGHLIGHT_MS;

/// Start (or restart) a run with `points` circles.
///
/// Rejects a zero count without touching the state; usable from any phase.
pub fn start(state: &mut GameState, points: u32) -> Result<(), StartError> {
    if points == 0 {
        return Err(StartError::NoPoints);
    }

    // New RNG stream per run so a restart scatters a fresh board
    state.rng_state.stream = state.rng_state.stream.wrapping_add(1);
    let mut rng = state.rng_state.to_rng();

    state.points = points;
    state.next_expected = 1;
    state.elapsed_ms = 0;
    state.circles = generate_circles(points, &mut rng);
    state.removals.clear();
    state.phase = GamePhase::Running;

    log::info!("Game started: {} circles (stream {})", points, state.rng_state.stream);
    Ok(())
}

/// Handle a click on circle `id`.
///
/// Ignored outside `Running` and for ids that are gone or already consumed.
/// A correct click highlights the circle and schedules its removal; a wrong
/// click ends the run immediately, leaving the clicked circle untouched.
pub fn click(state: &mut GameState, id: u32) {
    if !state.phase.is_running() {
        return;
    }
    let Some(circle) = state.circles.iter_mut().find(|c| c.id == id) else {
        return;
    };
    if circle.color == ColorState::Highlighted {
        return;
    }

    if id == state.next_expected {
        circle.color = ColorState::Highlighted;
        state.removals.push(ScheduledRemoval {
            circle_id: id,
            due_ms: state.clock_ms + HIGHLIGHT_MS,
        });
        state.next_expected += 1;

        if state.next_expected > state.points {
            state.phase = GamePhase::Won;
            log::info!("All cleared in {} ms", state.elapsed_ms);
        }
    } else {
        state.phase = GamePhase::Lost;
        log::info!(
            "Game over: clicked {} while expecting {}",
            id,
            state.next_expected
        );
    }
}

/// Advance virtual time by `dt_ms`.
///
/// The monotonic clock always moves so that pending removals keep draining
/// after the run ends (they are cosmetic by then); the user-visible timer
/// only advances while the game is running.
pub fn tick(state: &mut GameState, dt_ms: u64) {
    state.clock_ms += dt_ms;
    if state.phase.is_running() {
        state.elapsed_ms += dt_ms;
    }

    let clock = state.clock_ms;
    let mut removed = Vec::new();
    state.removals.retain(|r| {
        if r.due_ms <= clock {
            removed.push(r.circle_id);
            false
        } else {
            true
        }
    });
    if !removed.is_empty() {
        state.circles.retain(|c| !removed.contains(&c.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_MS;

    /// Drive the clock forward in host-sized steps
    fn advance(state: &mut GameState, ms: u64) {
        for _ in 0..ms / TICK_MS {
            tick(state, TICK_MS);
        }
    }

    #[test]
    fn test_start_enters_running() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Idle);

        start(&mut state, 5).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.circles.len(), 5);
        assert_eq!(state.next_expected, 1);
        assert_eq!(state.status_line(), "Let's Play");
    }

    #[test]
    fn test_start_rejects_zero_points() {
        let mut state = GameState::new(12345);
        assert_eq!(start(&mut state, 0), Err(StartError::NoPoints));
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.circles.is_empty());
    }

    #[test]
    fn test_ordered_clicks_win() {
        let mut state = GameState::new(99);
        start(&mut state, 3).unwrap();

        click(&mut state, 1);
        click(&mut state, 2);
        assert_eq!(state.phase, GamePhase::Running);

        click(&mut state, 3);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.status_line(), "All Cleared");
    }

    #[test]
    fn test_out_of_order_click_loses() {
        let mut state = GameState::new(99);
        start(&mut state, 4).unwrap();

        click(&mut state, 1);
        click(&mut state, 3);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.status_line(), "Game Over");

        // The offending circle is not marked or removed
        assert_eq!(state.circle(3).unwrap().color, ColorState::Neutral);

        // Further clicks are no-ops
        click(&mut state, 2);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.next_expected, 2);
    }

    #[test]
    fn test_consumed_circle_ignores_repeat_clicks() {
        let mut state = GameState::new(99);
        start(&mut state, 2).unwrap();

        click(&mut state, 1);
        assert_eq!(state.circle(1).unwrap().color, ColorState::Highlighted);

        // Clicking the highlighted circle again must not end the game
        click(&mut state, 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.next_expected, 2);
    }

    #[test]
    fn test_highlight_then_remove_after_delay() {
        let mut state = GameState::new(7);
        start(&mut state, 3).unwrap();

        click(&mut state, 1);
        assert!(state.circle(1).is_some());

        advance(&mut state, 290);
        assert!(state.circle(1).is_some(), "removal fired early");

        advance(&mut state, 20);
        assert!(state.circle(1).is_none(), "removal never fired");
        assert!(state.removals.is_empty());
    }

    #[test]
    fn test_removal_drains_after_win() {
        let mut state = GameState::new(7);
        start(&mut state, 1).unwrap();

        click(&mut state, 1);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.circles.len(), 1);

        // The cosmetic removal still fires on the frozen-timer clock
        advance(&mut state, 310);
        assert!(state.circles.is_empty());
    }

    #[test]
    fn test_elapsed_freezes_on_terminal_phase() {
        let mut state = GameState::new(5);
        start(&mut state, 2).unwrap();

        advance(&mut state, 500);
        assert_eq!(state.elapsed_ms, 500);

        click(&mut state, 2); // wrong order
        assert_eq!(state.phase, GamePhase::Lost);

        let frozen = state.elapsed_ms;
        advance(&mut state, 1000);
        assert_eq!(state.elapsed_ms, frozen);
        assert!(state.clock_ms > frozen);
    }

    #[test]
    fn test_restart_regenerates_board() {
        let mut state = GameState::new(5);
        start(&mut state, 3).unwrap();
        click(&mut state, 1);
        click(&mut state, 3);
        assert_eq!(state.phase, GamePhase::Lost);

        let old_positions: Vec<_> = state.circles.iter().map(|c| c.pos).collect();

        start(&mut state, 3).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.circles.len(), 3);
        assert_eq!(state.next_expected, 1);
        assert_eq!(state.elapsed_ms, 0);
        assert!(state.removals.is_empty());

        // Fresh RNG stream means a fresh scatter
        let new_positions: Vec<_> = state.circles.iter().map(|c| c.pos).collect();
        assert_ne!(old_positions, new_positions);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input script stay identical
        let mut state1 = GameState::new(424242);
        let mut state2 = GameState::new(424242);

        for state in [&mut state1, &mut state2] {
            start(state, 6).unwrap();
            advance(state, 120);
            click(state, 1);
            advance(state, 350);
            click(state, 2);
        }

        assert_eq!(state1.elapsed_ms, state2.elapsed_ms);
        assert_eq!(state1.next_expected, state2.next_expected);
        assert_eq!(state1.circles.len(), state2.circles.len());
        for (a, b) in state1.circles.iter().zip(&state2.circles) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
        }
    }
}
