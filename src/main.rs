//! Bida Rush entry point
//!
//! Handles platform-specific initialization and wires the DOM to the
//! pure game core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

    use bida_rush::Settings;
    use bida_rush::consts::*;
    use bida_rush::sim::{self, GameState};
    use bida_rush::ui::hud;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        /// Driver interval handle (None while no tick loop is scheduled)
        interval: Option<i32>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                settings: Settings::load(),
                interval: None,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bida Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Prefill the points field from the last session
        let last_points = game.borrow().settings.last_points;
        if last_points > 0 {
            if let Some(input) = points_input(&document) {
                input.set_value(&last_points.to_string());
            }
        }

        hud::update_hud(&document, &game.borrow().state);
        setup_play_button(&document, game);

        log::info!("Bida Rush running!");
    }

    fn points_input(document: &Document) -> Option<HtmlInputElement> {
        document
            .get_element_by_id("points")?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    /// Coerce the raw input value: non-numeric or non-positive becomes 0,
    /// which blocks start.
    fn coerce_points(raw: &str) -> u32 {
        raw.trim().parse::<u32>().unwrap_or(0)
    }

    fn setup_play_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("play-btn") else {
            log::error!("Missing #play-btn element");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let points = points_input(&document)
                .map(|input| coerce_points(&input.value()))
                .unwrap_or(0);

            if points == 0 {
                let _ = window.alert_with_message("Please enter points");
                return;
            }

            {
                let mut g = game.borrow_mut();
                if let Err(err) = sim::start(&mut g.state, points) {
                    let _ = window.alert_with_message(&err.to_string());
                    return;
                }
                g.settings.last_points = points;
                g.settings.save();
            }

            render_board(&document, &game);
            hud::update_hud(&document, &game.borrow().state);
            ensure_interval(&game);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Rebuild the board DOM from scratch for a new run
    fn render_board(document: &Document, game: &Rc<RefCell<Game>>) {
        let Some(board) = document.get_element_by_id("board") else {
            log::error!("Missing #board element");
            return;
        };
        board.set_inner_html("");

        let circles: Vec<_> = game.borrow().state.circles.clone();
        for circle in circles {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            let _ = el.set_attribute("class", "circle");
            let _ = el.set_attribute("data-id", &circle.id.to_string());
            el.set_text_content(Some(&circle.id.to_string()));

            let Ok(el) = el.dyn_into::<HtmlElement>() else {
                continue;
            };
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", circle.pos.x));
            let _ = style.set_property("top", &format!("{}px", circle.pos.y));
            let _ = style.set_property("width", &format!("{}px", CIRCLE_DIAMETER));
            let _ = style.set_property("height", &format!("{}px", CIRCLE_DIAMETER));
            let _ = style.set_property("background-color", hud::circle_fill(circle.color));

            let id = circle.id;
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                sim::click(&mut g.state, id);

                let document = web_sys::window().unwrap().document().unwrap();
                hud::sync_circles(&document, &g.state);
                hud::update_hud(&document, &g.state);
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = board.append_child(&el);
        }
    }

    /// Start the 10 ms driver interval if it is not already running
    fn ensure_interval(game: &Rc<RefCell<Game>>) {
        if game.borrow().interval.is_some() {
            return;
        }

        let window = web_sys::window().unwrap();
        let g2 = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = g2.borrow_mut();
            sim::tick(&mut g.state, TICK_MS);

            let document = web_sys::window().unwrap().document().unwrap();
            hud::update_hud(&document, &g.state);
            hud::sync_circles(&document, &g.state);

            // Once the run is over and the removal queue has drained there
            // is no more scheduled work to do
            if g.state.phase.is_terminal() && g.state.removals.is_empty() {
                if let Some(handle) = g.interval.take() {
                    web_sys::window().unwrap().clear_interval_with_handle(handle);
                    log::info!("Timer stopped at {}", hud::format_elapsed(g.state.elapsed_ms));
                }
            }
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_MS as i32,
        ) {
            Ok(handle) => game.borrow_mut().interval = Some(handle),
            Err(err) => log::error!("Failed to schedule timer: {:?}", err),
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bida Rush (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Scripted smoke run
    println!("\nRunning smoke game...");
    smoke_game();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_game() {
    use bida_rush::consts::TICK_MS;
    use bida_rush::sim::{self, GamePhase, GameState};
    use bida_rush::ui::format_elapsed;

    let mut state = GameState::new(0xB1DA);
    sim::start(&mut state, 5).expect("start with 5 circles");

    for id in 1..=5 {
        for _ in 0..25 {
            sim::tick(&mut state, TICK_MS);
        }
        sim::click(&mut state, id);
    }
    assert_eq!(state.phase, GamePhase::Won, "ordered clicks should win");

    // Drain the pending cosmetic removals
    for _ in 0..40 {
        sim::tick(&mut state, TICK_MS);
    }
    assert!(state.circles.is_empty(), "board should be cleared");

    println!(
        "✓ Smoke game passed: {} in {}s",
        state.status_line(),
        format_elapsed(state.elapsed_ms)
    );
}
