//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::renderer::{CanvasSurface, draw_frame};
    use brick_breaker::sim::{FrameOutcome, GameState, advance_frame};
    use brick_breaker::{KeyState, Settings, autopilot};

    const CANVAS_ID: &str = "gameCanvas";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        surface: CanvasSurface,
        /// Autopilot drives the paddle
        idle_mode: bool,
    }

    impl Game {
        /// Run one frame: simulate and draw
        fn frame(&mut self) -> FrameOutcome {
            let steer = if self.idle_mode {
                autopilot::steer(&self.state)
            } else {
                self.keys.steer()
            };

            let outcome = advance_frame(&mut self.state, steer);
            for event in &self.state.events {
                log::debug!("frame {}: {:?}", self.state.frame, event);
            }

            draw_frame(&self.state, &mut self.surface);
            outcome
        }

        /// Start a fresh game after a win or loss
        fn restart(&mut self) {
            log::info!("Game ended: {:?} (score {})", self.state.outcome, self.state.score);
            self.state.reset();
            self.keys = KeyState::default();
            log::info!("New game started");
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let settings = Settings::load();

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(CANVAS_ID);
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);
        document
            .body()
            .ok_or("no body")?
            .append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(&settings),
            keys: KeyState::default(),
            surface: CanvasSurface::new(ctx),
            idle_mode: false,
        }));

        setup_input_handlers(&document, game.clone())?;
        setup_help_overlay(&document)?;

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.keys.key_down(&key) {
                    event.prevent_default();
                } else if key == "i" || key == "I" {
                    g.idle_mode = !g.idle_mode;
                    log::info!("Idle mode: {}", g.idle_mode);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Wire the rules panel buttons. The panel lives in the host page and
    /// is optional.
    fn setup_help_overlay(document: &Document) -> Result<(), JsValue> {
        let Some(rules) = document.get_element_by_id("rules") else {
            log::warn!("No #rules element, help overlay disabled");
            return Ok(());
        };

        for (button_id, show) in [("rules-btn", true), ("close-btn", false)] {
            let Some(btn) = document.get_element_by_id(button_id) else {
                log::warn!("No #{} element", button_id);
                continue;
            };
            let rules = rules.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let classes = rules.class_list();
                let result = if show {
                    classes.add_1("show")
                } else {
                    classes.remove_1("show")
                };
                if let Err(e) = result {
                    log::warn!("Failed to toggle rules: {:?}", e);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        // Borrow only for the step; alert() may dispatch key events
        let outcome = game.borrow_mut().frame();

        if let Some(message) = outcome.message() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
            game.borrow_mut().restart();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frames the headless demo runs before giving up
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAME_LIMIT: u64 = 200_000;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, serde::Serialize)]
struct DemoSummary {
    outcome: brick_breaker::FrameOutcome,
    frames: u64,
    score: u32,
    lives: u32,
    bricks_left: usize,
}

/// Play one game with the autopilot until it ends or `frame_limit` is hit
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(settings: &brick_breaker::Settings, frame_limit: u64) -> DemoSummary {
    use brick_breaker::{FrameOutcome, GameState, advance_frame, autopilot};

    let mut state = GameState::new(settings);
    let mut outcome = FrameOutcome::Playing;
    while state.frame < frame_limit && !outcome.is_terminal() {
        let steer = autopilot::steer(&state);
        outcome = advance_frame(&mut state, steer);
        for event in &state.events {
            log::debug!("frame {}: {:?}", state.frame, event);
        }
    }

    match outcome.message() {
        Some(message) => log::info!("{}", message),
        None => log::info!("Demo stopped after {} frames", state.frame),
    }

    DemoSummary {
        outcome,
        frames: state.frame,
        score: state.score,
        lives: state.lives,
        bricks_left: state.bricks.active_count(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = brick_breaker::Settings::load_from(path.as_deref());

    let summary = run_demo(&settings, DEMO_FRAME_LIMIT);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
