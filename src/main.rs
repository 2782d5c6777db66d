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
    use web_sys::{HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::renderer::CanvasSurface;
    use brick_breaker::sim::GameEvent;
    use brick_breaker::{FrameOutcome, Game, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "runButton";

    /// Everything the frame callback needs
    struct App {
        game: Game,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        start_button: Option<HtmlButtonElement>,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let start_button: Option<HtmlButtonElement> = document
            .get_element_by_id(START_BUTTON_ID)
            .and_then(|el| el.dyn_into().ok());

        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings),
            surface: CanvasSurface::new(canvas.clone())?,
            canvas,
            start_button,
        }));

        setup_input_handlers(&document, app.clone())?;
        setup_start_button(app)?;

        log::info!("Brick Breaker ready");
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if key == "i" || key == "I" {
                    let idle = a.game.input.toggle_idle_mode();
                    log::info!("Idle mode: {}", idle);
                } else {
                    a.game.input.key_down(&key);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - position relative to the canvas left edge
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let relative_x = event.client_x() - a.canvas.offset_left();
                a.game.input.pointer_moved(relative_x as f32);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_start_button(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let button = app.borrow().start_button.clone();
        let Some(button) = button else {
            log::warn!("No #{} button, starting immediately", START_BUTTON_ID);
            start(app);
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            start(app.clone());
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Start the loop once; later triggers are no-ops
    fn start(app: Rc<RefCell<App>>) {
        let started = {
            let mut a = app.borrow_mut();
            if let Some(button) = &a.start_button {
                button.set_disabled(true);
            }
            a.game.start()
        };
        if started {
            request_animation_frame(app);
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.game.frame(&mut a.surface)
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(app),
            FrameOutcome::Halted(event) => end_run(&app, event),
            FrameOutcome::Idle => {}
        }
    }

    /// Tell the player how it went and reset for a fresh run
    fn end_run(app: &Rc<RefCell<App>>, event: GameEvent) {
        let message = match event {
            GameEvent::Won => "YOU WIN!!!",
            _ => "GAME OVER",
        };
        log::info!("{}", message);

        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }

        // Without a start button there is nothing to click, so play resumes at once
        let restarted = {
            let mut a = app.borrow_mut();
            let auto_start = a.start_button.is_none();
            if let Some(button) = &a.start_button {
                button.set_disabled(false);
            }
            a.game.restart_for_next_run(auto_start)
        };
        if restarted {
            request_animation_frame(app.clone());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Upper bound on frames for the headless demo
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::{FrameOutcome, Game, Settings};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let settings = Settings::load();
    let mut surface = RecordingSurface::new(settings.canvas_width, settings.canvas_height);
    let mut game = Game::new(settings);
    game.input.idle_mode = true;
    game.start();

    let mut outcome = FrameOutcome::Continue;
    let mut frames = 0;
    while outcome == FrameOutcome::Continue && frames < MAX_DEMO_FRAMES {
        outcome = game.frame(&mut surface);
        frames += 1;
    }

    let state = game.state();
    match outcome {
        FrameOutcome::Halted(event) => log::info!("Demo ended with {:?}", event),
        _ => log::warn!("Demo stopped after {} frames without a result", frames),
    }
    println!(
        "frames: {}  score: {}/{}  lives: {}",
        frames,
        state.score,
        game.settings().bricks.total(),
        state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
