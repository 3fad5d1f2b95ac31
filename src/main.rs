//! Sleigh Toss entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use sleigh_toss::StartupError;
    use sleigh_toss::consts::*;
    use sleigh_toss::hud::HudView;
    use sleigh_toss::platform::{CanvasRect, quality_override};
    use sleigh_toss::renderer::{RenderState, build_scene, scene_vertices};
    use sleigh_toss::settings::Settings;
    use sleigh_toss::sim::{GameEvent, GameState, InputEvent, apply_input, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        /// Last HUD written to the DOM
        hud: Option<HudView>,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                hud: None,
            }
        }

        /// Apply a pointer/button event right away
        fn apply(&mut self, event: InputEvent) {
            if let Some(game_event) = apply_input(&mut self.state, event) {
                self.on_event(game_event);
            }
        }

        fn on_event(&self, event: GameEvent) {
            match event {
                GameEvent::Launched { velocity } => {
                    log::info!(
                        "Gift launched ({:.1}, {:.1}), {} left",
                        velocity.x,
                        velocity.y,
                        self.state.attempts_remaining
                    );
                }
                GameEvent::Landed { score } => log::info!("In the sleigh! Score {}", score),
                GameEvent::Missed => log::info!("Missed"),
                GameEvent::GameOver { score, rating } => {
                    log::info!("Game over: {} / {} - {}", score, TOTAL_ATTEMPTS, rating.message());
                }
                GameEvent::Restarted => log::info!("Game restarted"),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if let Some(event) = tick(&mut self.state) {
                    self.on_event(event);
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let scene = build_scene(&self.state, &self.settings);
                let vertices = scene_vertices(&scene, &self.settings);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM (only when something changed)
        fn update_hud(&mut self) {
            let view = HudView::from_state(&self.state, &self.settings);
            if self.hud.as_ref() == Some(&view) {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_text(&document, "score", &view.score);
            set_text(&document, "gifts-left", &view.gifts_left);

            match &view.power {
                Some(power) => {
                    set_text(&document, "power", power);
                    set_visible(&document, "power", true);
                }
                None => set_visible(&document, "power", false),
            }

            if let Some(summary) = &view.game_over {
                set_text(&document, "final-score", &summary.final_score);
                set_text(&document, "final-message", summary.message);
            }
            set_visible(&document, "game-over", view.game_over.is_some());
            set_visible(&document, "restart-btn", view.restart_visible);

            self.hud = Some(view);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn canvas_rect(canvas: &HtmlCanvasElement) -> CanvasRect {
        let rect = canvas.get_bounding_client_rect();
        CanvasRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Sleigh Toss starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| StartupError::MissingElement("canvas".into()))?
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas("canvas".into()))?;

        // Backing store at device resolution; the scene maps onto it whole
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let mut settings = Settings::load();
        if let Some(quality) = window.location().search().ok().as_deref().and_then(quality_override) {
            log::info!("Quality override from URL: {}", quality.as_str());
            settings.quality = quality;
            settings.save();
        }

        let game = Rc::new(RefCell::new(Game::new(settings)));

        // Initialize WebGPU (WebGL2 fallback where WebGPU is missing)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::NoAdapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Sleigh Toss running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - start aiming if inside the launch zone
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let at = canvas_rect(&canvas_clone).to_canvas(event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().apply(InputEvent::Press(at));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let to = canvas_rect(&canvas_clone).to_canvas(event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().apply(InputEvent::Move(to));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - launch from the last move position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().apply(InputEvent::Release);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let at = canvas_rect(&canvas_clone).to_canvas(touch.client_x() as f32, touch.client_y() as f32);
                    game.borrow_mut().apply(InputEvent::Press(at));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let to = canvas_rect(&canvas_clone).to_canvas(touch.client_x() as f32, touch.client_y() as f32);
                    game.borrow_mut().apply(InputEvent::Move(to));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - launch from the last touch position
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().apply(InputEvent::Release);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().apply(InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Sleigh Toss failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sleigh Toss (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    demo::run_scripted_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session through the public sim API
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use sleigh_toss::consts::{LAUNCH_ORIGIN, TOTAL_ATTEMPTS};
    use sleigh_toss::sim::{GameEvent, GamePhase, GameState, InputEvent, apply_input, tick};

    /// Release points for the ten gifts, a mix of landings and misses
    const RELEASES: [(f32, f32); 10] = [
        (0.0, 585.0),
        (100.0, 425.0),
        (-60.0, 565.0),
        (40.0, 625.0),
        (100.0, 625.0),
        (20.0, 605.0),
        (150.0, 500.0),
        (-100.0, 565.0),
        (60.0, 705.0),
        (100.0, 525.0),
    ];

    pub fn run_scripted_session() {
        let mut state = GameState::new();

        for (x, y) in RELEASES {
            apply_input(&mut state, InputEvent::Press(LAUNCH_ORIGIN));
            apply_input(&mut state, InputEvent::Move(Vec2::new(x, y)));
            if let Some(GameEvent::Launched { velocity }) = apply_input(&mut state, InputEvent::Release) {
                log::info!("Launch {} at ({:.2}, {:.2})", state.launches(), velocity.x, velocity.y);
            }

            let start = state.time_ticks;
            while !matches!(state.phase, GamePhase::Idle | GamePhase::GameOver) {
                match tick(&mut state) {
                    Some(GameEvent::Landed { score }) => {
                        log::info!("  landed after {} ticks, score {}", state.time_ticks - start, score);
                    }
                    Some(GameEvent::Missed) => {
                        log::info!("  missed after {} ticks", state.time_ticks - start);
                    }
                    _ => {}
                }
            }
        }

        log::info!(
            "Final Score: {} / {} - {}",
            state.score,
            TOTAL_ATTEMPTS,
            state.rating().message()
        );
    }
}
