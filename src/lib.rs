//! Sleigh Toss - drag a gift back, let go, land it in Santa's sleigh
//!
//! Core modules:
//! - `sim`: Deterministic launch/flight/scoring cycle (no rendering, no DOM)
//! - `renderer`: Scene building and the WebGPU triangle pipeline
//! - `hud`: Text shown in the page around the canvas
//! - `platform`: Browser coordinate and URL helpers
//! - `settings`: Display preferences persisted in LocalStorage

pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    use crate::sim::Rect;

    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical canvas size; everything in the sim is in these pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Gifts per session
    pub const TOTAL_ATTEMPTS: u32 = 10;

    /// Downward acceleration, pixels per tick²
    pub const GRAVITY: f32 = 0.5;
    /// Drag distance to launch speed
    pub const VELOCITY_SCALE: f32 = 0.15;
    /// Gift box edge length
    pub const GIFT_SIZE: f32 = 25.0;

    /// Santa's sleigh (the target)
    pub const SLEIGH: Rect = Rect::new(600.0, 450.0, 150.0, 80.0);
    /// Where a drag has to start
    pub const LAUNCH_ZONE: Rect = Rect::new(50.0, 500.0, 100.0, 50.0);
    /// Every gift leaves from here, wherever the drag started
    pub const LAUNCH_ORIGIN: Vec2 = Vec2::new(100.0, 525.0);

    /// Top of the snowy ground strip
    pub const GROUND_Y: f32 = 550.0;
}
