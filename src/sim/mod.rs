//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input applied through `apply_input`, never read from the platform
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod rating;
pub mod state;
pub mod tick;

pub use collision::{Contact, Rect, check_gift};
pub use input::{InputEvent, apply_input};
pub use rating::Rating;
pub use state::{DragGesture, GameEvent, GamePhase, GameState, Gift, launch_velocity};
pub use tick::tick;
