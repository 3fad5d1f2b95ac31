//! HUD view model
//!
//! Everything the page shows as text around the canvas, computed from the
//! game state. The browser glue diffs consecutive views and only touches the
//! DOM when something changed.

use crate::consts::TOTAL_ATTEMPTS;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Text for the game over panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    /// "Final Score: S / 10"
    pub final_score: String,
    /// Rating message
    pub message: &'static str,
}

/// Snapshot of all HUD text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score: String,
    pub gifts_left: String,
    /// "Power: N%" while aiming
    pub power: Option<String>,
    pub game_over: Option<GameOverSummary>,
    /// The restart button is only offered once the game is over
    pub restart_visible: bool,
}

impl HudView {
    pub fn from_state(state: &GameState, settings: &Settings) -> Self {
        let power = match (state.phase, state.drag) {
            (GamePhase::Aiming, Some(drag)) if settings.show_power_meter => {
                Some(format!("Power: {}%", drag.power().round() as u32))
            }
            _ => None,
        };

        let game_over = state.is_game_over().then(|| GameOverSummary {
            final_score: format!("Final Score: {} / {}", state.score, TOTAL_ATTEMPTS),
            message: state.rating().message(),
        });

        Self {
            score: state.score.to_string(),
            gifts_left: state.attempts_remaining.to_string(),
            power,
            restart_visible: game_over.is_some(),
            game_over,
        }
    }
}
