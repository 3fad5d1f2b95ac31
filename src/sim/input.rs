//! Pointer input reducer
//!
//! Events are applied the moment they arrive; nothing is queued for the next
//! tick. Anything that does not fit the current phase is silently dropped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{DragGesture, GameEvent, GamePhase, GameState, Gift};
use crate::consts::{LAUNCH_ORIGIN, LAUNCH_ZONE};

/// A pointer or button event, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse down / touch start
    Press(Vec2),
    /// Mouse move / touch move
    Move(Vec2),
    /// Mouse up / touch end. Launches from the last pressed or moved
    /// position; touch end carries no coordinates.
    Release,
    /// Restart button
    Restart,
}

/// Apply one input event to the state
pub fn apply_input(state: &mut GameState, event: InputEvent) -> Option<GameEvent> {
    match event {
        InputEvent::Press(at) => {
            if state.phase == GamePhase::Idle && LAUNCH_ZONE.contains_inclusive(at) {
                state.drag = Some(DragGesture::new(LAUNCH_ORIGIN, at));
                state.phase = GamePhase::Aiming;
            }
            None
        }
        InputEvent::Move(to) => {
            if let (GamePhase::Aiming, Some(drag)) = (state.phase, state.drag.as_mut()) {
                drag.current = to;
            }
            None
        }
        InputEvent::Release => {
            if state.phase != GamePhase::Aiming {
                return None;
            }
            let drag = state.drag.take()?;
            let velocity = drag.velocity();
            state.gift = Some(Gift::launch(drag.origin, velocity));
            state.attempts_remaining = state.attempts_remaining.saturating_sub(1);
            state.phase = GamePhase::Flight;
            log::debug!(
                "Gift launched at ({:.2}, {:.2}), {} left",
                velocity.x,
                velocity.y,
                state.attempts_remaining
            );
            Some(GameEvent::Launched { velocity })
        }
        InputEvent::Restart => {
            if state.phase != GamePhase::GameOver {
                return None;
            }
            state.reset();
            log::info!("Session restarted");
            Some(GameEvent::Restarted)
        }
    }
}
