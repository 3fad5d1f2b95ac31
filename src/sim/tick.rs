//! Fixed timestep simulation tick
//!
//! One tick is one frame at 60 Hz; gravity and velocities are per tick.

use glam::Vec2;

use super::collision::{Contact, check_gift};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    if state.phase == GamePhase::GameOver {
        return None;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Flight => {
            let gift = match state.gift.as_mut() {
                Some(gift) if gift.active => gift,
                _ => {
                    // Nothing airborne: resolve so the next tick moves on
                    log::warn!("Flight tick without an active gift");
                    state.phase = GamePhase::Resolved;
                    return None;
                }
            };

            gift.integrate();

            let bounds = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
            match check_gift(gift.pos, gift.settled, &SLEIGH, bounds) {
                Contact::Sleigh => {
                    gift.settled = true;
                    gift.active = false;
                    state.score += 1;
                    state.phase = GamePhase::Resolved;
                    log::debug!("Gift landed in the sleigh (score {})", state.score);
                    Some(GameEvent::Landed { score: state.score })
                }
                Contact::OutOfBounds => {
                    gift.active = false;
                    state.misses += 1;
                    state.phase = GamePhase::Resolved;
                    log::debug!("Gift missed at ({:.1}, {:.1})", gift.pos.x, gift.pos.y);
                    Some(GameEvent::Missed)
                }
                Contact::None => None,
            }
        }

        GamePhase::Resolved => {
            if state.attempts_remaining == 0 {
                // Last gift stays on screen under the game over overlay
                state.phase = GamePhase::GameOver;
                let rating = state.rating();
                log::info!("Game over: {} / {} ({:?})", state.score, TOTAL_ATTEMPTS, rating);
                Some(GameEvent::GameOver {
                    score: state.score,
                    rating,
                })
            } else {
                state.gift = None;
                state.phase = GamePhase::Idle;
                None
            }
        }

        _ => None,
    }
}
