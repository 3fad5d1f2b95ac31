//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rating::Rating;
use crate::consts::*;

/// Where the launch cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No gift, waiting for a press in the launch zone
    Idle,
    /// Drag in progress
    Aiming,
    /// Gift in the air
    Flight,
    /// Gift came to rest this tick; next tick clears it or ends the game
    Resolved,
    /// All gifts used, waiting for restart
    GameOver,
}

/// Something the sim wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { velocity: Vec2 },
    Landed { score: u32 },
    Missed,
    GameOver { score: u32, rating: Rating },
    Restarted,
}

/// Launch velocity for a drag released at `release`.
///
/// Slingshot mapping: pulling away from the origin throws the other way.
#[inline]
pub fn launch_velocity(origin: Vec2, release: Vec2) -> Vec2 {
    (origin - release) * VELOCITY_SCALE
}

/// A thrown gift
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Box edge length (drawing only, collisions use the center)
    pub size: f32,
    pub gravity: f32,
    /// Still flying
    pub active: bool,
    /// Landed in the sleigh
    pub settled: bool,
}

impl Gift {
    pub fn launch(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: GIFT_SIZE,
            gravity: GRAVITY,
            active: true,
            settled: false,
        }
    }

    /// One forward Euler step: velocity first, then position
    pub fn integrate(&mut self) {
        if !self.active {
            return;
        }
        self.vel.y += self.gravity;
        self.pos += self.vel;
    }
}

/// Drag between press and release
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Fixed launch point, not where the press happened
    pub origin: Vec2,
    /// Latest pointer position
    pub current: Vec2,
}

impl DragGesture {
    pub fn new(origin: Vec2, current: Vec2) -> Self {
        Self { origin, current }
    }

    pub fn velocity(&self) -> Vec2 {
        launch_velocity(self.origin, self.current)
    }

    /// Power meter reading, 0..=100
    pub fn power(&self) -> f32 {
        (self.current.distance(self.origin) / 2.0).min(100.0)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub attempts_remaining: u32,
    /// Gifts that resolved without landing
    pub misses: u32,
    pub phase: GamePhase,
    pub gift: Option<Gift>,
    pub drag: Option<DragGesture>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            attempts_remaining: TOTAL_ATTEMPTS,
            misses: 0,
            phase: GamePhase::Idle,
            gift: None,
            drag: None,
            time_ticks: 0,
        }
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Gifts thrown so far
    pub fn launches(&self) -> u32 {
        TOTAL_ATTEMPTS - self.attempts_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn rating(&self) -> Rating {
        Rating::for_score(self.score, TOTAL_ATTEMPTS)
    }
}
