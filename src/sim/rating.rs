//! End-of-session rating shown on the game over panel

use serde::{Deserialize, Serialize};

/// Rating tier for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// Every gift landed
    Perfect,
    /// 70% or better
    Great,
    /// 40% or better
    NotBad,
    KeepPracticing,
}

impl Rating {
    /// Tier for `score` out of `total` gifts
    pub fn for_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return Rating::KeepPracticing;
        }
        // Compare percentages in integers so 7/10 is exactly 70%
        let scaled = score * 100;
        if scaled >= total * 100 {
            Rating::Perfect
        } else if scaled >= total * 70 {
            Rating::Great
        } else if scaled >= total * 40 {
            Rating::NotBad
        } else {
            Rating::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rating::Perfect => "🎅 Perfect! Santa is impressed! 🎅",
            Rating::Great => "🎁 Great job! 🎁",
            Rating::NotBad => "⛄ Not bad! ⛄",
            Rating::KeepPracticing => "🎄 Keep practicing! 🎄",
        }
    }
}
