//! Correct-answer and daily-play streaks.

use serde::{Deserialize, Serialize};

use crate::names;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub best: u32,
    pub last_updated: u64,
}

/// Both streak kinds, tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub correct: Streak,
    pub daily: Streak,
}

impl Streaks {
    /// Advance or reset the correct-answer streak.
    pub fn record_answer(&mut self, is_correct: bool, now: u64) {
        if is_correct {
            self.correct.current += 1;
            self.correct.best = self.correct.best.max(self.correct.current);
        } else {
            self.correct.current = 0;
        }
        self.correct.last_updated = now;
    }

    /// Reset the correct streak for a fresh quiz.
    pub fn reset_correct(&mut self, now: u64) {
        self.correct.current = 0;
        self.correct.last_updated = now;
    }

    /// Update the daily streak for a play at `now`. Increments once 24 hours
    /// have passed, as long as the 36-hour grace period has not expired;
    /// resets to 1 afterwards. Plays within the same day leave it unchanged.
    pub fn record_daily_play(&mut self, now: u64) {
        let since_last = now.saturating_sub(self.daily.last_updated);

        if since_last >= names::DAY_MS {
            if since_last <= names::DAILY_STREAK_GRACE_MS {
                self.daily.current += 1;
            } else {
                self.daily.current = 1;
            }
        } else if self.daily.current == 0 {
            // First play ever starts the streak.
            self.daily.current = 1;
        }

        self.daily.best = self.daily.best.max(self.daily.current);
        self.daily.last_updated = now;
    }
}
