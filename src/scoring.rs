//! Answer scoring and streak multipliers.

use serde::{Deserialize, Serialize};

use crate::models::{ScoreBreakdown, ScoreResult};
use crate::names;

/// Points earned for one answer.
///
/// Wrong answers score zero with an all-zero breakdown. Correct answers earn
/// the base plus a time bonus (+50 under 5 s, +25 under 10 s), multiplied by
/// the caller-supplied streak multiplier and floored to an integer. Elapsed
/// time is supplied by the caller and not validated here.
pub fn calculate_score(is_correct: bool, time_spent: f64, streak_multiplier: f64) -> ScoreResult {
    if !is_correct {
        return ScoreResult {
            points: 0,
            breakdown: ScoreBreakdown {
                base: 0,
                time_bonus: 0,
                streak_multiplier: 1.0,
            },
        };
    }

    let time_bonus = if time_spent < names::FAST_THRESHOLD_SECS {
        names::FAST_BONUS
    } else if time_spent < names::MEDIUM_THRESHOLD_SECS {
        names::MEDIUM_BONUS
    } else {
        0
    };

    let subtotal = names::BASE_POINTS + time_bonus;
    let points = (f64::from(subtotal) * streak_multiplier).floor() as u32;

    ScoreResult {
        points,
        breakdown: ScoreBreakdown {
            base: names::BASE_POINTS,
            time_bonus,
            streak_multiplier,
        },
    }
}

/// Step function mapping a correct-answer streak to its score multiplier.
pub fn streak_multiplier(streak: u32) -> f64 {
    match streak {
        20.. => 5.0,
        15.. => 4.0,
        10.. => 3.0,
        5.. => 2.0,
        _ => 1.0,
    }
}

/// Display band for a streak. Cosmetic only, no scoring effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakTier {
    None,
    Low,
    Medium,
    High,
}

impl StreakTier {
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            20.. => Self::High,
            10.. => Self::Medium,
            5.. => Self::Low,
            _ => Self::None,
        }
    }

    pub fn flame(self) -> &'static str {
        match self {
            Self::None => "⚡",
            Self::Low => "🔥",
            Self::Medium => "🔥🔥",
            Self::High => "🔥🔥🔥",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_answers_score_zero() {
        let result = calculate_score(false, 1.0, 5.0);
        assert_eq!(result.points, 0);
        assert_eq!(result.breakdown.base, 0);
        assert_eq!(result.breakdown.time_bonus, 0);
        assert_eq!(result.breakdown.streak_multiplier, 1.0);
    }

    #[test]
    fn time_bonus_tiers() {
        assert_eq!(calculate_score(true, 2.0, 1.0).points, 150);
        assert_eq!(calculate_score(true, 7.0, 1.0).points, 125);
        assert_eq!(calculate_score(true, 12.0, 1.0).points, 100);
        // Thresholds are strict.
        assert_eq!(calculate_score(true, 5.0, 1.0).points, 125);
        assert_eq!(calculate_score(true, 10.0, 1.0).points, 100);
    }

    #[test]
    fn multiplier_is_applied_and_floored() {
        assert_eq!(calculate_score(true, 2.0, 2.0).points, 300);
        assert_eq!(calculate_score(true, 12.0, 1.5).points, 150);
        let result = calculate_score(true, 2.0, 3.0);
        assert_eq!(result.points, 450);
        assert_eq!(result.breakdown.base, 100);
        assert_eq!(result.breakdown.time_bonus, 50);
        assert_eq!(result.breakdown.streak_multiplier, 3.0);
    }

    #[test]
    fn streak_multiplier_steps() {
        assert_eq!(streak_multiplier(0), 1.0);
        assert_eq!(streak_multiplier(4), 1.0);
        assert_eq!(streak_multiplier(5), 2.0);
        assert_eq!(streak_multiplier(10), 3.0);
        assert_eq!(streak_multiplier(15), 4.0);
        assert_eq!(streak_multiplier(20), 5.0);
        assert_eq!(streak_multiplier(100), 5.0);

        let mut last = 0.0;
        for streak in 0..40 {
            let m = streak_multiplier(streak);
            assert!(m >= last);
            last = m;
        }
    }

    #[test]
    fn streak_tiers_follow_the_display_bands() {
        assert_eq!(StreakTier::for_streak(0), StreakTier::None);
        assert_eq!(StreakTier::for_streak(4), StreakTier::None);
        assert_eq!(StreakTier::for_streak(5), StreakTier::Low);
        assert_eq!(StreakTier::for_streak(10), StreakTier::Medium);
        assert_eq!(StreakTier::for_streak(19), StreakTier::Medium);
        assert_eq!(StreakTier::for_streak(20), StreakTier::High);
    }
}
