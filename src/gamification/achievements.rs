//! Achievement definitions and the unlock engine.

use serde::{Deserialize, Serialize};

use crate::models::{QuizMode, SessionStats};
use crate::utils;

use super::progress::UserProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Milestone,
    Streak,
    Mastery,
    Perfect,
    Speed,
}

/// Static definition of one achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
    pub target: u64,
}

pub const ACHIEVEMENT_DEFINITIONS: [AchievementDef; 16] = [
    AchievementDef {
        id: "first-quiz",
        name: "First Steps",
        description: "Complete your first quiz",
        category: AchievementCategory::Milestone,
        icon: "🎯",
        target: 1,
    },
    AchievementDef {
        id: "century",
        name: "Century Club",
        description: "Score 100 points in a single quiz",
        category: AchievementCategory::Milestone,
        icon: "💯",
        target: 100,
    },
    AchievementDef {
        id: "thousand-club",
        name: "Thousand Club",
        description: "Accumulate 1,000 total points",
        category: AchievementCategory::Milestone,
        icon: "🎖️",
        target: 1_000,
    },
    AchievementDef {
        id: "ten-quizzes",
        name: "Dedicated Learner",
        description: "Complete 10 quizzes",
        category: AchievementCategory::Milestone,
        icon: "📚",
        target: 10,
    },
    AchievementDef {
        id: "fifty-quizzes",
        name: "Geography Enthusiast",
        description: "Complete 50 quizzes",
        category: AchievementCategory::Milestone,
        icon: "🌟",
        target: 50,
    },
    AchievementDef {
        id: "hot-streak",
        name: "Hot Streak",
        description: "Get 5 correct answers in a row",
        category: AchievementCategory::Streak,
        icon: "🔥",
        target: 5,
    },
    AchievementDef {
        id: "on-fire",
        name: "On Fire",
        description: "Get 10 correct answers in a row",
        category: AchievementCategory::Streak,
        icon: "🔥🔥",
        target: 10,
    },
    AchievementDef {
        id: "unstoppable",
        name: "Unstoppable",
        description: "Get 20 correct answers in a row",
        category: AchievementCategory::Streak,
        icon: "🔥🔥🔥",
        target: 20,
    },
    AchievementDef {
        id: "daily-dedication",
        name: "Daily Dedication",
        description: "Play for 7 days in a row",
        category: AchievementCategory::Streak,
        icon: "📅",
        target: 7,
    },
    AchievementDef {
        id: "flag-master",
        name: "Flag Master",
        description: "Score 800+ points in a Flags quiz",
        category: AchievementCategory::Mastery,
        icon: "🏴",
        target: 800,
    },
    AchievementDef {
        id: "capital-expert",
        name: "Capital Expert",
        description: "Score 800+ points in a Capitals quiz",
        category: AchievementCategory::Mastery,
        icon: "🏛️",
        target: 800,
    },
    AchievementDef {
        id: "currency-connoisseur",
        name: "Currency Connoisseur",
        description: "Score 800+ points in a Currencies quiz",
        category: AchievementCategory::Mastery,
        icon: "💰",
        target: 800,
    },
    AchievementDef {
        id: "perfectionist",
        name: "Perfectionist",
        description: "Get 100% accuracy in a quiz",
        category: AchievementCategory::Perfect,
        icon: "⭐",
        target: 100,
    },
    AchievementDef {
        id: "flawless-victory",
        name: "Flawless Victory",
        description: "Complete a perfect quiz with all fast answers",
        category: AchievementCategory::Perfect,
        icon: "👑",
        target: 1,
    },
    AchievementDef {
        id: "quick-thinker",
        name: "Quick Thinker",
        description: "Answer a question in under 3 seconds",
        category: AchievementCategory::Speed,
        icon: "⚡",
        target: 1,
    },
    AchievementDef {
        id: "lightning-round",
        name: "Lightning Round",
        description: "Complete a full quiz with average time under 5 seconds",
        category: AchievementCategory::Speed,
        icon: "⚡⚡",
        target: 1,
    },
];

/// Runtime state of one achievement, persisted with user progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub icon: String,
    pub target: u64,
    pub unlocked: bool,
    pub unlocked_at: Option<u64>,
    /// 0–100 toward the target.
    pub progress: f64,
}

impl From<&AchievementDef> for Achievement {
    fn from(def: &AchievementDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            category: def.category,
            icon: def.icon.to_string(),
            target: def.target,
            unlocked: false,
            unlocked_at: None,
            progress: 0.0,
        }
    }
}

/// All achievements in their locked state.
pub fn initialize_achievements() -> Vec<Achievement> {
    ACHIEVEMENT_DEFINITIONS.iter().map(Achievement::from).collect()
}

fn ratio_progress(value: u64, target: u64) -> f64 {
    (value as f64 / target as f64 * 100.0).min(100.0)
}

/// Evaluate the unlock condition for one achievement.
///
/// Returns `(should_unlock, progress)` where progress is a 0–100 percentage.
fn evaluate(
    id: &str,
    stats: &SessionStats,
    progress: &UserProgress,
    current_streak: u32,
    daily_streak: u32,
) -> (bool, f64) {
    match id {
        "first-quiz" => (
            progress.total_quizzes >= 1,
            ratio_progress(progress.total_quizzes, 1),
        ),
        "century" => (
            stats.total_points >= 100,
            ratio_progress(u64::from(stats.total_points), 100),
        ),
        "thousand-club" => (
            progress.total_points >= 1_000,
            ratio_progress(progress.total_points, 1_000),
        ),
        "ten-quizzes" => (
            progress.total_quizzes >= 10,
            ratio_progress(progress.total_quizzes, 10),
        ),
        "fifty-quizzes" => (
            progress.total_quizzes >= 50,
            ratio_progress(progress.total_quizzes, 50),
        ),
        "hot-streak" => (
            current_streak >= 5,
            ratio_progress(u64::from(current_streak), 5),
        ),
        "on-fire" => (
            current_streak >= 10,
            ratio_progress(u64::from(current_streak), 10),
        ),
        "unstoppable" => (
            current_streak >= 20,
            ratio_progress(u64::from(current_streak), 20),
        ),
        "daily-dedication" => (
            daily_streak >= 7,
            ratio_progress(u64::from(daily_streak), 7),
        ),
        "flag-master" => mastery(stats, QuizMode::Flags),
        "capital-expert" => mastery(stats, QuizMode::Capitals),
        "currency-connoisseur" => mastery(stats, QuizMode::Currencies),
        "perfectionist" => (stats.accuracy >= 100.0, stats.accuracy),
        "flawless-victory" => {
            let hit = stats.accuracy >= 100.0 && stats.average_time_per_question < 5.0;
            (hit, if hit { 100.0 } else { 0.0 })
        }
        "quick-thinker" => {
            let hit = stats.total_questions > 0 && stats.fastest_answer < 3.0;
            (hit, if hit { 100.0 } else { 0.0 })
        }
        "lightning-round" => {
            let hit = stats.total_questions > 0 && stats.average_time_per_question < 5.0;
            (hit, if hit { 100.0 } else { 0.0 })
        }
        _ => (false, 0.0),
    }
}

fn mastery(stats: &SessionStats, mode: QuizMode) -> (bool, f64) {
    if stats.mode == mode {
        (
            stats.total_points >= 800,
            ratio_progress(u64::from(stats.total_points), 800),
        )
    } else {
        (false, 0.0)
    }
}

/// Re-check every locked achievement after a completed session. Returns the
/// ids of the newly unlocked ones; `achievements` is updated in place.
pub fn check_achievements(
    achievements: &mut [Achievement],
    stats: &SessionStats,
    progress: &UserProgress,
    current_streak: u32,
    daily_streak: u32,
) -> Vec<Achievement> {
    let mut newly_unlocked = Vec::new();

    for achievement in achievements.iter_mut() {
        if achievement.unlocked {
            continue;
        }

        let (should_unlock, pct) =
            evaluate(&achievement.id, stats, progress, current_streak, daily_streak);

        if should_unlock {
            achievement.unlocked = true;
            achievement.unlocked_at = Some(utils::epoch_millis());
            achievement.progress = 100.0;
            tracing::info!("achievement unlocked: {} ({})", achievement.name, achievement.id);
            newly_unlocked.push(achievement.clone());
        } else {
            achievement.progress = pct;
        }
    }

    newly_unlocked
}

/// Share of achievements unlocked, 0–100.
pub fn completion_percent(achievements: &[Achievement]) -> f64 {
    if achievements.is_empty() {
        return 0.0;
    }
    let unlocked = achievements.iter().filter(|a| a.unlocked).count();
    unlocked as f64 / achievements.len() as f64 * 100.0
}

pub fn by_category(
    achievements: &[Achievement],
    category: AchievementCategory,
) -> Vec<&Achievement> {
    achievements.iter().filter(|a| a.category == category).collect()
}
