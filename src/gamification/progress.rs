//! Lifetime user progress, persisted between sessions.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::models::{QuizMode, SessionStats};
use crate::utils;

use super::achievements::{self, Achievement};
use super::levels;
use super::streaks::Streaks;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeStats {
    pub total_quizzes: u64,
    pub total_questions: u64,
    pub correct_answers: u64,
    pub total_points: u64,
    /// Running average across quizzes, 0–100.
    pub average_accuracy: f64,
    pub best_score: u32,
    /// Shortest full-quiz time in seconds; 0 until the first quiz.
    pub fastest_completion: f64,
}

impl ModeStats {
    fn record(&mut self, stats: &SessionStats) {
        let completion_time = stats.average_time_per_question * stats.total_questions as f64;

        self.average_accuracy = (self.average_accuracy * self.total_quizzes as f64
            + stats.accuracy)
            / (self.total_quizzes + 1) as f64;
        self.total_quizzes += 1;
        self.total_questions += stats.total_questions as u64;
        self.correct_answers += stats.correct_answers as u64;
        self.total_points += u64::from(stats.total_points);
        self.best_score = self.best_score.max(stats.total_points);
        self.fastest_completion = if self.fastest_completion == 0.0 {
            completion_time
        } else {
            self.fastest_completion.min(completion_time)
        };
    }
}

/// Per-mode stat blocks, one per [`QuizMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerModeStats {
    pub flags: ModeStats,
    pub capitals: ModeStats,
    pub currencies: ModeStats,
    pub mixed: ModeStats,
}

impl PerModeStats {
    pub fn get(&self, mode: QuizMode) -> &ModeStats {
        match mode {
            QuizMode::Flags => &self.flags,
            QuizMode::Capitals => &self.capitals,
            QuizMode::Currencies => &self.currencies,
            QuizMode::Mixed => &self.mixed,
        }
    }

    fn get_mut(&mut self, mode: QuizMode) -> &mut ModeStats {
        match mode {
            QuizMode::Flags => &mut self.flags,
            QuizMode::Capitals => &mut self.capitals,
            QuizMode::Currencies => &mut self.currencies,
            QuizMode::Mixed => &mut self.mixed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: String,
    pub player_name: String,
    pub created_at: u64,
    pub last_played_at: u64,
    pub total_points: u64,
    pub current_level: u32,
    pub total_quizzes: u64,
    pub mode_stats: PerModeStats,
    pub achievements: Vec<Achievement>,
    pub streaks: Streaks,
}

impl UserProgress {
    pub fn new(player_name: &str) -> Self {
        let now = utils::epoch_millis();
        Self {
            id: Ulid::new().to_string(),
            player_name: player_name.to_string(),
            created_at: now,
            last_played_at: now,
            total_points: 0,
            current_level: 1,
            total_quizzes: 0,
            mode_stats: PerModeStats::default(),
            achievements: achievements::initialize_achievements(),
            streaks: Streaks::default(),
        }
    }

    /// Fold a completed session into the lifetime totals. Returns true when
    /// the session pushed the player over a level boundary.
    pub fn update_after_quiz(&mut self, stats: &SessionStats) -> bool {
        let previous_points = self.total_points;

        self.mode_stats.get_mut(stats.mode).record(stats);
        self.total_points += u64::from(stats.total_points);
        self.total_quizzes += 1;
        self.last_played_at = utils::epoch_millis();
        self.current_level = levels::level_for_points(self.total_points).level;

        levels::is_level_up(previous_points, self.total_points)
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new(crate::names::DEFAULT_PLAYER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mode: QuizMode, points: u32, accuracy: f64) -> SessionStats {
        SessionStats {
            mode,
            total_questions: 10,
            correct_answers: (accuracy / 10.0) as usize,
            accuracy,
            total_points: points,
            average_time_per_question: 6.0,
            fastest_answer: 2.0,
            completed_at: 0,
        }
    }

    #[test]
    fn quiz_results_accumulate_per_mode() {
        let mut progress = UserProgress::new("Tester");
        progress.update_after_quiz(&stats(QuizMode::Flags, 400, 80.0));
        progress.update_after_quiz(&stats(QuizMode::Flags, 200, 40.0));
        progress.update_after_quiz(&stats(QuizMode::Capitals, 300, 60.0));

        let flags = progress.mode_stats.get(QuizMode::Flags);
        assert_eq!(flags.total_quizzes, 2);
        assert_eq!(flags.total_points, 600);
        assert_eq!(flags.best_score, 400);
        assert_eq!(flags.average_accuracy, 60.0);
        assert_eq!(flags.fastest_completion, 60.0);

        assert_eq!(progress.total_points, 900);
        assert_eq!(progress.total_quizzes, 3);
        assert_eq!(progress.mode_stats.get(QuizMode::Capitals).total_quizzes, 1);
    }

    #[test]
    fn level_ups_are_reported() {
        let mut progress = UserProgress::new("Tester");
        assert!(!progress.update_after_quiz(&stats(QuizMode::Flags, 600, 60.0)));
        assert_eq!(progress.current_level, 1);

        assert!(progress.update_after_quiz(&stats(QuizMode::Flags, 600, 60.0)));
        assert_eq!(progress.current_level, 2);
    }

    #[test]
    fn new_progress_starts_with_locked_achievements() {
        let progress = UserProgress::new("Tester");
        assert_eq!(progress.achievements.len(), 16);
        assert!(progress.achievements.iter().all(|a| !a.unlocked));
        assert_eq!(progress.current_level, 1);
    }
}
