//! Local leaderboard, capped at the top 100 scores.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::models::SessionStats;
use crate::names;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub player_name: String,
    pub score: u32,
    pub mode: String,
    pub accuracy: f64,
    /// Epoch milliseconds of the session completion.
    pub date: u64,
    pub level: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Insert a completed session, keeping the list sorted by score and
    /// trimmed to the cap.
    pub fn add_entry(&mut self, stats: &SessionStats, player_name: &str, level: u32) {
        self.entries.push(LeaderboardEntry {
            id: Ulid::new().to_string(),
            player_name: player_name.to_string(),
            score: stats.total_points,
            mode: stats.mode.to_string(),
            accuracy: stats.accuracy,
            date: stats.completed_at,
            level,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(names::MAX_LEADERBOARD_ENTRIES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn top(&self, limit: usize) -> &[LeaderboardEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn by_mode(&self, mode: &str) -> Vec<&LeaderboardEntry> {
        self.entries.iter().filter(|e| e.mode == mode).collect()
    }

    /// Entries whose completion date falls within the last `days` days.
    pub fn since_days(&self, days: u64, now: u64) -> Vec<&LeaderboardEntry> {
        let cutoff = now.saturating_sub(days * names::DAY_MS);
        self.entries.iter().filter(|e| e.date >= cutoff).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizMode;

    fn stats(points: u32, mode: QuizMode, completed_at: u64) -> SessionStats {
        SessionStats {
            mode,
            total_questions: 10,
            correct_answers: 8,
            accuracy: 80.0,
            total_points: points,
            average_time_per_question: 5.0,
            fastest_answer: 2.0,
            completed_at,
        }
    }

    #[test]
    fn entries_are_sorted_by_score() {
        let mut board = Leaderboard::default();
        board.add_entry(&stats(300, QuizMode::Flags, 1), "A", 1);
        board.add_entry(&stats(900, QuizMode::Capitals, 2), "B", 2);
        board.add_entry(&stats(600, QuizMode::Flags, 3), "C", 1);

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 600, 300]);
        assert_eq!(board.top(2).len(), 2);
        assert_eq!(board.top(10).len(), 3);
    }

    #[test]
    fn the_list_is_capped() {
        let mut board = Leaderboard::default();
        for i in 0..120 {
            board.add_entry(&stats(i, QuizMode::Flags, 0), "A", 1);
        }
        assert_eq!(board.entries().len(), names::MAX_LEADERBOARD_ENTRIES);
        // Lowest scores fell off the bottom.
        assert!(board.entries().iter().all(|e| e.score >= 20));
    }

    #[test]
    fn mode_and_recency_filters() {
        let day = names::DAY_MS;
        let mut board = Leaderboard::default();
        board.add_entry(&stats(100, QuizMode::Flags, 10 * day), "A", 1);
        board.add_entry(&stats(200, QuizMode::Capitals, 12 * day), "B", 1);
        board.add_entry(&stats(300, QuizMode::Flags, 13 * day), "C", 1);

        assert_eq!(board.by_mode("flags").len(), 2);
        assert_eq!(board.by_mode("currencies").len(), 0);
        assert_eq!(board.since_days(2, 13 * day).len(), 2);
        assert_eq!(board.since_days(1, 14 * day).len(), 1);

        board.clear();
        assert!(board.entries().is_empty());
    }
}
