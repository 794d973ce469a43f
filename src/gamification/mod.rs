pub mod achievements;
pub mod leaderboard;
pub mod levels;
pub mod progress;
pub mod streaks;

pub use achievements::{Achievement, AchievementCategory};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use levels::Level;
pub use progress::{ModeStats, UserProgress};
pub use streaks::{Streak, Streaks};
