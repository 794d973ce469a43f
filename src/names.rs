// Quiz shape
pub const OPTION_COUNT: usize = 4;
pub const DISTRACTOR_COUNT: usize = 3;
/// The eligible pool must hold at least `count + POOL_MARGIN` countries.
pub const POOL_MARGIN: usize = 3;

pub const MIN_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 30;
pub const DEFAULT_QUESTION_COUNT: usize = 10;

// Scoring
pub const BASE_POINTS: u32 = 100;
pub const FAST_THRESHOLD_SECS: f64 = 5.0;
pub const MEDIUM_THRESHOLD_SECS: f64 = 10.0;
pub const FAST_BONUS: u32 = 50;
pub const MEDIUM_BONUS: u32 = 25;

// Streaks
pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;
/// A daily streak survives up to 36 hours between plays.
pub const DAILY_STREAK_GRACE_MS: u64 = 36 * 60 * 60 * 1000;

// Leaderboard
pub const MAX_LEADERBOARD_ENTRIES: usize = 100;

// REST Countries API
pub const API_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const API_FIELDS: &str =
    "name,cca2,cca3,capital,currencies,flags,region,subregion,population,languages";

pub fn countries_url() -> String {
    format!("{API_BASE_URL}/all?fields={API_FIELDS}")
}

// Local data files
pub const APP_DIR_NAME: &str = "terraquiz";
pub const COUNTRIES_CACHE_FILE: &str = "countries-cache.json";
pub const PROGRESS_FILE: &str = "user-progress.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

pub const COUNTRIES_CACHE_TTL_MS: u64 = 7 * DAY_MS;

pub const DEFAULT_PLAYER_NAME: &str = "Geography Explorer";
