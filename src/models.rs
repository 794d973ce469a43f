use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Country snapshot normalized from the REST Countries payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// cca3 code, unique within a dataset snapshot.
    pub code: String,
    pub name: String,
    pub capital: Option<String>,
    /// Primary currency name.
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub currency_symbol: Option<String>,
    pub flag_url: String,
    pub flag_png_url: String,
    pub region: String,
    pub subregion: Option<String>,
    pub population: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Flags,
    Capitals,
    Currencies,
    Mixed,
}

impl QuizMode {
    pub const ALL: [Self; 4] = [Self::Flags, Self::Capitals, Self::Currencies, Self::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flags => "flags",
            Self::Capitals => "capitals",
            Self::Currencies => "currencies",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flags" => Ok(Self::Flags),
            "capitals" => Ok(Self::Capitals),
            "currencies" => Ok(Self::Currencies),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!(
                "unknown quiz mode '{other}' (expected flags, capitals, currencies or mixed)"
            )),
        }
    }
}

/// One generated multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within a session: `q-{mode}-{country code}-{ordinal}`.
    pub id: String,
    pub mode: QuizMode,
    pub country_code: String,
    pub country_name: String,
    pub prompt: String,
    /// Flag image for flag questions.
    pub image_url: Option<String>,
    pub correct_answer: String,
    /// Exactly four options, correct answer included, shuffled.
    pub options: Vec<String>,
    pub time_limit: Option<u32>,
}

/// Immutable record of one submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    /// Seconds taken to answer.
    pub time_spent: f64,
    pub points_earned: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub streak_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub points: u32,
    pub breakdown: ScoreBreakdown,
}

/// Summary of a completed session, computed once at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub mode: QuizMode,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// 0–100.
    pub accuracy: f64,
    pub total_points: u32,
    pub average_time_per_question: f64,
    pub fastest_answer: f64,
    /// Epoch milliseconds at aggregation time.
    pub completed_at: u64,
}
