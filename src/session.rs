//! Session lifecycle: pre-generated questions, one answer per question, and
//! final aggregation into [`SessionStats`].

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::errors::QuizError;
use crate::models::{Answer, Question, QuizMode, ScoreResult, SessionStats};
use crate::scoring;
use crate::utils;

/// One quiz attempt. Questions are fixed at creation; answers grow one per
/// submission until the cursor passes the last question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub id: String,
    pub mode: QuizMode,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answers: Vec<Answer>,
    pub started_at: u64,
    pub completed_at: Option<u64>,
    pub total_points: u32,
}

impl QuizSession {
    pub fn new(mode: QuizMode, questions: Vec<Question>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            mode,
            questions,
            current_index: 0,
            answers: Vec::new(),
            started_at: utils::epoch_millis(),
            completed_at: None,
            total_points: 0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Record the answer for the current question and advance the cursor.
    ///
    /// The caller supplies the elapsed time and the streak multiplier in
    /// effect before this answer. Exactly one submission per question; a
    /// submission past the end fails with [`QuizError::SessionComplete`].
    pub fn submit_answer(
        &mut self,
        selected: &str,
        time_spent: f64,
        streak_multiplier: f64,
    ) -> Result<ScoreResult, QuizError> {
        let question = self
            .current_question()
            .ok_or(QuizError::SessionComplete)?;
        let question_id = question.id.clone();
        let correct_answer = question.correct_answer.clone();

        let is_correct = selected == correct_answer;
        let score = scoring::calculate_score(is_correct, time_spent, streak_multiplier);

        self.answers.push(Answer {
            question_id,
            selected_answer: selected.to_string(),
            correct_answer,
            is_correct,
            time_spent,
            points_earned: score.points,
        });
        self.total_points += score.points;
        self.current_index += 1;

        Ok(score)
    }

    /// Mark the session complete and aggregate its statistics.
    pub fn finish(&mut self) -> SessionStats {
        let stats = aggregate_session(&self.answers, self.mode, self.total_points);
        self.completed_at = Some(stats.completed_at);
        stats
    }
}

/// Summarize a completed answer list. Never fails; an empty list yields zero
/// accuracy and times (sessions always hold at least one question, so the
/// empty case is a defensive default only).
pub fn aggregate_session(answers: &[Answer], mode: QuizMode, total_points: u32) -> SessionStats {
    let total_questions = answers.len();
    let correct_answers = answers.iter().filter(|a| a.is_correct).count();
    let total_time: f64 = answers.iter().map(|a| a.time_spent).sum();

    let (accuracy, average_time_per_question) = if total_questions == 0 {
        (0.0, 0.0)
    } else {
        (
            correct_answers as f64 / total_questions as f64 * 100.0,
            total_time / total_questions as f64,
        )
    };

    let fastest_answer = answers
        .iter()
        .map(|a| a.time_spent)
        .fold(f64::INFINITY, f64::min);
    let fastest_answer = if fastest_answer.is_finite() {
        fastest_answer
    } else {
        0.0
    };

    SessionStats {
        mode,
        total_questions,
        correct_answers,
        accuracy,
        total_points,
        average_time_per_question,
        fastest_answer,
        completed_at: utils::epoch_millis(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn question(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            mode: QuizMode::Flags,
            country_code: "FRA".to_string(),
            country_name: "France".to_string(),
            prompt: "Which country does this flag belong to?".to_string(),
            image_url: None,
            correct_answer: correct.to_string(),
            options: vec![
                correct.to_string(),
                "Germany".to_string(),
                "Spain".to_string(),
                "Italy".to_string(),
            ],
            time_limit: None,
        }
    }

    fn answer(is_correct: bool, time_spent: f64, points: u32) -> Answer {
        Answer {
            question_id: "q-flags-FRA-0".to_string(),
            selected_answer: "France".to_string(),
            correct_answer: "France".to_string(),
            is_correct,
            time_spent,
            points_earned: points,
        }
    }

    #[test]
    fn submissions_advance_the_cursor_and_accumulate_points() {
        let questions = vec![question("q-flags-FRA-0", "France"), question("q-flags-FRA-1", "Japan")];
        let mut session = QuizSession::new(QuizMode::Flags, questions);

        assert!(!session.is_complete());
        let first = session.submit_answer("France", 2.0, 1.0).unwrap();
        assert_eq!(first.points, 150);
        assert_eq!(session.current_index, 1);

        let second = session.submit_answer("Spain", 3.0, 1.0).unwrap();
        assert_eq!(second.points, 0);

        assert!(session.is_complete());
        assert_eq!(session.total_points, 150);
        assert_eq!(session.answers.len(), 2);
        assert!(session.answers[0].is_correct);
        assert!(!session.answers[1].is_correct);
    }

    #[test]
    fn submitting_past_the_end_fails() {
        let mut session = QuizSession::new(QuizMode::Flags, vec![question("q-flags-FRA-0", "France")]);
        session.submit_answer("France", 1.0, 1.0).unwrap();
        assert!(matches!(
            session.submit_answer("France", 1.0, 1.0),
            Err(QuizError::SessionComplete)
        ));
    }

    #[test]
    fn finish_records_the_completion_time() {
        let mut session = QuizSession::new(QuizMode::Flags, vec![question("q-flags-FRA-0", "France")]);
        session.submit_answer("France", 4.0, 1.0).unwrap();
        let stats = session.finish();

        assert_eq!(session.completed_at, Some(stats.completed_at));
        assert_eq!(stats.total_points, session.total_points);
    }

    #[test]
    fn aggregation_matches_the_answer_list() {
        let mut answers = Vec::new();
        for i in 0..10 {
            answers.push(answer(i < 7, 2.0 + i as f64, if i < 7 { 100 } else { 0 }));
        }

        let stats = aggregate_session(&answers, QuizMode::Capitals, 700);
        assert_eq!(stats.total_questions, 10);
        assert_eq!(stats.correct_answers, 7);
        assert_eq!(stats.accuracy, 70.0);
        assert_eq!(stats.total_points, 700);
        assert_eq!(stats.average_time_per_question, 6.5);
        assert_eq!(stats.fastest_answer, 2.0);
    }

    #[test]
    fn aggregation_is_idempotent_up_to_the_timestamp() {
        let answers = vec![answer(true, 3.0, 125), answer(false, 8.0, 0)];
        let a = aggregate_session(&answers, QuizMode::Flags, 125);
        let b = aggregate_session(&answers, QuizMode::Flags, 125);

        assert_eq!(a.accuracy, b.accuracy);
        assert_eq!(a.correct_answers, b.correct_answers);
        assert_eq!(a.average_time_per_question, b.average_time_per_question);
        assert_eq!(a.fastest_answer, b.fastest_answer);
        assert_eq!(a.total_points, b.total_points);
    }

    #[test]
    fn empty_answer_list_defaults_to_zero() {
        let stats = aggregate_session(&[], QuizMode::Flags, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert_eq!(stats.fastest_answer, 0.0);
        assert_eq!(stats.average_time_per_question, 0.0);
    }
}
