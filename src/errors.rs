use thiserror::Error;

use crate::models::QuizMode;

#[derive(Error, Debug)]
pub enum QuizError {
    /// The eligible pool cannot support the requested question count.
    #[error("not enough countries for {mode} mode: {eligible} eligible, need at least {required}")]
    InsufficientData {
        mode: QuizMode,
        eligible: usize,
        required: usize,
    },

    /// An answer was submitted after the last question.
    #[error("session is already complete")]
    SessionComplete,
}
