use crate::operation::MathOperation;
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::debug;

/// Outcome of one answered question
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub question: MathOperation,
    pub answer: i64,
    pub correct: bool,
    pub elapsed: Duration,
    pub answered_at: DateTime<Local>,
}

impl Attempt {
    pub fn new(question: MathOperation, answer: i64, elapsed: Duration) -> Self {
        Self {
            question,
            answer,
            correct: question.evaluate(answer),
            elapsed,
            answered_at: Local::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub correct: usize,
    pub wrong: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.correct + self.wrong
    }
}

/// The session's player and their answers, oldest first
#[derive(Debug, Default)]
pub struct Player {
    history: Vec<Attempt>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attempt: Attempt) {
        debug!(
            question = %attempt.question,
            answer = attempt.answer,
            correct = attempt.correct,
            elapsed_ms = attempt.elapsed_ms() as u64,
            "recorded attempt"
        );
        self.history.push(attempt);
    }

    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    pub fn summarize(&self) -> Summary {
        self.history
            .iter()
            .fold(Summary::default(), |mut summary, attempt| {
                if attempt.correct {
                    summary.correct += 1;
                } else {
                    summary.wrong += 1;
                }
                summary
            })
    }
}
