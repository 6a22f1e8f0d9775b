use std::collections::HashMap;

use crate::models::domain::QuestionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptScore {
    pub score: i32,
    pub correct: usize,
    pub total: usize,
}

pub struct GradingService;

impl GradingService {
    /// Percentage score rounded to the nearest integer, ties to even.
    /// Answers are keyed by question position; unanswered or mismatched
    /// indices count as wrong.
    pub fn score_attempt(
        questions: &[QuestionRecord],
        answers: &HashMap<String, usize>,
    ) -> AttemptScore {
        let total = questions.len();
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(index, question)| answers.get(&index.to_string()) == Some(&question.correct))
            .count();

        let score = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round_ties_even() as i32
        };

        AttemptScore {
            score,
            correct,
            total,
        }
    }
}
