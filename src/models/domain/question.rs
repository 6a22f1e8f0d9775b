use serde::{Deserialize, Serialize};

/// Every generated question carries exactly this many answer options. The
/// prompt templates and the extractor share this constant.
pub const OPTION_COUNT: usize = 4;

/// One validated multiple-choice question.
///
/// Invariant: `options.len() == OPTION_COUNT` and `correct < OPTION_COUNT`.
/// Records are only constructed by the extractor, which enforces both.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// The validated output of one generation request. Never mutated after
/// extraction; the grading service only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizPayload {
    pub questions: Vec<QuestionRecord>,
}
