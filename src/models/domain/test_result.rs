use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{QuestionRecord, QuizPayload};

/// A stored quiz generated for one user. `score` stays `None` until the
/// attempt is graded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestResult {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub topic: String,
    pub questions: Vec<QuestionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TestResult {
    pub fn new(user_id: &str, subject: &str, topic: &str, payload: QuizPayload) -> Self {
        TestResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            questions: payload.questions,
            score: None,
            created_at: Some(Utc::now()),
        }
    }
}
