use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{PhysicalEducationResult, TestResult, User};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateTestResponse {
    pub success: bool,
    pub test_id: String,
    pub questions_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckTestResponse {
    pub score: i32,
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTestResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavePeResultResponse {
    pub status: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

/// Listing entry for a stored test; the full question set is only returned
/// by the single-test endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TestSummaryDto {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub questions_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&TestResult> for TestSummaryDto {
    fn from(test: &TestResult) -> Self {
        TestSummaryDto {
            id: test.id.clone(),
            subject: test.subject.clone(),
            topic: test.topic.clone(),
            questions_count: test.questions.len(),
            score: test.score,
            created_at: test.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub tests: Vec<TestSummaryDto>,
    pub pe_results: Vec<PhysicalEducationResult>,
}
