use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded physical-education exercise session, as reported by the
/// in-browser exercise tracker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhysicalEducationResult {
    pub id: String,
    pub user_id: String,
    pub exercise_type: String,
    pub repetitions: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub errors: Vec<String>,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PhysicalEducationResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        exercise_type: &str,
        repetitions: i32,
        correct_count: i32,
        incorrect_count: i32,
        errors: Vec<String>,
        score: i32,
    ) -> Self {
        PhysicalEducationResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            exercise_type: exercise_type.to_string(),
            repetitions,
            correct_count,
            incorrect_count,
            errors,
            score,
            created_at: Some(Utc::now()),
        }
    }
}
