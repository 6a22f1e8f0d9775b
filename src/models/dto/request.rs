use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_NUM_QUESTIONS: usize = 10;

fn default_num_questions() -> usize {
    DEFAULT_NUM_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTestRequest {
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub custom_text: Option<String>,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 30))]
    pub num_questions: usize,
}

/// Which of the two generation modes a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode<'a> {
    CustomText(&'a str),
    SubjectTopic { subject: &'a str, topic: &'a str },
}

impl GenerateTestRequest {
    /// Exactly one mode is active per request; non-empty pasted text wins.
    pub fn mode(&self) -> AppResult<GenerationMode<'_>> {
        if let Some(text) = self.custom_text.as_deref() {
            if !text.trim().is_empty() {
                return Ok(GenerationMode::CustomText(text));
            }
        }

        match (self.subject.as_deref(), self.topic.as_deref()) {
            (Some(subject), Some(topic))
                if !subject.trim().is_empty() && !topic.trim().is_empty() =>
            {
                Ok(GenerationMode::SubjectTopic { subject, topic })
            }
            _ => Err(AppError::ValidationError(
                "Either custom_text or both subject and topic must be provided".to_string(),
            )),
        }
    }
}

/// Submitted answers keyed by the question's position in the stored test,
/// as a string ("0", "1", ...) to match the client's JSON object keys.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckTestRequest {
    #[serde(default)]
    pub answers: HashMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SavePeResultRequest {
    #[validate(length(min = 1, max = 100))]
    pub exercise_type: String,

    #[serde(default)]
    pub repetitions: i32,

    #[serde(default)]
    pub correct_count: i32,

    #[serde(default)]
    pub incorrect_count: i32,

    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default)]
    pub score: i32,
}
