use std::sync::Arc;
use validator::Validate;

use crate::{
    constants::{self, prompts},
    errors::{AppError, AppResult},
    extraction::{self, ExplanationMarkerRepair, RepairStrategy},
    models::{
        domain::TestResult,
        dto::{
            request::{CheckTestRequest, GenerateTestRequest, GenerationMode},
            response::{
                CheckTestResponse, DeleteTestResponse, GenerateTestResponse, TestSummaryDto,
            },
        },
    },
    repositories::TestResultRepository,
    services::{chat_service::ChatCompletionGateway, grading::GradingService},
};

pub struct QuizService {
    test_results: Arc<dyn TestResultRepository>,
    chat: Arc<dyn ChatCompletionGateway>,
    repair: Box<dyn RepairStrategy>,
}

impl QuizService {
    pub fn new(
        test_results: Arc<dyn TestResultRepository>,
        chat: Arc<dyn ChatCompletionGateway>,
    ) -> Self {
        Self {
            test_results,
            chat,
            repair: Box::new(ExplanationMarkerRepair::default()),
        }
    }

    /// Swaps the answer-reconciliation heuristic.
    pub fn with_repair(mut self, repair: Box<dyn RepairStrategy>) -> Self {
        self.repair = repair;
        self
    }

    /// One synchronous unit of work: build the prompt, call the model, run
    /// the extractor, persist the validated test.
    pub async fn generate_test(
        &self,
        request: GenerateTestRequest,
        user_id: &str,
    ) -> AppResult<GenerateTestResponse> {
        request.validate()?;

        let (prompt, subject, topic) = match request.mode()? {
            GenerationMode::CustomText(text) => (
                prompts::custom_text_prompt(text, request.num_questions),
                constants::CUSTOM_TEXT_SUBJECT.to_string(),
                constants::CUSTOM_TEXT_TOPIC.to_string(),
            ),
            GenerationMode::SubjectTopic { subject, topic } => (
                prompts::subject_topic_prompt(subject, topic, request.num_questions),
                subject.to_string(),
                topic.to_string(),
            ),
        };

        let raw = self.chat.complete(&prompt).await?;
        log::debug!(
            "model returned {} characters of quiz output",
            raw.chars().count()
        );

        let payload = extraction::extract(&raw, request.num_questions, self.repair.as_ref())?;
        let questions_count = payload.questions.len();

        let test = self
            .test_results
            .insert(TestResult::new(user_id, &subject, &topic, payload))
            .await?;
        log::info!(
            "stored test {} with {} questions for user {}",
            test.id,
            questions_count,
            user_id
        );

        Ok(GenerateTestResponse {
            success: true,
            test_id: test.id,
            questions_count,
        })
    }

    pub async fn get_test(&self, id: &str, user_id: &str) -> AppResult<TestResult> {
        let test = self
            .test_results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Test with id '{}' not found", id)))?;

        if test.user_id != user_id {
            return Err(AppError::Forbidden("Access denied".to_string()));
        }

        Ok(test)
    }

    pub async fn list_tests(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> AppResult<Vec<TestSummaryDto>> {
        let tests = self.test_results.find_by_user(user_id, limit).await?;
        Ok(tests.iter().map(TestSummaryDto::from).collect())
    }

    pub async fn check_test(
        &self,
        id: &str,
        user_id: &str,
        request: CheckTestRequest,
    ) -> AppResult<CheckTestResponse> {
        let test = self.get_test(id, user_id).await?;

        let result = GradingService::score_attempt(&test.questions, &request.answers);
        self.test_results.set_score(&test.id, result.score).await?;

        Ok(CheckTestResponse {
            score: result.score,
            correct: result.correct,
            total: result.total,
        })
    }

    pub async fn delete_test(&self, id: &str, user_id: &str) -> AppResult<DeleteTestResponse> {
        if !self.test_results.delete(id, user_id).await? {
            return Err(AppError::NotFound("Test not found".to_string()));
        }
        Ok(DeleteTestResponse { success: true })
    }
}
