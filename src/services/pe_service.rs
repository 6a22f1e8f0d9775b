use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::PhysicalEducationResult,
        dto::{request::SavePeResultRequest, response::SavePeResultResponse},
    },
    repositories::PeResultRepository,
};

pub struct PeService {
    results: Arc<dyn PeResultRepository>,
}

impl PeService {
    pub fn new(results: Arc<dyn PeResultRepository>) -> Self {
        Self { results }
    }

    pub async fn save_result(
        &self,
        user_id: &str,
        request: SavePeResultRequest,
    ) -> AppResult<SavePeResultResponse> {
        request.validate()?;

        let result = self
            .results
            .insert(PhysicalEducationResult::new(
                user_id,
                &request.exercise_type,
                request.repetitions,
                request.correct_count,
                request.incorrect_count,
                request.errors,
                request.score,
            ))
            .await?;

        Ok(SavePeResultResponse {
            status: "success".to_string(),
            id: result.id,
        })
    }

    pub async fn recent_results(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> AppResult<Vec<PhysicalEducationResult>> {
        self.results.find_by_user(user_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError, repositories::pe_result_repository::MockPeResultRepository,
    };

    fn save_request() -> SavePeResultRequest {
        SavePeResultRequest {
            exercise_type: "pushup".to_string(),
            repetitions: 20,
            correct_count: 18,
            incorrect_count: 2,
            errors: vec!["elbow angle too wide".to_string()],
            score: 90,
        }
    }

    #[tokio::test]
    async fn save_result_persists_and_reports_id() {
        let mut repo = MockPeResultRepository::new();
        repo.expect_insert()
            .withf(|result| result.user_id == "user-1" && result.exercise_type == "pushup")
            .times(1)
            .returning(Ok);

        let service = PeService::new(Arc::new(repo));
        let response = service
            .save_result("user-1", save_request())
            .await
            .expect("save should succeed");

        assert_eq!(response.status, "success");
        assert!(!response.id.is_empty());
    }

    #[tokio::test]
    async fn save_result_rejects_empty_exercise_type() {
        let repo = MockPeResultRepository::new();
        let service = PeService::new(Arc::new(repo));

        let mut request = save_request();
        request.exercise_type = String::new();

        let result = service.save_result("user-1", request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
