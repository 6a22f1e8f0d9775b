use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::TestResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestResultRepository: Send + Sync {
    async fn insert(&self, test: TestResult) -> AppResult<TestResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestResult>>;
    async fn find_by_user(&self, user_id: &str, limit: Option<i64>) -> AppResult<Vec<TestResult>>;
    async fn set_score(&self, id: &str, score: i32) -> AppResult<()>;
    /// Deletes the test only when it belongs to `user_id`; returns whether a
    /// document was removed.
    async fn delete(&self, id: &str, user_id: &str) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTestResultRepository {
    collection: Collection<TestResult>,
}

impl MongoTestResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("test_results");
        Self { collection }
    }
}

#[async_trait]
impl TestResultRepository for MongoTestResultRepository {
    async fn insert(&self, test: TestResult) -> AppResult<TestResult> {
        self.collection.insert_one(&test).await?;
        Ok(test)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestResult>> {
        let test = self.collection.find_one(doc! { "id": id }).await?;
        Ok(test)
    }

    async fn find_by_user(&self, user_id: &str, limit: Option<i64>) -> AppResult<Vec<TestResult>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let tests: Vec<TestResult> = cursor.try_collect().await?;

        Ok(tests)
    }

    async fn set_score(&self, id: &str, score: i32) -> AppResult<()> {
        self.collection
            .update_one(doc! { "id": id }, doc! { "$set": { "score": score } })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "id": id, "user_id": user_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for test_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build();
        self.collection.create_index(user_index).await?;

        Ok(())
    }
}
