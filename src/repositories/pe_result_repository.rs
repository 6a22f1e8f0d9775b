use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::PhysicalEducationResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeResultRepository: Send + Sync {
    async fn insert(&self, result: PhysicalEducationResult) -> AppResult<PhysicalEducationResult>;
    async fn find_by_user(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> AppResult<Vec<PhysicalEducationResult>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoPeResultRepository {
    collection: Collection<PhysicalEducationResult>,
}

impl MongoPeResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("pe_results");
        Self { collection }
    }
}

#[async_trait]
impl PeResultRepository for MongoPeResultRepository {
    async fn insert(&self, result: PhysicalEducationResult) -> AppResult<PhysicalEducationResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> AppResult<Vec<PhysicalEducationResult>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let results: Vec<PhysicalEducationResult> = cursor.try_collect().await?;

        Ok(results)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for pe_results collection");

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build();
        self.collection.create_index(user_index).await?;

        Ok(())
    }
}
