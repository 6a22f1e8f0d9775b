use std::path::Path;
use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoPeResultRepository, MongoTestResultRepository, MongoUserRepository,
        PeResultRepository, TestResultRepository, UserRepository,
    },
    services::{
        chat_service::HttpChatGateway, pe_service::PeService, quiz_service::QuizService,
        taxonomy::SubjectTaxonomy, user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub pe_service: Arc<PeService>,
    pub taxonomy: Arc<SubjectTaxonomy>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(
            user_repository,
            jwt_service.clone(),
        ));

        let test_result_repository = Arc::new(MongoTestResultRepository::new(&db));
        test_result_repository.ensure_indexes().await?;
        let chat_gateway = Arc::new(HttpChatGateway::new(&config));
        let quiz_service = Arc::new(QuizService::new(test_result_repository, chat_gateway));

        let pe_repository = Arc::new(MongoPeResultRepository::new(&db));
        pe_repository.ensure_indexes().await?;
        let pe_service = Arc::new(PeService::new(pe_repository));

        let taxonomy = Arc::new(SubjectTaxonomy::load(Path::new(
            &config.subjects_topics_path,
        ))?);

        Ok(Self {
            user_service,
            quiz_service,
            pe_service,
            taxonomy,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
