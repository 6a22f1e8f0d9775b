use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::TopicsResponse};

#[get("/api/subjects-topics")]
pub async fn get_subjects_topics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.taxonomy.subjects()))
}

#[get("/api/topics/{subject}")]
pub async fn get_topics(
    state: web::Data<AppState>,
    subject: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let topics = state.taxonomy.topics_for(&subject).to_vec();
    Ok(HttpResponse::Ok().json(TopicsResponse { topics }))
}
