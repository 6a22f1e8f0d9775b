use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::SavePeResultRequest,
};

#[post("/save-pe-result")]
pub async fn save_pe_result(
    state: web::Data<AppState>,
    request: web::Json<SavePeResultRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .pe_service
        .save_result(&auth.0.sub, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/pe-results")]
pub async fn get_pe_results(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let results = state.pe_service.recent_results(&auth.0.sub, None).await?;
    Ok(HttpResponse::Ok().json(results))
}
