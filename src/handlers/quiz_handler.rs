use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{CheckTestRequest, GenerateTestRequest},
        response::DashboardResponse,
    },
};

const DASHBOARD_LIMIT: i64 = 10;

#[post("/generate-test")]
pub async fn generate_test(
    state: web::Data<AppState>,
    request: web::Json<GenerateTestRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .generate_test(request.into_inner(), &auth.0.sub)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/tests")]
pub async fn get_tests(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let tests = state.quiz_service.list_tests(&auth.0.sub, None).await?;
    Ok(HttpResponse::Ok().json(tests))
}

#[get("/test/{id}")]
pub async fn get_test(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let test = state.quiz_service.get_test(&id, &auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(test))
}

#[post("/test/{id}/check")]
pub async fn check_test(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CheckTestRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .check_test(&id, &auth.0.sub, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/test/{id}")]
pub async fn delete_test(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.delete_test(&id, &auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/dashboard")]
pub async fn get_dashboard(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let tests = state
        .quiz_service
        .list_tests(&auth.0.sub, Some(DASHBOARD_LIMIT))
        .await?;
    let pe_results = state
        .pe_service
        .recent_results(&auth.0.sub, Some(DASHBOARD_LIMIT))
        .await?;

    Ok(HttpResponse::Ok().json(DashboardResponse { tests, pe_results }))
}
