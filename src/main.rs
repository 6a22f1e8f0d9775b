use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use education_platform::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let jwt_service = state.jwt_service.clone();

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::register)
            .service(handlers::login)
            // Public taxonomy routes are registered before the guarded /api
            // scope so they match first.
            .service(handlers::get_subjects_topics)
            .service(handlers::get_topics)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .service(handlers::generate_test)
                    .service(handlers::get_tests)
                    .service(handlers::get_test)
                    .service(handlers::check_test)
                    .service(handlers::delete_test)
                    .service(handlers::get_dashboard)
                    .service(handlers::save_pe_result)
                    .service(handlers::get_pe_results),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
