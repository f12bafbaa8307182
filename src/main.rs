use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use slide2learn_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;

    log::info!(
        "Starting Slide2Learn server on {}:{} (model {})",
        config.web_server_host,
        config.web_server_port,
        config.gemini_model
    );

    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::session_summary)
            .service(handlers::analyze_slides)
            .service(handlers::review_all)
            .service(handlers::generate_for_deck)
            .service(handlers::generate_for_slide)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
