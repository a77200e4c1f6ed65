use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use secrecy::ExposeSecret;

use quizgen_server::{
    app_state::AppState,
    config::Config,
    handlers::{self, json_config, multipart_config, temp_file_config},
    middleware::RequestIdMiddleware,
};

const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms request_id=%{x-request-id}o"#;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    if config.debug {
        log::info!(
            "Loaded API key: {} (length: {})",
            config.masked_api_key(),
            config.gemini_api_key.expose_secret().len()
        );
    }

    std::fs::create_dir_all(&config.upload_dir)?;

    let state = match AppState::new(config.clone()).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialise classifier: {}", e);
            std::process::exit(1);
        }
    };

    let (host, port) = config.bind_address();
    log::info!("Starting quiz generator on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = config
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .app_data(multipart_config(&config))
            .app_data(temp_file_config(&config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .wrap(cors)
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
