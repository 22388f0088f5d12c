use actix_web::{App, HttpServer, web};
use actix_cors::Cors;
use log::info;
use dotenv::dotenv;
use signature_studio::config::{ServerConfig, DEFAULT_LOG_LEVEL};
use signature_studio::routes;
use signature_studio::services::SimulatorService;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().filter_or("LOG_LEVEL", DEFAULT_LOG_LEVEL));

    let config = ServerConfig::load()?;

    let simulator = web::Data::new(SimulatorService::new(config.max_sessions));
    info!("Simulator accepts up to {} sessions", config.max_sessions);

    info!("Starting server at http://{}:{}", config.host, config.port);

    let cors_max_age = config.cors_max_age;
    HttpServer::new(move || {
        // Configure CORS middleware
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_headers(vec!["content-type", "content-length", "accept"])
            .max_age(cors_max_age);

        App::new()
            .wrap(cors)
            .app_data(simulator.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server shutting down");
    Ok(())
}
