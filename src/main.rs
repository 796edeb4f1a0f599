use actix_web::{middleware::Logger, web, App, HttpServer};

use quizio_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(&config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .wrap(handlers::cors())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
