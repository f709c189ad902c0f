use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use infra::config::AppConfig;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use migration::{Migrator, MigratorTrait};
use server::middleware::other;
use server::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cfg = AppConfig::load().expect("failed to load configuration");

    // log to console and file
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}",
        )))
        .build(&cfg.log_path)
        .expect("failed to open log file");
    let log_config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build(
            "stdout",
            Box::new(log4rs::append::console::ConsoleAppender::builder().build()),
        ))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )
        .expect("invalid log configuration");
    log4rs::init_config(log_config).expect("failed to initialize logging");

    let server_cfg = cfg.server.clone();
    let db = AppState::init_db(&cfg.database_url).await;
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let app_state = web::Data::new(AppState::new(db, cfg));
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(server::configure_service)
            .wrap(from_fn(other::require_json))
            .wrap(other::cors())
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
