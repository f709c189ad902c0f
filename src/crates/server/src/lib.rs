pub mod consts;
pub mod error;
pub mod middleware;
pub mod resource;
pub mod response;

use crate::resource::ResourceApi;
use actix_web::web;
use domain::id::IdGenerator;
use domain::report::ErrorReporter;
use infra::config::AppConfig;
use infra::id_generator::SnowflakeIdGenerator;
use infra::reporter::LogReporter;
use infra::repository::postgres::{
    AlbumResource, GenreResource, LabelResource, PersonResource, SongResource,
};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::sync::Arc;

pub struct AppState {
    pub app_cfg: AppConfig,
    pub db: DatabaseConnection,
    pub id_generator: Arc<dyn IdGenerator>,
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, app_cfg: AppConfig) -> Self {
        let id_generator: Arc<dyn IdGenerator> =
            Arc::new(SnowflakeIdGenerator::new(1).expect("snowflake node id out of range"));
        Self {
            app_cfg,
            db,
            id_generator,
            reporter: Arc::new(LogReporter),
        }
    }

    pub async fn init_db(db_url: &str) -> DatabaseConnection {
        use std::time::Duration;

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(90)
            .min_connections(20)
            .connect_timeout(Duration::from_secs(3))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(300))
            .sqlx_logging(false)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        let backend = DbBackend::Postgres;
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await
            .expect("Failed to execute test query");

        info!("Database connection pool initialized successfully");
        db
    }
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::scope(consts::URL_PATH_API)
            .service(ResourceApi::<GenreResource>::mount())
            .service(ResourceApi::<PersonResource>::mount())
            .service(ResourceApi::<LabelResource>::mount())
            .service(ResourceApi::<AlbumResource>::mount())
            .service(ResourceApi::<SongResource>::mount()),
    );
}
