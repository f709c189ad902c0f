use crate::error::ApiError;
use crate::middleware::bearer_auth::BearerAuth;
use crate::response;
use crate::AppState;
use actix_web::{guard, web, HttpResponse, Scope};
use domain::error::CatalogError;
use domain::ident::Ident;
use domain::page::Window;
use domain::payload::{self, FieldKind};
use domain::report::ErrorReporter;
use domain::slug::slugify;
use infra::repository::postgres::catalog::{CatalogRepository, CatalogResource};
use infra::repository::postgres::{
    AlbumResource, GenreResource, LabelResource, PersonResource, SongResource,
};
use log::info;
use sea_orm::{EntityTrait, IntoActiveModel};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::marker::PhantomData;

/// Ties a catalog resource to its wire representation.
pub trait ApiResource: CatalogResource {
    type Response: Serialize + From<Self::Aggregate>;
}

impl ApiResource for GenreResource {
    type Response = response::GenreResponse;
}

impl ApiResource for PersonResource {
    type Response = response::PersonResponse;
}

impl ApiResource for LabelResource {
    type Response = response::LabelResponse;
}

impl ApiResource for AlbumResource {
    type Response = response::AlbumResponse;
}

impl ApiResource for SongResource {
    type Response = response::SongResponse;
}

/// Raw pagination input. Kept as strings so junk values degrade to
/// defaults instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    offset: Option<String>,
    limit: Option<String>,
}

/// Generic controller instantiated once per resource. All five
/// collections run the exact same four handlers; what varies is
/// declared on the resource impl (codes, limits, fields, loaders).
pub struct ResourceApi<R> {
    _marker: PhantomData<R>,
}

impl<R> ResourceApi<R>
where
    R: ApiResource,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::ActiveModel>,
{
    async fn list(
        state: web::Data<AppState>,
        query: web::Query<PageQuery>,
    ) -> Result<HttpResponse, ApiError> {
        let window = Window::resolve(
            query.offset.as_deref(),
            query.limit.as_deref(),
            R::DEFAULT_LIMIT,
            R::MAX_LIMIT,
        );
        let repo = CatalogRepository::<R>::new(state.db.clone());
        let (items, total) = repo.list(&window).await.map_err(|err| {
            state.reporter.capture(R::COLLECTION, &err);
            ApiError::Internal("unknown_error".to_string())
        })?;
        let mapped: Vec<R::Response> = items.into_iter().map(R::Response::from).collect();
        let count = mapped.len();
        Ok(HttpResponse::Ok().json(json!({
            (R::COLLECTION): mapped,
            "start": window.start,
            "count": count,
            "total": total,
        })))
    }

    async fn retrieve(
        state: web::Data<AppState>,
        path: web::Path<String>,
    ) -> Result<HttpResponse, ApiError> {
        let ident = Ident::resolve(&path.into_inner());
        let repo = CatalogRepository::<R>::new(state.db.clone());
        match repo.find_by_ident(&ident).await {
            Ok(Some(found)) => Ok(HttpResponse::Ok().json(R::Response::from(found))),
            Ok(None) => Err(ApiError::not_found(R::RESOURCE)),
            Err(err) => {
                state.reporter.capture(R::RESOURCE, &err);
                Err(ApiError::Internal("unknown_error".to_string()))
            }
        }
    }

    async fn create(
        state: web::Data<AppState>,
        body: web::Bytes,
    ) -> Result<HttpResponse, ApiError> {
        let draft: R::Draft = payload::decode(&body, R::fields())?;

        let slug = slugify(R::display_name(&draft));
        if slug.is_empty() {
            // a display name of pure punctuation slugs to nothing
            let field = R::fields()
                .iter()
                .find(|f| f.required && f.kind == FieldKind::Text)
                .map(|f| f.name)
                .unwrap_or("name");
            return Err(ApiError::BadRequest {
                code: "invalid_payload",
                details: Some(json!({ (field): "must_not_be_empty" })),
            });
        }

        let repo = CatalogRepository::<R>::new(state.db.clone());
        let taken = repo.slug_taken(&slug).await.map_err(|err| {
            state.reporter.capture(R::RESOURCE, &err);
            ApiError::create_failed(R::RESOURCE)
        })?;
        if taken {
            return Err(ApiError::already_exists(R::RESOURCE));
        }

        let id = state.id_generator.next_id().await.map_err(|err| {
            state.reporter.capture(R::RESOURCE, &err);
            ApiError::create_failed(R::RESOURCE)
        })?;

        match repo.create(id, &slug, draft).await {
            Ok(created) => Ok(HttpResponse::Created().json(R::Response::from(created))),
            Err(err) => Err(Self::create_failure(state.reporter.as_ref(), err)),
        }
    }

    /// Maps an insert failure to its wire error. A unique-index
    /// violation means the pre-check lost the race to a concurrent
    /// create, so it answers exactly like the friendly path.
    fn create_failure(reporter: &dyn ErrorReporter, err: CatalogError) -> ApiError {
        match err {
            CatalogError::Conflict(_) => ApiError::already_exists(R::RESOURCE),
            CatalogError::Validation(field) => ApiError::unknown_reference(&field),
            err => {
                reporter.capture(R::RESOURCE, &err);
                ApiError::create_failed(R::RESOURCE)
            }
        }
    }

    async fn delete(
        state: web::Data<AppState>,
        path: web::Path<String>,
    ) -> Result<HttpResponse, ApiError> {
        let ident = Ident::resolve(&path.into_inner());
        let repo = CatalogRepository::<R>::new(state.db.clone());
        match repo.delete_by_ident(&ident).await {
            Ok(true) => Ok(HttpResponse::NoContent().finish()),
            Ok(false) => Err(ApiError::not_found(R::RESOURCE)),
            Err(err) => {
                state.reporter.capture(R::RESOURCE, &err);
                Err(ApiError::delete_failed(R::RESOURCE))
            }
        }
    }

    /// Mounts the collection under `/<collection>`. Mutating resources
    /// are registered first with method guards so only they carry the
    /// bearer gate.
    pub fn mount() -> Scope {
        info!("http config for /{}", R::COLLECTION);
        web::scope(&format!("/{}", R::COLLECTION))
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .route(web::post().to(Self::create))
                    .wrap(BearerAuth),
            )
            .service(web::resource("").route(web::get().to(Self::list)))
            .service(
                web::resource("/{ident}")
                    .guard(guard::Delete())
                    .route(web::delete().to(Self::delete))
                    .wrap(BearerAuth),
            )
            .service(web::resource("/{ident}").route(web::get().to(Self::retrieve)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::other;
    use actix_web::http::{header, StatusCode};
    use actix_web::middleware::from_fn;
    use actix_web::{test, App};
    use domain::auth::TokenService;
    use infra::auth::JwtTokenService;
    use infra::config::AppConfig;
    use infra::repository::postgres::db_data::{genre, label};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn genre_row() -> genre::Model {
        genre::Model {
            id: 7,
            name: "Pop".to_string(),
            name_slug: "pop".to_string(),
            ..Default::default()
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn state(db: DatabaseConnection) -> web::Data<AppState> {
        web::Data::new(AppState::new(db, AppConfig::default()))
    }

    fn bearer() -> (header::HeaderName, String) {
        let cfg = AppConfig::default();
        let token_svc = JwtTokenService::new(cfg.jwt_secret(), 3600);
        (
            header::AUTHORIZATION,
            format!("Bearer {}", token_svc.issue("tests").unwrap()),
        )
    }

    macro_rules! test_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(state($db))
                    .wrap(from_fn(other::require_json))
                    .configure(crate::configure_service),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_genre_returns_created_entity() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_query_results([vec![genre_row()]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/genres")
            .insert_header(bearer())
            .set_json(json!({ "name": "Pop" }))
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["name"], "Pop");
        assert_eq!(body["name_slug"], "pop");
        assert_eq!(body["id"], 7);
    }

    #[actix_web::test]
    async fn test_duplicate_slug_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/genres")
            .insert_header(bearer())
            .set_json(json!({ "name": "Pop" }))
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "genre_already_exists");
    }

    #[actix_web::test]
    async fn test_race_losing_create_conflicts() {
        use actix_web::error::ResponseError;
        use infra::reporter::LogReporter;

        // two writers pass the slug pre-check, the second insert trips
        // the unique index and must answer like a plain duplicate
        let err = CatalogError::Conflict(
            "duplicate key value violates unique constraint \"idx_genre_name_slug\"".to_string(),
        );
        let api = ResourceApi::<GenreResource>::create_failure(&LogReporter, err);
        assert_eq!(api.status_code(), StatusCode::CONFLICT);
        assert_eq!(api.to_string(), "genre_already_exists");

        let api = ResourceApi::<GenreResource>::create_failure(
            &LogReporter,
            CatalogError::Db("connection reset".to_string()),
        );
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.to_string(), "unknown_error_creating_genre");
    }

    #[actix_web::test]
    async fn test_mutations_require_token() {
        // no query results queued: the handler must never reach the db
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let post = test::TestRequest::post()
            .uri("/v1/genres")
            .set_json(json!({ "name": "Pop" }))
            .to_request();
        let rsp = test::call_service(&app, post).await;
        assert_eq!(rsp.status(), StatusCode::UNAUTHORIZED);

        let delete = test::TestRequest::delete()
            .uri("/v1/genres/pop")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let rsp = test::call_service(&app, delete).await;
        assert_eq!(rsp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_reads_stay_open() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![genre_row()]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::get().uri("/v1/genres/pop").to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_retrieve_by_id_and_slug_agree() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![genre_row()]])
            .append_query_results([vec![genre_row()]])
            .into_connection();
        let app = test_app!(db);

        let by_id = test::TestRequest::get().uri("/v1/genres/7").to_request();
        let by_id: serde_json::Value =
            test::read_body_json(test::call_service(&app, by_id).await).await;

        let by_slug = test::TestRequest::get().uri("/v1/genres/pop").to_request();
        let by_slug: serde_json::Value =
            test::read_body_json(test::call_service(&app, by_slug).await).await;

        assert_eq!(by_id, by_slug);
    }

    #[actix_web::test]
    async fn test_retrieve_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<genre::Model>::new()])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::get()
            .uri("/v1/genres/shoegaze")
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "genre_not_found");
    }

    #[actix_web::test]
    async fn test_delete_removes_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![genre_row()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::delete()
            .uri("/v1/genres/pop")
            .insert_header(bearer())
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<genre::Model>::new()])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::delete()
            .uri("/v1/genres/808")
            .insert_header(bearer())
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "genre_not_found");
    }

    #[actix_web::test]
    async fn test_list_envelope() {
        let second = genre::Model {
            id: 8,
            name: "Soul".to_string(),
            name_slug: "soul".to_string(),
            ..Default::default()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .append_query_results([vec![genre_row(), second]])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::get()
            .uri("/v1/genres?limit=2")
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["genres"].as_array().unwrap().len(), 2);
        assert_eq!(body["start"], 0);
        assert_eq!(body["count"], 2);
        assert_eq!(body["total"], 3);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_invalid_json() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/genres")
            .insert_header(bearer())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "invalid_json");
    }

    #[actix_web::test]
    async fn test_field_violations_are_detailed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/genres")
            .insert_header(bearer())
            .set_json(json!({ "name": 7 }))
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "invalid_payload");
        assert_eq!(body["details"]["name"], "must_be_text");
    }

    #[actix_web::test]
    async fn test_empty_lyric_verse_named_in_details() {
        // decode fails before the handler touches the db
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/songs")
            .insert_header(bearer())
            .set_json(json!({ "title": "Halo", "album_id": 1, "lyrics": [{}] }))
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["error"], "invalid_payload");
        assert_eq!(body["details"]["text"], "required");
    }

    #[actix_web::test]
    async fn test_unknown_label_reference_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_query_results([Vec::<label::Model>::new()])
            .into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/albums")
            .insert_header(bearer())
            .set_json(json!({ "name": "Lemonade", "label_id": 5 }))
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(rsp).await;
        assert_eq!(body["details"]["label_id"], "unknown");
    }

    #[actix_web::test]
    async fn test_non_json_body_unsupported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/v1/genres")
            .insert_header(bearer())
            .insert_header((header::CONTENT_TYPE, "text/xml"))
            .set_payload("<genre/>")
            .to_request();
        let rsp = test::call_service(&app, req).await;
        assert_eq!(rsp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
