use super::catalog::{map_db_err, CatalogResource};
use super::db_data::genre;
use async_trait::async_trait;
use chrono::Utc;
use domain::error::CatalogError;
use domain::genre::{Genre, NewGenre};
use domain::payload::{FieldKind, FieldSpec};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub struct GenreResource;

#[async_trait]
impl CatalogResource for GenreResource {
    type Entity = genre::Entity;
    type ActiveModel = genre::ActiveModel;
    type Draft = NewGenre;
    type Aggregate = Genre;

    const RESOURCE: &'static str = "genre";
    const COLLECTION: &'static str = "genres";
    const DEFAULT_LIMIT: u64 = 25;
    const MAX_LIMIT: u64 = 100;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
        FIELDS
    }

    fn display_name(draft: &NewGenre) -> &str {
        &draft.name
    }

    fn id_column() -> genre::Column {
        genre::Column::Id
    }

    fn slug_column() -> genre::Column {
        genre::Column::NameSlug
    }

    async fn load(
        _db: &DatabaseConnection,
        model: genre::Model,
    ) -> Result<Genre, CatalogError> {
        Ok(model.into())
    }

    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: NewGenre,
    ) -> Result<genre::Model, CatalogError> {
        let now = Utc::now().naive_utc();
        genre::ActiveModel {
            id: Set(id),
            name: Set(draft.name),
            name_slug: Set(slug.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(map_db_err)
    }
}
