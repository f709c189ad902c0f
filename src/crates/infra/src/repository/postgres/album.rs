use super::catalog::{map_db_err, CatalogResource};
use super::db_data::{album, label, song};
use async_trait::async_trait;
use chrono::Utc;
use domain::album::{Album, NewAlbum};
use domain::error::CatalogError;
use domain::payload::{FieldKind, FieldSpec};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

pub struct AlbumResource;

#[async_trait]
impl CatalogResource for AlbumResource {
    type Entity = album::Entity;
    type ActiveModel = album::ActiveModel;
    type Draft = NewAlbum;
    type Aggregate = Album;

    const RESOURCE: &'static str = "album";
    const COLLECTION: &'static str = "albums";
    const DEFAULT_LIMIT: u64 = 10;
    const MAX_LIMIT: u64 = 50;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional("released_at", FieldKind::Date),
            FieldSpec::optional("label_id", FieldKind::Integer),
        ];
        FIELDS
    }

    fn display_name(draft: &NewAlbum) -> &str {
        &draft.name
    }

    fn id_column() -> album::Column {
        album::Column::Id
    }

    fn slug_column() -> album::Column {
        album::Column::NameSlug
    }

    async fn load(db: &DatabaseConnection, model: album::Model) -> Result<Album, CatalogError> {
        let label = match model.label_id {
            Some(_) => model
                .find_related(label::Entity)
                .one(db)
                .await
                .map_err(map_db_err)?
                .map(Into::into),
            None => None,
        };
        let songs = model
            .find_related(song::Entity)
            .order_by_asc(song::Column::Index)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let mut album = Album::from(model);
        album.label = label;
        album.songs = songs;
        Ok(album)
    }

    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: NewAlbum,
    ) -> Result<album::Model, CatalogError> {
        if let Some(label_id) = draft.label_id {
            let known = label::Entity::find()
                .filter(label::Column::Id.eq(label_id))
                .one(db)
                .await
                .map_err(map_db_err)?;
            if known.is_none() {
                return Err(CatalogError::Validation("label_id".to_string()));
            }
        }
        let now = Utc::now().naive_utc();
        album::ActiveModel {
            id: Set(id),
            name: Set(draft.name),
            name_slug: Set(slug.to_owned()),
            released_at: Set(draft.released_at),
            label_id: Set(draft.label_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(map_db_err)
    }
}
