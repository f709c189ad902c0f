use super::catalog::{map_db_err, CatalogResource};
use super::db_data::label;
use async_trait::async_trait;
use chrono::Utc;
use domain::error::CatalogError;
use domain::label::{Label, NewLabel};
use domain::payload::{FieldKind, FieldSpec};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub struct LabelResource;

#[async_trait]
impl CatalogResource for LabelResource {
    type Entity = label::Entity;
    type ActiveModel = label::ActiveModel;
    type Draft = NewLabel;
    type Aggregate = Label;

    const RESOURCE: &'static str = "label";
    const COLLECTION: &'static str = "labels";
    const DEFAULT_LIMIT: u64 = 25;
    const MAX_LIMIT: u64 = 100;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
        FIELDS
    }

    fn display_name(draft: &NewLabel) -> &str {
        &draft.name
    }

    fn id_column() -> label::Column {
        label::Column::Id
    }

    fn slug_column() -> label::Column {
        label::Column::NameSlug
    }

    async fn load(
        _db: &DatabaseConnection,
        model: label::Model,
    ) -> Result<Label, CatalogError> {
        Ok(model.into())
    }

    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: NewLabel,
    ) -> Result<label::Model, CatalogError> {
        let now = Utc::now().naive_utc();
        label::ActiveModel {
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
