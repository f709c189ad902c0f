use super::catalog::{map_db_err, CatalogResource};
use super::db_data::person;
use async_trait::async_trait;
use chrono::Utc;
use domain::error::CatalogError;
use domain::payload::{FieldKind, FieldSpec};
use domain::person::{NewPerson, Person};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub struct PersonResource;

#[async_trait]
impl CatalogResource for PersonResource {
    type Entity = person::Entity;
    type ActiveModel = person::ActiveModel;
    type Draft = NewPerson;
    type Aggregate = Person;

    const RESOURCE: &'static str = "person";
    const COLLECTION: &'static str = "people";
    const DEFAULT_LIMIT: u64 = 25;
    const MAX_LIMIT: u64 = 100;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
        FIELDS
    }

    fn display_name(draft: &NewPerson) -> &str {
        &draft.name
    }

    fn id_column() -> person::Column {
        person::Column::Id
    }

    fn slug_column() -> person::Column {
        person::Column::NameSlug
    }

    async fn load(
        _db: &DatabaseConnection,
        model: person::Model,
    ) -> Result<Person, CatalogError> {
        Ok(model.into())
    }

    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: NewPerson,
    ) -> Result<person::Model, CatalogError> {
        let now = Utc::now().naive_utc();
        person::ActiveModel {
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
