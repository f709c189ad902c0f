use async_trait::async_trait;
use domain::error::CatalogError;
use domain::ident::Ident;
use domain::page::Window;
use domain::payload::FieldSpec;
use sea_orm::*;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Translates persistence failures into the shared taxonomy. Unique
/// index violations become `Conflict` so a losing side of the
/// check-then-insert race still surfaces as 409 instead of 500.
pub fn map_db_err(err: DbErr) -> CatalogError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => CatalogError::Conflict(msg),
        _ => CatalogError::Db(err.to_string()),
    }
}

/// Capability set one catalog resource plugs into the generic
/// repository and controller: entity, draft and aggregate types plus
/// explicit per-resource configuration (codes, limits, declared
/// payload fields, identifier columns) and the relation-aware loader
/// and inserter.
#[async_trait]
pub trait CatalogResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model: Send + Sync>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    type Draft: DeserializeOwned + Send + 'static;
    type Aggregate: Send + Sync;

    /// Singular code used in error identifiers ("genre").
    const RESOURCE: &'static str;
    /// Collection segment and envelope key ("genres").
    const COLLECTION: &'static str;
    const DEFAULT_LIMIT: u64;
    const MAX_LIMIT: u64;

    fn fields() -> &'static [FieldSpec];
    /// Display name the slug is derived from.
    fn display_name(draft: &Self::Draft) -> &str;
    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn slug_column() -> <Self::Entity as EntityTrait>::Column;

    /// Loads the aggregate for a fetched row, relations included.
    async fn load(
        db: &DatabaseConnection,
        model: <Self::Entity as EntityTrait>::Model,
    ) -> Result<Self::Aggregate, CatalogError>;

    /// Persists a draft under the generated id and derived slug,
    /// including owned children and association rows.
    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: Self::Draft,
    ) -> Result<<Self::Entity as EntityTrait>::Model, CatalogError>;
}

pub struct CatalogRepository<R> {
    db: DatabaseConnection,
    _marker: PhantomData<R>,
}

impl<R> CatalogRepository<R>
where
    R: CatalogResource,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::ActiveModel>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    pub async fn list(&self, window: &Window) -> Result<(Vec<R::Aggregate>, u64), CatalogError> {
        let total = R::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        let rows = R::Entity::find()
            .order_by_asc(R::id_column())
            .offset(window.start)
            .limit(window.count)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(R::load(&self.db, row).await?);
        }
        Ok((items, total))
    }

    pub async fn find_by_ident(
        &self,
        ident: &Ident,
    ) -> Result<Option<R::Aggregate>, CatalogError> {
        match self.find_model(ident).await? {
            Some(model) => Ok(Some(R::load(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    pub async fn slug_taken(&self, slug: &str) -> Result<bool, CatalogError> {
        let matches = R::Entity::find()
            .filter(R::slug_column().eq(slug))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(matches > 0)
    }

    pub async fn create(
        &self,
        id: i64,
        slug: &str,
        draft: R::Draft,
    ) -> Result<R::Aggregate, CatalogError> {
        let model = R::insert(&self.db, id, slug, draft).await?;
        R::load(&self.db, model).await
    }

    /// Hard delete. Returns `false` when no row matched the ident.
    pub async fn delete_by_ident(&self, ident: &Ident) -> Result<bool, CatalogError> {
        match self.find_model(ident).await? {
            Some(model) => {
                model.delete(&self.db).await.map_err(map_db_err)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_model(
        &self,
        ident: &Ident,
    ) -> Result<Option<<R::Entity as EntityTrait>::Model>, CatalogError> {
        let predicate = match ident {
            Ident::Id(id) => R::id_column().eq(*id),
            Ident::Slug(slug) => R::slug_column().eq(slug.as_str()),
        };
        R::Entity::find()
            .filter(predicate)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::postgres::db_data::genre;
    use crate::repository::postgres::GenreResource;
    use std::collections::BTreeMap;

    fn pop_row() -> genre::Model {
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

    #[tokio::test]
    async fn test_find_by_slug_loads_aggregate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pop_row()]])
            .into_connection();
        let repo = CatalogRepository::<GenreResource>::new(db);

        let found = repo
            .find_by_ident(&Ident::Slug("pop".to_string()))
            .await
            .unwrap()
            .expect("genre should be found");
        assert_eq!(found.name_slug, "pop");
        assert_eq!(found.id.as_i64(), 7);
    }

    #[tokio::test]
    async fn test_find_by_ident_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<genre::Model>::new()])
            .into_connection();
        let repo = CatalogRepository::<GenreResource>::new(db);

        assert!(repo.find_by_ident(&Ident::Id(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slug_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)]])
            .append_query_results([vec![count_row(0)]])
            .into_connection();
        let repo = CatalogRepository::<GenreResource>::new(db);

        assert!(repo.slug_taken("pop").await.unwrap());
        assert!(!repo.slug_taken("shoegaze").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_returns_window_and_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(12)]])
            .append_query_results([vec![pop_row()]])
            .into_connection();
        let repo = CatalogRepository::<GenreResource>::new(db);

        let (items, total) = repo
            .list(&Window { start: 0, count: 1 })
            .await
            .unwrap();
        assert_eq!(total, 12);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pop");
    }

    #[test]
    fn test_map_db_err_fallback_is_db_error() {
        let mapped = map_db_err(DbErr::Custom("boom".to_string()));
        assert!(matches!(mapped, CatalogError::Db(_)));
    }
}
