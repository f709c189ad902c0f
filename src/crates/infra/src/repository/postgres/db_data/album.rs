use domain::album::Album;
use domain::value::AlbumId;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "album")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub released_at: Option<Date>,
    #[sea_orm(column_type = "BigInteger", nullable)]
    pub label_id: Option<i64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Label,
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Label => Entity::belongs_to(super::label::Entity)
                .from(Column::LabelId)
                .to(super::label::Column::Id)
                .into(),
            Self::Song => Entity::has_many(super::song::Entity)
                .from(Column::Id)
                .to(super::song::Column::AlbumId)
                .into(),
        }
    }
}

impl Related<super::label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Label.def()
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Shallow conversion: relations are filled in by the loader.
impl From<Model> for Album {
    fn from(model: Model) -> Self {
        Album {
            id: AlbumId::from(model.id),
            name: model.name,
            name_slug: model.name_slug,
            released_at: model.released_at,
            label: None,
            songs: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
