use domain::genre::Genre;
use domain::value::GenreId;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "genre")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SongGenre,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::SongGenre => Entity::has_many(super::song_genre::Entity)
                .from(Column::Id)
                .to(super::song_genre::Column::GenreId)
                .into(),
        }
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_genre::Relation::Song.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::song_genre::Relation::Genre.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Genre {
    fn from(model: Model) -> Self {
        Genre {
            id: GenreId::from(model.id),
            name: model.name,
            name_slug: model.name_slug,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
