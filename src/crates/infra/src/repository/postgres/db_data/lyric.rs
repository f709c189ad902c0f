use domain::song::Verse;
use sea_orm::entity::prelude::*;

/// Lyric verses keyed by (song, verse position); the position is the
/// stored iteration order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "lyric")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub song_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub verse: i32,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Song => Entity::belongs_to(super::song::Entity)
                .from(Column::SongId)
                .to(super::song::Column::Id)
                .into(),
        }
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Verse {
    fn from(model: Model) -> Self {
        Verse {
            verse: model.verse,
            text: model.text,
        }
    }
}
