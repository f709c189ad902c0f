use domain::song::Song;
use domain::value::SongId;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "song")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub index: i32,
    pub title: String,
    pub title_slug: String,
    pub length_secs: i32,
    pub is_single: bool,
    #[sea_orm(column_type = "BigInteger")]
    pub album_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Album,
    Lyric,
    SongGenre,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Album => Entity::belongs_to(super::album::Entity)
                .from(Column::AlbumId)
                .to(super::album::Column::Id)
                .into(),
            Self::Lyric => Entity::has_many(super::lyric::Entity)
                .from(Column::Id)
                .to(super::lyric::Column::SongId)
                .into(),
            Self::SongGenre => Entity::has_many(super::song_genre::Entity)
                .from(Column::Id)
                .to(super::song_genre::Column::SongId)
                .into(),
        }
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::lyric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lyric.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_genre::Relation::Genre.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::song_genre::Relation::Song.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// A song has three distinct person associations, so they go through
// `Linked` rather than a single `Related` impl.
pub struct SongProducers;

impl Linked for SongProducers {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::song_producer::Relation::Song.def().rev(),
            super::song_producer::Relation::Person.def(),
        ]
    }
}

pub struct SongWriters;

impl Linked for SongWriters {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::song_writer::Relation::Song.def().rev(),
            super::song_writer::Relation::Person.def(),
        ]
    }
}

pub struct SongFeaturing;

impl Linked for SongFeaturing {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::song_featuring::Relation::Song.def().rev(),
            super::song_featuring::Relation::Person.def(),
        ]
    }
}

// Shallow conversion: relations are filled in by the loader. The raw
// album_id column is intentionally not part of the aggregate.
impl From<Model> for Song {
    fn from(model: Model) -> Self {
        Song {
            id: SongId::from(model.id),
            index: model.index,
            title: model.title,
            title_slug: model.title_slug,
            length_secs: model.length_secs,
            is_single: model.is_single,
            album: None,
            genres: Vec::new(),
            producers: Vec::new(),
            writers: Vec::new(),
            featuring: Vec::new(),
            lyrics: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
