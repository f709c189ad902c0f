use super::catalog::{map_db_err, CatalogResource};
use super::db_data::song::{SongFeaturing, SongProducers, SongWriters};
use super::db_data::{
    album, genre, lyric, song, song_featuring, song_genre, song_producer, song_writer,
};
use async_trait::async_trait;
use chrono::Utc;
use domain::error::CatalogError;
use domain::payload::{FieldKind, FieldSpec};
use domain::song::{NewSong, Song};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

pub struct SongResource;

impl SongResource {
    async fn insert_people(
        db: &DatabaseConnection,
        song_id: i64,
        person_ids: &[i64],
        role: PersonRole,
    ) -> Result<(), CatalogError> {
        for &person_id in person_ids {
            match role {
                PersonRole::Producer => {
                    song_producer::ActiveModel {
                        song_id: Set(song_id),
                        person_id: Set(person_id),
                    }
                    .insert(db)
                    .await
                    .map_err(map_db_err)?;
                }
                PersonRole::Writer => {
                    song_writer::ActiveModel {
                        song_id: Set(song_id),
                        person_id: Set(person_id),
                    }
                    .insert(db)
                    .await
                    .map_err(map_db_err)?;
                }
                PersonRole::Featuring => {
                    song_featuring::ActiveModel {
                        song_id: Set(song_id),
                        person_id: Set(person_id),
                    }
                    .insert(db)
                    .await
                    .map_err(map_db_err)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone)]
enum PersonRole {
    Producer,
    Writer,
    Featuring,
}

#[async_trait]
impl CatalogResource for SongResource {
    type Entity = song::Entity;
    type ActiveModel = song::ActiveModel;
    type Draft = NewSong;
    type Aggregate = Song;

    const RESOURCE: &'static str = "song";
    const COLLECTION: &'static str = "songs";
    const DEFAULT_LIMIT: u64 = 25;
    const MAX_LIMIT: u64 = 100;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("title", FieldKind::Text),
            FieldSpec::required("album_id", FieldKind::Integer),
            FieldSpec::optional("index", FieldKind::Integer),
            FieldSpec::optional("length_secs", FieldKind::Integer),
            FieldSpec::optional("is_single", FieldKind::Boolean),
            FieldSpec::optional("genre_ids", FieldKind::IdList),
            FieldSpec::optional("producer_ids", FieldKind::IdList),
            FieldSpec::optional("writer_ids", FieldKind::IdList),
            FieldSpec::optional("featuring_ids", FieldKind::IdList),
            FieldSpec::optional(
                "lyrics",
                FieldKind::ObjectList(&[FieldSpec::required("text", FieldKind::Text)]),
            ),
        ];
        FIELDS
    }

    fn display_name(draft: &NewSong) -> &str {
        &draft.title
    }

    fn id_column() -> song::Column {
        song::Column::Id
    }

    fn slug_column() -> song::Column {
        song::Column::TitleSlug
    }

    async fn load(db: &DatabaseConnection, model: song::Model) -> Result<Song, CatalogError> {
        let album = model
            .find_related(album::Entity)
            .one(db)
            .await
            .map_err(map_db_err)?
            .map(Into::into);
        let genres = model
            .find_related(genre::Entity)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let producers = model
            .find_linked(SongProducers)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let writers = model
            .find_linked(SongWriters)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let featuring = model
            .find_linked(SongFeaturing)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let lyrics = model
            .find_related(lyric::Entity)
            .order_by_asc(lyric::Column::Verse)
            .all(db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Into::into)
            .collect();
        let mut song = Song::from(model);
        song.album = album;
        song.genres = genres;
        song.producers = producers;
        song.writers = writers;
        song.featuring = featuring;
        song.lyrics = lyrics;
        Ok(song)
    }

    async fn insert(
        db: &DatabaseConnection,
        id: i64,
        slug: &str,
        draft: NewSong,
    ) -> Result<song::Model, CatalogError> {
        let known = album::Entity::find()
            .filter(album::Column::Id.eq(draft.album_id))
            .one(db)
            .await
            .map_err(map_db_err)?;
        if known.is_none() {
            return Err(CatalogError::Validation("album_id".to_string()));
        }

        let now = Utc::now().naive_utc();
        let model = song::ActiveModel {
            id: Set(id),
            index: Set(draft.index),
            title: Set(draft.title),
            title_slug: Set(slug.to_owned()),
            length_secs: Set(draft.length_secs),
            is_single: Set(draft.is_single),
            album_id: Set(draft.album_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(map_db_err)?;

        for genre_id in &draft.genre_ids {
            song_genre::ActiveModel {
                song_id: Set(model.id),
                genre_id: Set(*genre_id),
            }
            .insert(db)
            .await
            .map_err(map_db_err)?;
        }
        Self::insert_people(db, model.id, &draft.producer_ids, PersonRole::Producer).await?;
        Self::insert_people(db, model.id, &draft.writer_ids, PersonRole::Writer).await?;
        Self::insert_people(db, model.id, &draft.featuring_ids, PersonRole::Featuring).await?;

        // Verse numbers are assigned from payload order, starting at 1.
        for (position, verse) in draft.lyrics.into_iter().enumerate() {
            lyric::ActiveModel {
                song_id: Set(model.id),
                verse: Set(position as i32 + 1),
                text: Set(verse.text),
            }
            .insert(db)
            .await
            .map_err(map_db_err)?;
        }

        Ok(model)
    }
}
