use crate::label::Label;
use crate::song::Song;
use crate::value::AlbumId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Album with its relations eagerly loaded. `label` is `None` when the
/// album has no label or the loader stopped at this depth; mappers turn
/// that into an omitted field. Songs loaded through an album are
/// shallow (their own relations stay empty).
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub name_slug: String,
    pub released_at: Option<NaiveDate>,
    pub label: Option<Label>,
    pub songs: Vec<Song>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewAlbum {
    pub name: String,
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
    #[serde(default)]
    pub label_id: Option<i64>,
}
