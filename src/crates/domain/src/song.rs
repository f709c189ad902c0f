use crate::album::Album;
use crate::genre::Genre;
use crate::person::Person;
use crate::value::SongId;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: SongId,
    pub index: i32,
    pub title: String,
    pub title_slug: String,
    pub length_secs: i32,
    pub is_single: bool,
    pub album: Option<Album>,
    pub genres: Vec<Genre>,
    pub producers: Vec<Person>,
    pub writers: Vec<Person>,
    pub featuring: Vec<Person>,
    pub lyrics: Vec<Verse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One lyric verse. Verses keep their stored order (1-based `verse`).
#[derive(Debug, Clone, PartialEq)]
pub struct Verse {
    pub verse: i32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSong {
    pub title: String,
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub length_secs: i32,
    #[serde(default)]
    pub is_single: bool,
    pub album_id: i64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub producer_ids: Vec<i64>,
    #[serde(default)]
    pub writer_ids: Vec<i64>,
    #[serde(default)]
    pub featuring_ids: Vec<i64>,
    #[serde(default)]
    pub lyrics: Vec<NewVerse>,
}

#[derive(Debug, Deserialize)]
pub struct NewVerse {
    pub text: String,
}
