use super::{AlbumResponse, GenreResponse, PersonResponse};
use chrono::NaiveDateTime;
use domain::song::{Song, Verse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub id: i64,
    pub index: i32,
    pub title: String,
    pub title_slug: String,
    pub length_secs: i32,
    pub is_single: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumResponse>,
    pub genres: Vec<GenreResponse>,
    pub producers: Vec<PersonResponse>,
    pub writers: Vec<PersonResponse>,
    pub featuring: Vec<PersonResponse>,
    pub lyrics: Vec<VerseResponse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub verse: i32,
    pub text: String,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id.as_i64(),
            index: song.index,
            title: song.title,
            title_slug: song.title_slug,
            length_secs: song.length_secs,
            is_single: song.is_single,
            album: song.album.map(Into::into),
            genres: song.genres.into_iter().map(Into::into).collect(),
            producers: song.producers.into_iter().map(Into::into).collect(),
            writers: song.writers.into_iter().map(Into::into).collect(),
            featuring: song.featuring.into_iter().map(Into::into).collect(),
            lyrics: song.lyrics.into_iter().map(Into::into).collect(),
            created_at: song.created_at,
            updated_at: song.updated_at,
        }
    }
}

impl From<Verse> for VerseResponse {
    fn from(verse: Verse) -> Self {
        Self {
            verse: verse.verse,
            text: verse.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value::SongId;

    fn bare_song() -> Song {
        Song {
            id: SongId::from(3),
            index: 1,
            title: "Partition".to_string(),
            title_slug: "partition".to_string(),
            length_secs: 319,
            is_single: false,
            album: None,
            genres: Vec::new(),
            producers: Vec::new(),
            writers: Vec::new(),
            featuring: Vec::new(),
            lyrics: Vec::new(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_verse_order_preserved() {
        let mut song = bare_song();
        song.lyrics = vec![
            Verse { verse: 1, text: "first".to_string() },
            Verse { verse: 2, text: "second".to_string() },
            Verse { verse: 3, text: "third".to_string() },
        ];
        let value = serde_json::to_value(SongResponse::from(song)).unwrap();
        let verses: Vec<i64> = value["lyrics"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["verse"].as_i64().unwrap())
            .collect();
        assert_eq!(verses, vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_album_is_omitted() {
        let value = serde_json::to_value(SongResponse::from(bare_song())).unwrap();
        assert!(value.get("album").is_none());
        assert!(value.get("album_id").is_none());
    }
}
