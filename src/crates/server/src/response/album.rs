use super::{LabelResponse, SongResponse};
use chrono::{NaiveDate, NaiveDateTime};
use domain::album::Album;
use serde::Serialize;

/// The raw `label_id` column never appears on the wire; the relation
/// does, and only when it exists.
#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub released_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelResponse>,
    pub songs: Vec<SongResponse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id.as_i64(),
            name: album.name,
            name_slug: album.name_slug,
            released_at: album.released_at,
            label: album.label.map(Into::into),
            songs: album.songs.into_iter().map(Into::into).collect(),
            created_at: album.created_at,
            updated_at: album.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use domain::label::Label;
    use domain::value::{AlbumId, LabelId};

    fn stamp() -> NaiveDateTime {
        NaiveDateTime::default()
    }

    fn unsigned_album() -> Album {
        Album {
            id: AlbumId::from(1),
            name: "4".to_string(),
            name_slug: "4".to_string(),
            released_at: None,
            label: None,
            songs: Vec::new(),
            created_at: stamp(),
            updated_at: stamp(),
        }
    }

    #[test]
    fn test_absent_label_is_omitted() {
        let value = serde_json::to_value(AlbumResponse::from(unsigned_album())).unwrap();
        assert!(value.get("label").is_none());
        assert!(value.get("label_id").is_none());
        assert_eq!(value["songs"], serde_json::json!([]));
    }

    #[test]
    fn test_label_maps_through_its_own_shape() {
        let mut album = unsigned_album();
        album.label = Some(Label {
            id: LabelId::from(9),
            name: "Parkwood".to_string(),
            name_slug: "parkwood".to_string(),
            created_at: stamp(),
            updated_at: stamp(),
        });
        let value = serde_json::to_value(AlbumResponse::from(album)).unwrap();
        assert_eq!(value["label"]["name_slug"], "parkwood");
    }
}
