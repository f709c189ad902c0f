use chrono::NaiveDateTime;
use domain::genre::Genre;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id.as_i64(),
            name: genre.name,
            name_slug: genre.name_slug,
            created_at: genre.created_at,
            updated_at: genre.updated_at,
        }
    }
}
