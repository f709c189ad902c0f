use crate::value::GenreId;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated creation payload. The slug is derived, never supplied.
#[derive(Debug, Deserialize)]
pub struct NewGenre {
    pub name: String,
}
