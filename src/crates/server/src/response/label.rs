use chrono::NaiveDateTime;
use domain::label::Label;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        Self {
            id: label.id.as_i64(),
            name: label.name,
            name_slug: label.name_slug,
            created_at: label.created_at,
            updated_at: label.updated_at,
        }
    }
}
