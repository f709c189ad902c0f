use crate::value::LabelId;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewLabel {
    pub name: String,
}
