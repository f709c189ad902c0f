use crate::value::PersonId;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewPerson {
    pub name: String,
}
