use chrono::NaiveDateTime;
use domain::person::Person;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.as_i64(),
            name: person.name,
            name_slug: person.name_slug,
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }
}
