//! Wire representations, one module per resource. Each maps from the
//! fully loaded domain aggregate; nothing here touches the database.

mod album;
mod genre;
mod label;
mod person;
mod song;

pub use album::AlbumResponse;
pub use genre::GenreResponse;
pub use label::LabelResponse;
pub use person::PersonResponse;
pub use song::{SongResponse, VerseResponse};
