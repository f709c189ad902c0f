pub mod album;
pub mod catalog;
pub mod db_data;
pub mod genre;
pub mod label;
pub mod person;
pub mod song;

pub use album::AlbumResource;
pub use genre::GenreResource;
pub use label::LabelResource;
pub use person::PersonResource;
pub use song::SongResource;
