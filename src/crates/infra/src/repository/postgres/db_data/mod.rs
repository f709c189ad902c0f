pub mod album;
pub mod genre;
pub mod label;
pub mod lyric;
pub mod person;
pub mod song;
pub mod song_featuring;
pub mod song_genre;
pub mod song_producer;
pub mod song_writer;
