pub mod album;
pub mod auth;
pub mod error;
pub mod genre;
pub mod id;
pub mod ident;
pub mod label;
pub mod page;
pub mod payload;
pub mod person;
pub mod report;
pub mod slug;
pub mod song;
pub mod value;
