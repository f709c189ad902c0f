pub mod auth;
pub mod config;
pub mod id_generator;
pub mod reporter;
pub mod repository;
