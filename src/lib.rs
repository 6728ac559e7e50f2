pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod news_client;
pub mod query;
pub mod render;
