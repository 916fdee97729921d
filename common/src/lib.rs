pub mod config;
pub mod domains;
pub mod error;
pub mod generator;
pub mod models;
pub mod sink;
pub mod source;
pub mod unique;
