pub mod media;
pub mod models;
