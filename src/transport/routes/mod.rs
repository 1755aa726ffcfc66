pub mod info;
pub mod media;
pub mod stream;
