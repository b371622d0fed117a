pub mod configuration;
pub mod error;
pub mod image;
pub mod input;
