pub mod admin;
pub mod category;
pub mod health;
pub mod image;
pub mod project;
pub mod settings;
