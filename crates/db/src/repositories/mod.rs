//! Repository layer: one zero-sized struct per table with async query
//! methods taking a pool (or connection) explicitly.

pub mod category_repo;
pub mod image_repo;
pub mod project_repo;
pub mod setting_repo;

pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use project_repo::ProjectRepo;
pub use setting_repo::SettingRepo;
