
pub mod database;
pub mod wrappers;

pub use database::Database;
pub use wrappers::Preban;
pub use wrappers::PrebanStatus;
pub use wrappers::PrebanStore;
pub use wrappers::PrebansDB;
