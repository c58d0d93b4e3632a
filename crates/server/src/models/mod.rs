//! Domain models for the server.

pub mod admin_user;
pub mod catalog;

pub use admin_user::AdminAccount;
pub use catalog::CatalogItem;
