//! Business logic services.

pub mod feed;
pub mod session;

pub use session::{SessionError, SessionGuard};
