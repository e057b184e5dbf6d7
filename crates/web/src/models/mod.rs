//! Domain types for the web server.

pub mod admin;
pub mod product;
pub mod session;

pub use admin::Admin;
pub use product::Product;
pub use session::{CurrentAdmin, keys as session_keys};
