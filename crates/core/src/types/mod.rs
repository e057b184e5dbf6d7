//! Shared type definitions.

pub mod category;
pub mod id;
pub mod login;

pub use category::{Category, CategoryError};
pub use id::{AdminId, ProductId};
pub use login::{Login, LoginError};
