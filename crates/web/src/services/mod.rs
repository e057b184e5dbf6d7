//! Application services.

pub mod credentials;

pub use credentials::{CredentialVerifier, LegacyPlaintextVerifier};
