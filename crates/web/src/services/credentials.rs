//! Credential verification strategies.
//!
//! The admin store keeps passwords as plaintext and the login operation
//! compares them by exact equality. That is a known defect inherited from
//! the data this system runs against, so the comparison is isolated
//! behind [`CredentialVerifier`]: swapping in a hashed-credential
//! strategy later touches nothing but the implementation registered in
//! [`crate::state::AppState`].

/// Strategy for checking a supplied password against a stored credential.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` if `supplied` matches the `stored` credential.
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Legacy exact-equality comparison against a plaintext stored password.
///
/// No hashing, no normalization. Matches the store's historical behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyPlaintextVerifier;

impl CredentialVerifier for LegacyPlaintextVerifier {
    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_passes() {
        assert!(LegacyPlaintextVerifier.verify("asila123", "asila123"));
    }

    #[test]
    fn test_mismatch_fails() {
        assert!(!LegacyPlaintextVerifier.verify("asila123", "asila124"));
        assert!(!LegacyPlaintextVerifier.verify("asila123", ""));
    }

    #[test]
    fn test_no_normalization() {
        // The legacy comparison is byte-exact: no trimming, no case folding.
        assert!(!LegacyPlaintextVerifier.verify("asila123", " asila123"));
        assert!(!LegacyPlaintextVerifier.verify("asila123", "ASILA123"));
    }
}
