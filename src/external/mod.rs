pub mod sendly;

pub use sendly::*;

use crate::error::AppResult;
use async_trait::async_trait;

/// A verification the provider has started for a phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub id: String,
}

/// Outcome of checking a code against a verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCheck {
    pub status: String,
}

/// The SMS/OTP service that issues and checks codes.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    async fn send(&self, phone: &str) -> AppResult<Verification>;

    async fn check(&self, verification_id: &str, code: &str) -> AppResult<VerificationCheck>;
}
