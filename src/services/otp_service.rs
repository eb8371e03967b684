use crate::error::{AppError, AppResult};
use crate::external::VerificationProvider;
use crate::models::*;
use std::sync::Arc;

/// Validates OTP requests and relays them to the verification provider.
#[derive(Clone)]
pub struct OtpService {
    provider: Arc<dyn VerificationProvider>,
}

impl OtpService {
    pub fn new(provider: Arc<dyn VerificationProvider>) -> Self {
        Self { provider }
    }

    pub async fn send_otp(&self, phone: &str) -> AppResult<SendOtpResponse> {
        if phone.is_empty() {
            return Err(AppError::ValidationError(
                "Phone number is required".to_string(),
            ));
        }

        let verification = self.provider.send(phone).await?;
        Ok(SendOtpResponse::sent(verification.id))
    }

    /// A provider answer other than `verified` is not an error here: the
    /// response carries `success: false` and the provider's status.
    pub async fn verify_otp(&self, verification_id: &str, code: &str) -> AppResult<VerifyOtpResponse> {
        if verification_id.is_empty() || code.is_empty() {
            return Err(AppError::ValidationError(
                "Verification ID and code are required".to_string(),
            ));
        }

        let check = self.provider.check(verification_id, code).await?;
        Ok(VerifyOtpResponse::from_status(check.status))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::{AppError, AppResult};
    use crate::external::{Verification, VerificationCheck, VerificationProvider};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted provider that records every call it receives.
    #[derive(Default)]
    pub struct FakeProvider {
        pub verification_id: String,
        pub status: String,
        pub failure: Option<String>,
        pub sent: Mutex<Vec<String>>,
        pub checked: Mutex<Vec<(String, String)>>,
    }

    impl FakeProvider {
        pub fn issuing(verification_id: &str) -> Self {
            Self {
                verification_id: verification_id.to_string(),
                ..Default::default()
            }
        }

        pub fn answering(status: &str) -> Self {
            Self {
                status: status.to_string(),
                ..Default::default()
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.sent.lock().unwrap().len() + self.checked.lock().unwrap().len()
        }

        fn outcome(&self) -> AppResult<()> {
            match &self.failure {
                Some(message) => Err(AppError::ExternalApiError(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl VerificationProvider for FakeProvider {
        async fn send(&self, phone: &str) -> AppResult<Verification> {
            self.sent.lock().unwrap().push(phone.to_string());
            self.outcome()?;
            Ok(Verification {
                id: self.verification_id.clone(),
            })
        }

        async fn check(&self, verification_id: &str, code: &str) -> AppResult<VerificationCheck> {
            self.checked
                .lock()
                .unwrap()
                .push((verification_id.to_string(), code.to_string()));
            self.outcome()?;
            Ok(VerificationCheck {
                status: self.status.clone(),
            })
        }
    }
}
