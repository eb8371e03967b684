use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provider status that marks a code as accepted.
pub const STATUS_VERIFIED: &str = "verified";

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[schema(example = "+15551234567")]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    #[schema(example = "ver_123")]
    pub verification_id: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendOtpResponse {
    pub fn sent(verification_id: String) -> Self {
        Self {
            verification_id,
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            verification_id: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[schema(example = "ver_123")]
    pub verification_id: String,
    #[serde(default)]
    #[schema(example = "123456")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyOtpResponse {
    /// Maps the provider's status onto the envelope. Only `verified` counts
    /// as success; every other status is echoed back with a generic error.
    pub fn from_status(status: String) -> Self {
        let verified = status == STATUS_VERIFIED;
        let status = (!status.is_empty()).then_some(status);
        if verified {
            Self {
                success: true,
                status,
                error: None,
                message: Some("Phone number verified successfully!".to_string()),
            }
        } else {
            Self {
                success: false,
                status,
                error: Some("Invalid verification code".to_string()),
                message: None,
            }
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            error: Some(error.into()),
            message: None,
        }
    }
}
