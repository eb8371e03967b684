pub mod otp;
pub mod pages;

pub use otp::otp_config;
pub use pages::pages_config;

use crate::error::AppError;
use actix_web::web;

pub async fn method_not_allowed() -> Result<&'static str, AppError> {
    Err(AppError::MethodNotAllowed)
}

pub async fn not_found() -> Result<&'static str, AppError> {
    Err(AppError::NotFound)
}

/// JSON bodies are read whatever `Content-Type` the client sent.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().content_type_required(false)
}
