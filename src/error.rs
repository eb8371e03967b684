use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("404 page not found")]
    NotFound,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        match self {
            AppError::MethodNotAllowed | AppError::NotFound => HttpResponse::build(status_code)
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            AppError::PageNotFound(name) => {
                log::error!("Page not found: {name}");
                HttpResponse::build(status_code)
                    .content_type(ContentType::plaintext())
                    .body("Error loading page")
            }
            AppError::IoError(err) => {
                log::error!("IO error: {err}");
                HttpResponse::build(status_code)
                    .content_type(ContentType::plaintext())
                    .body("Error loading page")
            }
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                HttpResponse::build(status_code).json(json!({
                    "success": false,
                    "error": msg
                }))
            }
            _ => {
                log::error!("Internal error: {self}");
                HttpResponse::build(status_code).json(json!({
                    "success": false,
                    "error": self.to_string()
                }))
            }
        }
    }
}
