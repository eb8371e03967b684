use super::method_not_allowed;
use crate::error::AppError;
use crate::models::*;
use crate::services::OtpService;
use actix_web::{HttpResponse, ResponseError, web};

/// Error text for the envelope: validation messages as is, provider
/// failures prefixed with what was being attempted.
fn failure_message(err: &AppError, action: &str) -> String {
    match err {
        AppError::ValidationError(msg) => msg.clone(),
        other => format!("{action}: {other}"),
    }
}

#[utoipa::path(
    post,
    path = "/send-otp",
    tag = "otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Code sent", body = SendOtpResponse),
        (status = 400, description = "Malformed body or missing phone", body = SendOtpResponse),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Provider failure", body = SendOtpResponse)
    )
)]
pub async fn send_otp(
    otp_service: web::Data<OtpService>,
    request: Result<web::Json<SendOtpRequest>, actix_web::Error>,
) -> HttpResponse {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            log::warn!("Invalid send-otp body: {e}");
            return HttpResponse::BadRequest().json(SendOtpResponse::failure("Invalid request body"));
        }
    };

    match otp_service.send_otp(&request.phone).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::build(e.status_code())
            .json(SendOtpResponse::failure(failure_message(&e, "Failed to send OTP"))),
    }
}

#[utoipa::path(
    post,
    path = "/verify-otp",
    tag = "otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Provider answered; success is true only for a verified code", body = VerifyOtpResponse),
        (status = 400, description = "Malformed body or missing fields", body = VerifyOtpResponse),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Provider failure", body = VerifyOtpResponse)
    )
)]
pub async fn verify_otp(
    otp_service: web::Data<OtpService>,
    request: Result<web::Json<VerifyOtpRequest>, actix_web::Error>,
) -> HttpResponse {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            log::warn!("Invalid verify-otp body: {e}");
            return HttpResponse::BadRequest()
                .json(VerifyOtpResponse::failure("Invalid request body"));
        }
    };

    match otp_service
        .verify_otp(&request.verification_id, &request.code)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::build(e.status_code())
            .json(VerifyOtpResponse::failure(failure_message(&e, "Failed to verify OTP"))),
    }
}

pub fn otp_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/send-otp")
            .route(web::post().to(send_otp))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/verify-otp")
            .route(web::post().to(verify_otp))
            .default_service(web::to(method_not_allowed)),
    );
}
