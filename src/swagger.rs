use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::otp::send_otp, handlers::otp::verify_otp),
    components(schemas(SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse)),
    tags((name = "otp", description = "Phone verification by one-time passcode")),
    info(
        title = "Sendly OTP API",
        version = "0.1.0",
        description = "Sends and checks SMS one-time passcodes through Sendly"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
