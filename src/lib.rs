pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod services;
pub mod swagger;

pub use config::Config;
pub use error::{AppError, AppResult};

use actix_web::web;

/// Every route the server answers, plus the 404 fallback. Services are
/// expected as `web::Data<OtpService>` and `web::Data<PageService>`.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    swagger::swagger_config(cfg);
    handlers::pages_config(cfg);
    handlers::otp_config(cfg);
    cfg.app_data(handlers::json_config())
        .default_service(web::to(handlers::not_found));
}
