pub mod otp_service;
pub mod page_service;

pub use otp_service::*;
pub use page_service::*;
