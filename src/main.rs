use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;
use std::sync::Arc;

use sendly_otp::{
    app_config,
    config::Config,
    external::SendlyClient,
    services::{OtpService, PageService},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env may carry RUST_LOG, so load it before the logger
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    if dotenv.is_err() {
        log::info!("No .env file found");
    }

    let config = match Config::from_toml() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let sendly = match SendlyClient::new(&config.sendly) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create Sendly client: {e}");
            std::process::exit(1);
        }
    };

    let otp_service = OtpService::new(Arc::new(sendly));
    let page_service = PageService::from_dir(config.templates.dir.as_deref());

    log::info!("Server starting on http://localhost:{}", config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(otp_service.clone()))
            .app_data(web::Data::new(page_service.clone()))
            .configure(app_config)
    })
    .bind((config.server.host.as_str(), config.server.port));

    let server = match server {
        Ok(server) => server,
        Err(e) => {
            log::error!(
                "Failed to bind {}:{}: {e}",
                config.server.host,
                config.server.port
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
