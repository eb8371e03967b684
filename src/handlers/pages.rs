use crate::error::AppResult;
use crate::services::{INDEX_PAGE, PageService, VERIFY_PAGE};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

async fn serve_page(page_service: &PageService, name: &str) -> AppResult<HttpResponse> {
    let html = page_service.page(name).await?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

pub async fn index(page_service: web::Data<PageService>) -> AppResult<HttpResponse> {
    serve_page(&page_service, INDEX_PAGE).await
}

pub async fn verify(page_service: web::Data<PageService>) -> AppResult<HttpResponse> {
    serve_page(&page_service, VERIFY_PAGE).await
}

/// Pages answer every method.
pub fn pages_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(index)))
        .service(web::resource("/verify").route(web::route().to(verify)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::EmbeddedPages;
    use actix_web::http::StatusCode;
    use actix_web::web::Bytes;
    use actix_web::{App, test};
    use std::sync::Arc;

    fn pages(entries: &[(&str, &'static str)]) -> PageService {
        let store: EmbeddedPages = entries
            .iter()
            .map(|&(name, html)| (name.to_string(), Bytes::from_static(html.as_bytes())))
            .collect();
        PageService::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_serves_pages_as_html() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pages(&[
                    (INDEX_PAGE, "<h1>Send</h1>"),
                    (VERIFY_PAGE, "<h1>Verify</h1>"),
                ])))
                .configure(pages_config),
        )
        .await;

        for (uri, expected) in [("/", "<h1>Send</h1>"), ("/verify", "<h1>Verify</h1>")] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{content_type}");
            assert_eq!(test::read_body(resp).await, expected);
        }
    }

    #[actix_web::test]
    async fn test_missing_page_is_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pages(&[(INDEX_PAGE, "<h1>Send</h1>")])))
                .configure(pages_config),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/verify").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Error loading page");
    }

    #[actix_web::test]
    async fn test_pages_ignore_method() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pages(&[
                    (INDEX_PAGE, "<h1>Send</h1>"),
                    (VERIFY_PAGE, "<h1>Verify</h1>"),
                ])))
                .configure(pages_config),
        )
        .await;

        let cases = [
            (test::TestRequest::post().uri("/"), "<h1>Send</h1>"),
            (test::TestRequest::put().uri("/"), "<h1>Send</h1>"),
            (test::TestRequest::post().uri("/verify"), "<h1>Verify</h1>"),
            (test::TestRequest::delete().uri("/verify"), "<h1>Verify</h1>"),
        ];
        for (req, expected) in cases {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(test::read_body(resp).await, expected);
        }
    }
}
