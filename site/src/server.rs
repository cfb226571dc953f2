use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// Static assets, the SPA bundle, and an `index.html` fallback for any other path
/// so client-side routing owns the URL space.
pub fn routes(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", &site.assets_dir))
        .service(
            Files::new("/", &site.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, body, http::StatusCode, test};
    use std::path::PathBuf;

    fn fixture_site() -> SiteConfig {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        SiteConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            dist_dir: fixtures.join("dist"),
            assets_dir: fixtures.join("assets"),
        }
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let site = fixture_site();
        let app = test::init_service(App::new().configure(|c| routes(c, &site))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body()).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("portfolio-root"));
    }

    #[actix_web::test]
    async fn unknown_path_falls_back_to_index() {
        let (status, body) = get("/projects/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("portfolio-root"));
    }

    #[actix_web::test]
    async fn assets_are_served_from_assets_dir() {
        let (status, body) = get("/assets/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("User-agent"));
    }
}
