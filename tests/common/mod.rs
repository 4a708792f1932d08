#![allow(dead_code)]

use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use chrono::Utc;
use mx_store::{
    config::AppConfig,
    middleware::session::{SESSION_COOKIE, SessionId},
    models::Product,
    repository::InMemoryProductRepository,
    routes::create_router,
    state::AppState,
};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub repo: Arc<InMemoryProductRepository>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn upload_path(&self, filename: &str) -> std::path::PathBuf {
        self.state.config.upload_dir.join(filename)
    }
}

pub fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: root.to_path_buf(),
        upload_dir: root.join("uploads"),
        shopping_items_delay: Duration::ZERO,
        max_upload_bytes: 1024 * 1024,
        seed_count: 20,
    }
}

pub fn spawn_app(products: Vec<Product>) -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.upload_dir).expect("upload dir");

    let repo = Arc::new(InMemoryProductRepository::with_products(products));
    let state = AppState::new(repo.clone(), config);
    let router = create_router(state.clone());
    TestApp {
        router,
        state,
        repo,
        dir,
    }
}

pub fn product(name: &str, price: i64, image: &str) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price,
        description: format!("{name} description"),
        image: image.to_string(),
        created_at: Utc::now(),
    }
}

/// A visitor with a fixed session cookie.
#[derive(Clone, Copy)]
pub struct Visitor(pub Uuid);

impl Visitor {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn session(&self) -> SessionId {
        SessionId(self.0)
    }

    pub fn cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.0)
    }

    pub fn request(&self, method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, self.cookie())
            .body(Body::empty())
            .expect("request")
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

const BOUNDARY: &str = "mx-store-test-boundary";

/// Builds a `multipart/form-data` request with text fields and an optional `product_image`.
pub fn multipart_request(
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"product_image\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}
