use std::sync::Arc;

use crate::{
    config::AppConfig,
    middleware::session::CartStore,
    repository::ProductRepository,
    services::image_service::ImageStore,
    views::Renderer,
};

pub const UPLOADS_URL: &str = "/uploads";

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub carts: CartStore,
    pub images: ImageStore,
    pub views: Arc<Renderer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>, config: AppConfig) -> Self {
        Self {
            products,
            carts: CartStore::new(),
            images: ImageStore::new(config.upload_dir.clone()),
            views: Arc::new(Renderer::new(UPLOADS_URL)),
            config: Arc::new(config),
        }
    }
}
