//! Product storage behind a trait so handlers can run against Postgres or memory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewProduct, Product, ProductChanges},
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

/// Listing order everywhere is oldest first.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Products that have an uploaded image; what the storefront shows.
    async fn list_with_image(&self) -> AppResult<Vec<Product>>;

    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>>;

    async fn count(&self) -> AppResult<i64>;

    async fn get(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    async fn create_many(&self, products: Vec<NewProduct>) -> AppResult<usize>;

    /// Returns `None` when no product has this id.
    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Option<Product>>;

    /// Returns the removed product, `None` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>>;
}
