use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProductRepository;
use crate::{
    error::AppResult,
    models::{NewProduct, Product, ProductChanges},
};

/// Keeps products in insertion order, which is also creation order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

fn materialize(product: NewProduct) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: product.name,
        price: product.price,
        description: product.description,
        image: product.image,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_with_image(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| p.has_image()).cloned().collect())
    }

    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.products.read().await.len() as i64)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let product = materialize(product);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> AppResult<usize> {
        let count = products.len();
        self.products
            .write()
            .await
            .extend(products.into_iter().map(materialize));
        Ok(count)
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(description) = changes.description {
            product.description = description;
        }
        if let Some(image) = changes.image {
            product.image = image;
        }
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id);
        Ok(index.map(|i| products.remove(i)))
    }
}
