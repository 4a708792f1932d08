use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::ProductRepository;
use crate::{
    db::OrmConn,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::AppResult,
    models::{NewProduct, Product, ProductChanges},
};

#[derive(Clone)]
pub struct PgProductRepository {
    orm: OrmConn,
}

impl PgProductRepository {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }

    fn ordered() -> Select<Products> {
        Products::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_with_image(&self) -> AppResult<Vec<Product>> {
        let items = Self::ordered()
            .filter(Column::Image.ne(""))
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(items)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Product>> {
        let items = Self::ordered()
            .limit(limit.max(0) as u64)
            .offset(offset.max(0) as u64)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(items)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(Products::find().count(&self.orm).await? as i64)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity);
        Ok(product)
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let model = active_from_new(product).insert(&self.orm).await?;
        Ok(product_from_entity(model))
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> AppResult<usize> {
        let count = products.len();
        if count == 0 {
            return Ok(0);
        }
        Products::insert_many(products.into_iter().map(active_from_new))
            .exec(&self.orm)
            .await?;
        Ok(count)
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Option<Product>> {
        let existing = match Products::find_by_id(id).one(&self.orm).await? {
            Some(p) => p,
            None => return Ok(None),
        };

        let mut active: ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(image) = changes.image {
            active.image = Set(image);
        }

        let product = active.update(&self.orm).await?;
        Ok(Some(product_from_entity(product)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        let existing = match Products::find_by_id(id).one(&self.orm).await? {
            Some(p) => p,
            None => return Ok(None),
        };
        let result = Products::delete_by_id(id).exec(&self.orm).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(product_from_entity(existing)))
    }
}

fn active_from_new(product: NewProduct) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(product.name),
        price: Set(product.price),
        description: Set(product.description),
        image: Set(product.image),
        created_at: NotSet,
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        description: model.description,
        image: model.image,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
