use uuid::Uuid;

use crate::{
    dto::products::{ProductForm, ProductPage},
    error::{AppError, AppResult},
    models::{NewProduct, Product},
    repository::ProductRepository,
    response::Meta,
    routes::params::Pagination,
    services::image_service::ImageStore,
};

/// Either the saved value or the messages to show next to the form.
#[derive(Debug)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(Vec<String>),
}

pub async fn list_products(
    repo: &dyn ProductRepository,
    pagination: &Pagination,
) -> AppResult<ProductPage> {
    let (page, limit, offset) = pagination.normalize();
    let total = repo.count().await?;
    let products = repo.list_page(limit, offset).await?;
    Ok(ProductPage {
        products,
        meta: Meta::new(page, limit, total),
    })
}

pub async fn get_product(repo: &dyn ProductRepository, id: Uuid) -> AppResult<Product> {
    repo.get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn create_product(
    repo: &dyn ProductRepository,
    images: &ImageStore,
    form: ProductForm,
) -> AppResult<Submission<Product>> {
    let valid = match form.validate_new() {
        Ok(valid) => valid,
        Err(messages) => return Ok(Submission::Rejected(messages)),
    };

    let image = images
        .save(&valid.image.file_name, &valid.image.bytes)
        .await?;
    let created = repo
        .create(NewProduct {
            name: valid.name,
            price: valid.price,
            description: valid.description,
            image: image.clone(),
        })
        .await;

    match created {
        Ok(product) => {
            tracing::info!(product_id = %product.id, name = %product.name, "product created");
            Ok(Submission::Accepted(product))
        }
        Err(err) => {
            images.remove(&image).await;
            Err(err)
        }
    }
}

pub async fn update_product(
    repo: &dyn ProductRepository,
    images: &ImageStore,
    id: Uuid,
    form: ProductForm,
) -> AppResult<Submission<Product>> {
    let existing = get_product(repo, id).await?;
    let (mut changes, upload) = match form.into_changes() {
        Ok(parts) => parts,
        Err(messages) => return Ok(Submission::Rejected(messages)),
    };

    let new_image = match upload {
        Some(upload) => Some(images.save(&upload.file_name, &upload.bytes).await?),
        None => None,
    };
    changes.image = new_image.clone();

    let updated = match repo.update(id, changes).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            if let Some(image) = &new_image {
                images.remove(image).await;
            }
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Err(err) => {
            if let Some(image) = &new_image {
                images.remove(image).await;
            }
            return Err(err);
        }
    };

    if new_image.is_some() && existing.image != updated.image {
        images.remove(&existing.image).await;
    }
    tracing::info!(product_id = %id, "product updated");
    Ok(Submission::Accepted(updated))
}

pub async fn delete_product(
    repo: &dyn ProductRepository,
    images: &ImageStore,
    id: Uuid,
) -> AppResult<Product> {
    let product = repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    images.remove(&product.image).await;
    tracing::info!(product_id = %id, "product deleted");
    Ok(product)
}
