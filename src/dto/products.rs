use axum::{body::Bytes, extract::Multipart};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Product, ProductChanges, parse_price},
    response::Meta,
};

/// Multipart body accepted by create and update.
#[derive(Debug, ToSchema)]
pub struct ProductUploadForm {
    pub product_name: String,
    pub price: String,
    pub description: String,
    #[schema(value_type = String, format = Binary)]
    pub product_image: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Raw form fields; blank text fields and empty file parts are `None`.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone)]
pub struct ValidProduct {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: UploadedImage,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ProductForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "product_name" => form.name = non_blank(field.text().await?),
                "price" => form.price = non_blank(field.text().await?),
                "description" => form.description = non_blank(field.text().await?),
                "product_image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() && !bytes.is_empty() {
                        form.image = Some(UploadedImage { file_name, bytes });
                    }
                }
                _ => {}
            }
        }
        Ok(form)
    }

    /// Everything is required for a new product.
    pub fn validate_new(self) -> Result<ValidProduct, Vec<String>> {
        let mut messages = Vec::new();
        if self.name.is_none() {
            messages.push("Product name is required".to_string());
        }
        let price = match self.price.as_deref() {
            None => {
                messages.push("Price is required".to_string());
                None
            }
            Some(raw) => {
                let parsed = parse_price(raw);
                if parsed.is_none() {
                    messages.push("Invalid price".to_string());
                }
                parsed
            }
        };
        if self.description.is_none() {
            messages.push("Description is required".to_string());
        }
        if self.image.is_none() {
            messages.push("Product image is required".to_string());
        }

        match (self.name, price, self.description, self.image) {
            (Some(name), Some(price), Some(description), Some(image)) if messages.is_empty() => {
                Ok(ValidProduct {
                    name,
                    price,
                    description,
                    image,
                })
            }
            _ => Err(messages),
        }
    }

    /// Blank fields keep the stored value; only the price can be invalid.
    pub fn into_changes(self) -> Result<(ProductChanges, Option<UploadedImage>), Vec<String>> {
        let price = match self.price.as_deref() {
            None => None,
            Some(raw) => match parse_price(raw) {
                Some(price) => Some(price),
                None => return Err(vec!["Invalid price".to_string()]),
            },
        };
        let changes = ProductChanges {
            name: self.name,
            price,
            description: self.description,
            image: None,
        };
        Ok((changes, self.image))
    }
}

/// One page of the admin product table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub meta: Meta,
}
