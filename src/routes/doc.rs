use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{CartUpdateView, CartView, UpdateOrderItemQuery},
        products::{ProductPage, ProductUploadForm},
    },
    models::{OrderItem, Product},
    response::{ApiResponse, Meta},
    routes::{health, params, products, shop},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        shop::shopping_homepage,
        shop::shopping_items_view,
        shop::cart_view,
        shop::add_to_cart,
        shop::shopping_cart_view,
        shop::update_order_item_quantity,
        products::seed_products,
        products::products_page,
        products::all_products_view,
        products::list_products,
        products::get_product,
        products::create_product_view,
        products::create_product,
        products::edit_product_view,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            OrderItem,
            CartView,
            CartUpdateView,
            UpdateOrderItemQuery,
            ProductPage,
            ProductUploadForm,
            params::Pagination,
            health::HealthData,
            Meta,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Shop", description = "Storefront and cart fragments"),
        (name = "Products", description = "Product administration"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
