use axum::{
    Router,
    extract::{Multipart, Path, Query, State},
    response::Html,
    routing::{get, post},
};

use crate::{
    dto::products::{ProductForm, ProductUploadForm},
    error::AppResult,
    routes::{params::Pagination, parse_product_id},
    services::{
        product_service::{self, Submission},
        seed_service,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seed-products", post(seed_products))
        .route("/manageproducts", get(products_page))
        .route("/allproducts", get(all_products_view))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/createproduct", get(create_product_view))
        .route("/editproduct/{id}", get(edit_product_view))
}

#[utoipa::path(
    post,
    path = "/seed-products",
    responses(
        (status = 200, description = "Random products inserted", body = String, content_type = "text/html"),
        (status = 500, description = "Repository failure", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn seed_products(State(state): State<AppState>) -> AppResult<Html<String>> {
    let inserted = seed_service::seed_products(state.products.as_ref(), state.config.seed_count).await?;
    Ok(state
        .views
        .messages(&[format!("{inserted} products seeded")], "success"))
}

#[utoipa::path(
    get,
    path = "/manageproducts",
    responses(
        (status = 200, description = "Admin page", body = String, content_type = "text/html")
    ),
    tag = "Products"
)]
pub async fn products_page(State(state): State<AppState>) -> Html<String> {
    state.views.manage_products()
}

#[utoipa::path(
    get,
    path = "/allproducts",
    responses(
        (status = 200, description = "Product table container", body = String, content_type = "text/html")
    ),
    tag = "Products"
)]
pub async fn all_products_view(State(state): State<AppState>) -> Html<String> {
    state.views.all_products()
}

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Rows per page, default 10"),
    ),
    responses(
        (status = 200, description = "One page of products with page buttons", body = String, content_type = "text/html"),
        (status = 500, description = "Repository failure", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Html<String>> {
    let page = product_service::list_products(state.products.as_ref(), &pagination).await?;
    Ok(state.views.product_rows(&page))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product detail", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_product_id(&id)?;
    let product = product_service::get_product(state.products.as_ref(), id).await?;
    Ok(state.views.product_detail(&product))
}

#[utoipa::path(
    get,
    path = "/createproduct",
    responses(
        (status = 200, description = "Create form", body = String, content_type = "text/html")
    ),
    tag = "Products"
)]
pub async fn create_product_view(State(state): State<AppState>) -> Html<String> {
    state.views.create_product()
}

#[utoipa::path(
    post,
    path = "/products",
    request_body(content = ProductUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Success or validation messages", body = String, content_type = "text/html"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Html<String>> {
    let form = ProductForm::from_multipart(multipart).await?;
    let html = match product_service::create_product(state.products.as_ref(), &state.images, form)
        .await?
    {
        Submission::Accepted(product) => state.views.messages(
            &[format!("{} created successfully", product.name)],
            "success",
        ),
        Submission::Rejected(messages) => state.views.messages(&messages, "danger"),
    };
    Ok(html)
}

#[utoipa::path(
    get,
    path = "/editproduct/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Edit form", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn edit_product_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_product_id(&id)?;
    let product = product_service::get_product(state.products.as_ref(), id).await?;
    Ok(state.views.edit_product(&product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body(content = ProductUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Success or validation messages", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Html<String>> {
    let id = parse_product_id(&id)?;
    let form = ProductForm::from_multipart(multipart).await?;
    let html = match product_service::update_product(state.products.as_ref(), &state.images, id, form)
        .await?
    {
        Submission::Accepted(product) => state.views.messages(
            &[format!("{} updated successfully", product.name)],
            "success",
        ),
        Submission::Rejected(messages) => state.views.messages(&messages, "danger"),
    };
    Ok(html)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted; empty body removes the row"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_product_id(&id)?;
    product_service::delete_product(state.products.as_ref(), &state.images, id).await?;
    Ok(Html(String::new()))
}
