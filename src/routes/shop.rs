use axum::{
    Router,
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post, put},
};

use crate::{
    dto::cart::{CartUpdateView, CartView, UpdateOrderItemQuery},
    error::{AppError, AppResult},
    middleware::session::SessionId,
    routes::parse_product_id,
    services::cart_service::{self, CartAction},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shopping_homepage))
        .route("/shoppingitems", get(shopping_items_view))
        .route("/cartitems", get(cart_view))
        .route("/addtocart/{product_id}", post(add_to_cart))
        .route("/gotocart", get(shopping_cart_view))
        .route("/updateorderitem", put(update_order_item_quantity))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Storefront page", body = String, content_type = "text/html")
    ),
    tag = "Shop"
)]
pub async fn shopping_homepage(State(state): State<AppState>, session: SessionId) -> Html<String> {
    let count = state.carts.snapshot(session).await.len();
    state.views.homepage(count)
}

#[utoipa::path(
    get,
    path = "/shoppingitems",
    responses(
        (status = 200, description = "Products that have an image", body = String, content_type = "text/html"),
        (status = 500, description = "Repository failure", body = String, content_type = "text/plain")
    ),
    tag = "Shop"
)]
pub async fn shopping_items_view(State(state): State<AppState>) -> AppResult<Html<String>> {
    // Simulated latency so the loading indicator is visible.
    if !state.config.shopping_items_delay.is_zero() {
        tokio::time::sleep(state.config.shopping_items_delay).await;
    }
    let products = state.products.list_with_image().await?;
    Ok(state.views.shopping_items(&products))
}

#[utoipa::path(
    get,
    path = "/cartitems",
    responses(
        (status = 200, description = "Cart summary with total", body = String, content_type = "text/html")
    ),
    tag = "Shop"
)]
pub async fn cart_view(State(state): State<AppState>, session: SessionId) -> Html<String> {
    let view = CartView::from_cart(&state.carts.snapshot(session).await);
    state.views.cart_items(&view)
}

#[utoipa::path(
    post,
    path = "/addtocart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Cart summary with an added or duplicate notice", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    ),
    tag = "Shop"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: SessionId,
    Path(product_id): Path<String>,
) -> AppResult<Html<String>> {
    let product_id = parse_product_id(&product_id)?;
    let cart = state.carts.cart(session).await;
    // Held across the lookup so the existence check and the append are one step.
    let mut cart = cart.lock().await;
    let outcome = cart_service::add_to_cart(state.products.as_ref(), &mut cart, product_id).await?;
    let view = CartView::from_cart(&cart).with_message(outcome.message(), outcome.alert_type());
    Ok(state.views.cart_items(&view))
}

#[utoipa::path(
    get,
    path = "/gotocart",
    responses(
        (status = 200, description = "Editable cart", body = String, content_type = "text/html")
    ),
    tag = "Shop"
)]
pub async fn shopping_cart_view(State(state): State<AppState>, session: SessionId) -> Html<String> {
    let view = CartView::from_cart(&state.carts.snapshot(session).await);
    state.views.shopping_cart(&view)
}

#[utoipa::path(
    put,
    path = "/updateorderitem",
    params(
        ("product_id" = String, Query, description = "Product ID"),
        ("action" = String, Query, description = "add, subtract or remove")
    ),
    responses(
        (status = 200, description = "Quantity and total updates", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid product ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found in order", body = String, content_type = "text/plain")
    ),
    tag = "Shop"
)]
pub async fn update_order_item_quantity(
    State(state): State<AppState>,
    session: SessionId,
    Query(query): Query<UpdateOrderItemQuery>,
) -> AppResult<Html<String>> {
    let product_id = parse_product_id(query.product_id.as_deref().unwrap_or_default())?;
    let action = query.action.unwrap_or_default();

    // A session without a cart cannot hold the item either.
    let cart = state
        .carts
        .existing(session)
        .await
        .ok_or_else(|| AppError::NotFound("Product not found in order".to_string()))?;
    let mut cart = cart.lock().await;
    let outcome = cart.update_quantity(product_id, CartAction::parse(&action))?;
    tracing::debug!(
        %product_id,
        action = %action,
        refresh = outcome.refresh_cart_items,
        "cart item updated"
    );

    let view = CartUpdateView {
        product_id,
        quantity: cart.quantity_of(product_id),
        message: outcome.message.unwrap_or_default(),
        alert_type: "info".to_string(),
        total_cost: cart.total_cost(),
        action,
        refresh_cart_items: outcome.refresh_cart_items,
    };
    Ok(state.views.update_shopping_cart(&view))
}
