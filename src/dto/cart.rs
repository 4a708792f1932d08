use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{models::OrderItem, services::cart_service::Cart};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderItemQuery {
    pub product_id: Option<String>,
    pub action: Option<String>,
}

/// Data behind the `cartItems` fragment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartView {
    pub order_items: Vec<OrderItem>,
    pub message: String,
    pub alert_type: String,
    /// Cents.
    pub total_cost: i64,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            order_items: cart.items().to_vec(),
            message: String::new(),
            alert_type: String::new(),
            total_cost: cart.total_cost(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>, alert_type: &str) -> Self {
        self.message = message.into();
        self.alert_type = alert_type.to_string();
        self
    }
}

/// Data behind the `updateShoppingCart` fragment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartUpdateView {
    pub product_id: Uuid,
    /// Quantity after the update, `None` once the item left the cart.
    pub quantity: Option<i32>,
    pub message: String,
    pub alert_type: String,
    pub total_cost: i64,
    pub action: String,
    pub refresh_cart_items: bool,
}
