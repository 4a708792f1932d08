use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{OrderItem, Product},
    repository::ProductRepository,
};

/// Quantity change requested from the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Subtract,
    Remove,
}

impl CartAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "add" => Some(CartAction::Add),
            "subtract" => Some(CartAction::Subtract),
            "remove" => Some(CartAction::Remove),
            _ => None,
        }
    }
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { product_name: String },
    AlreadyInCart { product_name: String },
}

impl AddOutcome {
    pub fn message(&self) -> String {
        match self {
            AddOutcome::Added { product_name } => format!("{product_name} successfully added"),
            AddOutcome::AlreadyInCart { product_name } => {
                format!("{product_name} already exists in cart")
            }
        }
    }

    pub fn alert_type(&self) -> &'static str {
        match self {
            AddOutcome::Added { .. } => "success",
            AddOutcome::AlreadyInCart { .. } => "warning",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Set when an item left the cart and the full list must be re-rendered.
    pub refresh_cart_items: bool,
    pub message: Option<String>,
}

/// One visitor's active order. At most one item per product.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    order_id: Option<Uuid>,
    items: Vec<OrderItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_id(&self) -> Option<Uuid> {
        self.order_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product_id: Uuid) -> bool {
        self.position(product_id).is_some()
    }

    pub fn quantity_of(&self, product_id: Uuid) -> Option<i32> {
        self.position(product_id).map(|i| self.items[i].quantity)
    }

    pub fn item(&self, product_id: Uuid) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    fn position(&self, product_id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == product_id)
    }

    /// Appends the product with quantity 1 unless it is already in the cart.
    pub fn add_product(&mut self, product: Product) -> AddOutcome {
        let order_id = *self.order_id.get_or_insert_with(Uuid::new_v4);
        let product_name = product.name.clone();
        if self.contains(product.id) {
            return AddOutcome::AlreadyInCart { product_name };
        }
        self.items.push(OrderItem {
            order_id,
            product_id: product.id,
            quantity: 1,
            product,
        });
        AddOutcome::Added { product_name }
    }

    /// Applies `action` to the item for `product_id`.
    ///
    /// A missing item is reported before the action is looked at; an unknown
    /// action leaves the cart untouched and reports "Invalid Action".
    pub fn update_quantity(
        &mut self,
        product_id: Uuid,
        action: Option<CartAction>,
    ) -> AppResult<UpdateOutcome> {
        let index = self
            .position(product_id)
            .ok_or_else(|| AppError::NotFound("Product not found in order".to_string()))?;

        let mut outcome = UpdateOutcome::default();
        match action {
            Some(CartAction::Add) => {
                let item = &mut self.items[index];
                item.quantity = item
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| AppError::BadRequest("Quantity limit reached".to_string()))?;
            }
            Some(CartAction::Subtract) => {
                self.items[index].quantity -= 1;
                if self.items[index].quantity <= 0 {
                    self.items.remove(index);
                    outcome.refresh_cart_items = true;
                }
            }
            Some(CartAction::Remove) => {
                self.items.remove(index);
                outcome.refresh_cart_items = true;
            }
            None => outcome.message = Some("Invalid Action".to_string()),
        }
        Ok(outcome)
    }

    /// Sum of quantity x unit price, in cents. Saturates instead of wrapping.
    pub fn total_cost(&self) -> i64 {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(0_i64, i64::saturating_add)
    }
}

/// Adds the product unless the cart already has it. The catalog is only
/// consulted for new products; unknown ones are a 404.
pub async fn add_to_cart(
    repo: &dyn ProductRepository,
    cart: &mut Cart,
    product_id: Uuid,
) -> AppResult<AddOutcome> {
    let outcome = match cart.item(product_id) {
        Some(item) => AddOutcome::AlreadyInCart {
            product_name: item.product.name.clone(),
        },
        None => {
            let product = repo
                .get(product_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
            cart.add_product(product)
        }
    };
    tracing::debug!(
        %product_id,
        order_id = ?cart.order_id(),
        items = cart.len(),
        outcome = ?outcome,
        "add to cart"
    );
    Ok(outcome)
}
