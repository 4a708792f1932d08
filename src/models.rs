use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Price in cents.
    pub price: i64,
    pub description: String,
    /// Stored image filename, empty when the product has none.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// A cart line. Carries a copy of the product as it was when added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub product: Product,
}

impl OrderItem {
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity).saturating_mul(self.product.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Highest accepted price in cents, 9 999 999.99.
pub const MAX_PRICE: i64 = 999_999_999;

/// Formats cents as `12.34`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Parses `123`, `123.4` or `123.45` into cents. Negative amounts and more
/// than two decimals are rejected, as is anything above [`MAX_PRICE`].
pub fn parse_price(input: &str) -> Option<i64> {
    let input = input.trim();
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if input.ends_with('.') {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole
        .checked_mul(100)?
        .checked_add(fraction)
        .filter(|cents| *cents <= MAX_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_two_decimals() {
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(2500), "25.00");
        assert_eq!(format_price(99_999), "999.99");
    }

    #[test]
    fn parses_prices() {
        assert_eq!(parse_price("10"), Some(1000));
        assert_eq!(parse_price(" 10.5 "), Some(1050));
        assert_eq!(parse_price("999.99"), Some(99_999));
        assert_eq!(parse_price("0.07"), Some(7));
    }

    #[test]
    fn rejects_malformed_prices() {
        assert_eq!(parse_price("9999999.99"), Some(MAX_PRICE));
        for bad in ["10000000", "90000000000000000", "", "abc", "-1", "1.234", "1.", ".5", "1.2.3", "1e3", "+4"] {
            assert_eq!(parse_price(bad), None, "{bad:?} should be rejected");
        }
    }
}
