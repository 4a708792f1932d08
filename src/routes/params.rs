use serde::Deserialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// `?page=&limit=`; values that do not parse fall back to the defaults.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
        }
    }

    /// Returns `(page, limit, offset)`.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = parse(self.page.as_deref()).unwrap_or(DEFAULT_PAGE).max(1);
        let limit = match parse(self.limit.as_deref()) {
            Some(limit) if limit > 0 => limit.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        let offset = (page - 1).saturating_mul(limit);
        (page, limit, offset)
    }
}

fn parse(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: Option<&str>, limit: Option<&str>) -> Pagination {
        Pagination {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        assert_eq!(Pagination::default().normalize(), (1, 10, 0));
        assert_eq!(pagination(Some("x"), Some("y")).normalize(), (1, 10, 0));
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(pagination(Some("0"), Some("0")).normalize(), (1, 10, 0));
        assert_eq!(pagination(Some("-3"), Some("-1")).normalize(), (1, 10, 0));
        assert_eq!(pagination(Some("2"), Some("500")).normalize(), (2, 100, 100));
    }

    #[test]
    fn computes_offset() {
        assert_eq!(Pagination::new(3, 7).normalize(), (3, 7, 14));
    }
}
