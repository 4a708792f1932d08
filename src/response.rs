use serde::Serialize;
use utoipa::ToSchema;

/// Pagination numbers shared by the product table and the JSON envelope.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
    pub total_pages: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
            total_pages: Some(total_pages(total, per_page)),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
            total_pages: None,
        }
    }

    /// Page buttons `1..=total_pages`.
    pub fn page_buttons(&self) -> Vec<i64> {
        (1..=self.total_pages.unwrap_or(0)).collect()
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.page.filter(|p| *p > 1).map(|p| p - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        match (self.page, self.total_pages) {
            (Some(page), Some(pages)) if page < pages => Some(page + 1),
            _ => None,
        }
    }
}

/// Ceiling division of `total` rows by `per_page`.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 || total <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
