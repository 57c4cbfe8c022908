//! Pagination and sort helpers for list endpoints.

use serde::Deserialize;

use crate::error::CoreError;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Sort direction (`?order=asc|desc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved `LIMIT` / `OFFSET` / `ORDER BY` for a list query.
///
/// `column` is always one of the caller's allow-listed names, so it is safe
/// to splice into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
    pub column: &'static str,
    pub order: SortOrder,
}

/// Clamp a user-provided limit to `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Resolve `?limit&page&sort&order` against an allow-list of sortable columns.
///
/// `page` is 1-based. The first entry of `allowed` is the default sort column.
pub fn resolve_page(
    limit: Option<i64>,
    page: Option<i64>,
    sort: Option<&str>,
    order: Option<SortOrder>,
    allowed: &[&'static str],
) -> Result<Page, CoreError> {
    let limit = clamp_limit(limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let page = page.unwrap_or(1).max(1);
    let column = match sort {
        None => allowed
            .first()
            .copied()
            .ok_or_else(|| CoreError::Internal("empty sort allow-list".to_string()))?,
        Some(requested) => allowed
            .iter()
            .copied()
            .find(|c| *c == requested)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "cannot sort by '{requested}'; allowed: {}",
                    allowed.join(", ")
                ))
            })?,
    };
    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| CoreError::Validation(format!("page {page} is out of range")))?;
    Ok(Page {
        limit,
        offset,
        column,
        order: order.unwrap_or_default(),
    })
}
