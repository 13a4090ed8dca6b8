//! Listing query string

use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::pagination::PageParams;

/// `?page&limit&sortBy&sortDirection`, all optional
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Zero-based page index (default 0)
    pub page: Option<u64>,
    /// Page size (default 20)
    pub limit: Option<u64>,
    /// Field to sort by (default `createdAt`)
    pub sort_by: Option<String>,
    /// `asc` for ascending; anything else sorts descending
    pub sort_direction: Option<String>,
}

impl From<ListParams> for PageParams {
    fn from(q: ListParams) -> Self {
        Self {
            page: q.page,
            limit: q.limit,
            sort_by: q.sort_by,
            sort_direction: q.sort_direction,
        }
    }
}
