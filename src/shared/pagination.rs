//! Page request normalization and paginated results
//!
//! Raw listing parameters arrive from query strings with every field
//! optional. [`PageRequest::from_params`] turns them into a fully
//! materialized request before anything reaches a repository.

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 20;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

/// Largest row count a storage backend can bind as a signed 64-bit integer
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// Sort order of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Only a case-insensitive `"asc"` sorts ascending. Anything else,
    /// including empty or unrecognized input, sorts descending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Listing parameters as received, before defaults are applied
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

/// Normalized page query handed to repositories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Page size, always at least 1
    pub limit: u64,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

impl PageRequest {
    pub fn from_params(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(DEFAULT_PAGE),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_ROWS),
            sort_field: params
                .sort_by
                .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            sort_direction: params
                .sort_direction
                .as_deref()
                .map(SortDirection::parse_lenient)
                .unwrap_or_default(),
        }
    }

    /// Number of rows to skip for this page, capped at [`MAX_ROWS`]
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit).min(MAX_ROWS)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(PageParams::default())
    }
}

/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        let total_pages = total.div_ceil(limit.max(1));
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_use_defaults() {
        let req = PageRequest::from_params(PageParams::default());
        assert_eq!(req.page, 0);
        assert_eq!(req.limit, 20);
        assert_eq!(req.sort_field, "createdAt");
        assert_eq!(req.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn only_asc_sorts_ascending() {
        assert_eq!(SortDirection::parse_lenient("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse_lenient("ASC"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse_lenient("aSc"), SortDirection::Ascending);
        assert_eq!(
            SortDirection::parse_lenient("Ascending"),
            SortDirection::Descending
        );
        assert_eq!(SortDirection::parse_lenient(""), SortDirection::Descending);
        assert_eq!(SortDirection::parse_lenient("desc"), SortDirection::Descending);
        assert_eq!(
            SortDirection::parse_lenient("garbage"),
            SortDirection::Descending
        );
    }

    #[test]
    fn explicit_params_are_kept() {
        let req = PageRequest::from_params(PageParams {
            page: Some(3),
            limit: Some(5),
            sort_by: Some("price".into()),
            sort_direction: Some("asc".into()),
        });
        assert_eq!(req.page, 3);
        assert_eq!(req.limit, 5);
        assert_eq!(req.sort_field, "price");
        assert_eq!(req.sort_direction, SortDirection::Ascending);
        assert_eq!(req.offset(), 15);
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let req = PageRequest::from_params(PageParams {
            limit: Some(0),
            ..Default::default()
        });
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn offset_and_limit_stay_within_signed_range() {
        let req = PageRequest::from_params(PageParams {
            page: Some(i64::MAX as u64),
            limit: Some(2),
            ..Default::default()
        });
        assert_eq!(req.page, i64::MAX as u64);
        assert_eq!(req.offset(), MAX_ROWS);

        let req = PageRequest::from_params(PageParams {
            page: Some(u64::MAX),
            limit: Some(u64::MAX),
            ..Default::default()
        });
        assert_eq!(req.limit, MAX_ROWS);
        assert_eq!(req.offset(), MAX_ROWS);
        assert!(i64::try_from(req.offset()).is_ok());
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_limit() {
        for (total, limit, expected) in [(0, 20, 0), (1, 20, 1), (20, 20, 1), (21, 20, 2), (25, 20, 2), (7, 1, 7)] {
            let page: PaginatedResult<()> = PaginatedResult::new(vec![], total, 0, limit);
            assert_eq!(page.total_pages, expected, "total={total} limit={limit}");
        }
    }

    #[test]
    fn map_preserves_page_metadata() {
        let page = PaginatedResult::new(vec![1, 2, 3], 13, 1, 3).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.total, 13);
        assert_eq!(page.total_pages, 5);
    }
}
