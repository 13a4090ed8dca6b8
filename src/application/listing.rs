//! Paginated, scope-filtered listing
//!
//! The single entry point every resource listing goes through: raw query
//! parameters in, one normalized repository call, one page out.

use tracing::debug;

use crate::domain::{DomainResult, PagedRepository};
use crate::shared::pagination::{PageParams, PageRequest, PaginatedResult};

/// List one page of `repo`, optionally narrowed to `scope`.
///
/// Missing parameters fall back to page 0, 20 items, `createdAt`
/// descending. An unrecognized sort direction sorts descending; nothing
/// about the parameters can make this fail.
pub async fn list_page<R>(
    repo: &R,
    params: PageParams,
    scope: Option<R::Scope>,
) -> DomainResult<PaginatedResult<R::Item>>
where
    R: PagedRepository + ?Sized,
{
    let request = PageRequest::from_params(params);
    debug!(
        page = request.page,
        limit = request.limit,
        sort_field = %request.sort_field,
        sort_direction = %request.sort_direction,
        scoped = scope.is_some(),
        "Listing page"
    );
    repo.find_page(scope, &request).await
}
