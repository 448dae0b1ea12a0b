use axum::{extract::FromRequestParts, http::request::Parts};
use siteguard_core::domain::query::value_objects::QueryRequest;
use tracing::debug;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Listing parameters (`page`, `limit`, `sort`, `filter`, `search`) read
/// from the raw query string.
///
/// `None` when the query string is empty or carries none of the known keys,
/// so the service can take its default-spec fast path. A repeated key keeps
/// its first value.
///
/// ```rust,ignore
/// async fn handler(ListQuery(query): ListQuery) -> Result<Response<..>, ApiError> {
///     state.service.list_customers(ListCustomersInput { company_id, query }).await
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery(pub Option<QueryRequest>);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = match parts.uri.query() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(ListQuery(None)),
        };

        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).map_err(|e| {
                debug!("Rejecting query string {:?}: {}", query_string, e);
                ApiError::BadRequest(format!("Invalid query string: {}", e))
            })?;

        let mut request = QueryRequest::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut request.page,
                "limit" => &mut request.limit,
                "sort" => &mut request.sort,
                "filter" => &mut request.filter,
                "search" => &mut request.search,
                _ => continue,
            };
            if slot.is_some() {
                debug!("Ignoring repeated query parameter {:?}", key);
                continue;
            }
            *slot = Some(value);
        }

        if request.is_empty() {
            return Ok(ListQuery(None));
        }

        Ok(ListQuery(Some(request)))
    }
}
