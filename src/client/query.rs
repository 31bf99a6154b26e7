//! Declarative page data.
//!
//! A page describes what it needs with [`use_query`]. The fetch reruns when any
//! signal it reads changes (filters, the session) and never starts before the
//! session is resolved. The in-flight request belongs to the component scope,
//! so unmounting the page drops it instead of applying a late result to stale
//! state.

use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{api::ApiClient, error::ApiError, store::session::use_session};

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T: Clone> QueryState<T> {
    /// Maps a resource value, treating a request held back for the session as loading
    pub fn from_result(result: Option<&Result<T, ApiError>>) -> Self {
        match result {
            None | Some(Err(ApiError::SessionPending)) => QueryState::Loading,
            Some(Ok(value)) => QueryState::Ready(value.clone()),
            Some(Err(error)) => QueryState::Failed(error.clone()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

pub struct Query<T: 'static> {
    resource: Resource<Result<T, ApiError>>,
}

impl<T: 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Query<T> {}

impl<T: Clone + 'static> Query<T> {
    pub fn state(&self) -> QueryState<T> {
        let value = self.resource.read();
        QueryState::from_result((*value).as_ref())
    }

    /// Refetches from scratch, used after every successful mutation
    pub fn reload(&mut self) {
        self.resource.restart();
    }
}

/// Runs `fetch` with the shared [`ApiClient`] once the session is resolved
///
/// Failed reads are logged and surface as [`QueryState::Failed`].
pub fn use_query<T, F, Fut>(fetch: F) -> Query<T>
where
    T: 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let session = use_session();
    let state = session.state;
    let api = session.api();

    let resource = use_resource(move || {
        // Reading the session here keys the query on it
        let resolved = state.read().is_resolved();
        let _identity = state.read().identity().map(|identity| identity.id.clone());

        let pending = (!resolved).then_some(ApiError::SessionPending);
        let request = fetch(api.clone());

        async move {
            if let Some(pending) = pending {
                return Err(pending);
            }

            let result = request.await;

            if let Err(error) = &result {
                tracing::error!("Failed to load page data: {}", error);
            }

            result
        }
    });

    Query { resource }
}

#[cfg(test)]
mod tests {
    use super::QueryState;
    use crate::client::error::ApiError;

    #[test]
    /// Expect pending and missing results to read as loading
    fn test_query_state_loading() {
        assert!(QueryState::<u32>::from_result(None).is_loading());
        assert!(QueryState::<u32>::from_result(Some(&Err(ApiError::SessionPending))).is_loading());
    }

    #[test]
    /// Expect values and other errors to pass through
    fn test_query_state_ready_and_failed() {
        assert_eq!(QueryState::from_result(Some(&Ok(3u32))).ready(), Some(&3));

        let error = ApiError::Network("refused".to_string());
        assert_eq!(
            QueryState::<u32>::from_result(Some(&Err(error.clone()))),
            QueryState::Failed(error)
        );
    }
}
