//! Outbound request layer for the Chuflay REST API.
//!
//! [`ApiClient`] owns the attached-credential slot. Until the session store has
//! finished restoring, the slot is `Unresolved` and every request fails fast
//! with [`ApiError::SessionPending`] instead of racing the restore step.

pub mod activity;
pub mod auth;
pub mod dashboard;
pub mod enrollment;
pub mod global;
pub mod marketplace;
pub mod notification;
pub mod payment;
pub mod student;
pub mod transport;
pub mod upload;

use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{
    api::transport::{ApiRequest, Body, Method, RawResponse, Transport, UploadFile},
    config::Config,
    error::ApiError,
    session::Credential,
};

/// State of the credential attached to outbound requests
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CredentialSlot {
    /// The persisted session has not been restored yet, nothing may be sent
    #[default]
    Unresolved,
    /// Requests go out without an `Authorization` header
    Anonymous,
    Bearer(Credential),
}

/// Cheap to clone, clones share the credential slot
#[derive(Clone)]
pub struct ApiClient {
    base: Rc<str>,
    transport: Transport,
    slot: Rc<RefCell<CredentialSlot>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base: Rc::from(config.api_base()),
            transport: Transport::new(),
            slot: Rc::new(RefCell::new(CredentialSlot::Unresolved)),
        }
    }

    /// Absolute URL for an API path such as `/estudiantes`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attaches the credential to every subsequent request
    pub fn attach(&self, credential: Credential) {
        *self.slot.borrow_mut() = CredentialSlot::Bearer(credential);
    }

    /// Removes the credential, later requests go out anonymous
    pub fn detach(&self) {
        *self.slot.borrow_mut() = CredentialSlot::Anonymous;
    }

    pub fn credential(&self) -> Option<Credential> {
        match &*self.slot.borrow() {
            CredentialSlot::Bearer(credential) => Some(credential.clone()),
            _ => None,
        }
    }

    /// Whether the restore step has armed the slot
    pub fn is_resolved(&self) -> bool {
        *self.slot.borrow() != CredentialSlot::Unresolved
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::Get, path, Body::Empty).await?;
        decode(&response)
    }

    /// `GET` with query parameters, pairs are percent-encoded
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let path = with_query(path, query);
        self.get(&path).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::Post, path, json_body(body)?).await?;
        decode(&response)
    }

    /// `POST` without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::Post, path, Body::Empty).await?;
        decode(&response)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::Put, path, json_body(body)?).await?;
        decode(&response)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::Delete, path, Body::Empty).await?;
        decode(&response)
    }

    /// Multipart `POST` of a single file
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: UploadFile,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::Post, path, Body::Multipart(file)).await?;
        decode(&response)
    }

    async fn execute(&self, method: Method, path: &str, body: Body) -> Result<RawResponse, ApiError> {
        // Read the slot before awaiting, the borrow must not live across the request
        let bearer = match &*self.slot.borrow() {
            CredentialSlot::Unresolved => return Err(ApiError::SessionPending),
            CredentialSlot::Anonymous => None,
            CredentialSlot::Bearer(credential) => Some(credential.as_str().to_string()),
        };

        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer,
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(path = %path, "Request failed before reaching the API: {}", e);
            e
        })?;

        if !response.is_success() {
            let error = ApiError::from_response(response.status, &response.body);

            tracing::debug!(
                path = %path,
                status = %response.status,
                "API responded with an error: {}",
                error
            );

            return Err(error);
        }

        Ok(response)
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Validation(format!("No se pudo preparar la solicitud: {}", e)))
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Percent-encodes a path segment such as an id
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn with_query(path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }

    let query = query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::{segment, with_query, ApiClient, CredentialSlot};
    use crate::client::{config::Config, session::Credential};

    fn client() -> ApiClient {
        ApiClient::new(&Config::new("http://localhost:8001").unwrap())
    }

    #[test]
    /// Expect query pairs to be percent-encoded and joined
    fn test_with_query() {
        let query = [("curso", "1ro Primaria".to_string()), ("estado", "confirmada".to_string())];

        assert_eq!(
            with_query("/actividades", &query),
            "/actividades?curso=1ro%20Primaria&estado=confirmada"
        );
        assert_eq!(with_query("/actividades", &[]), "/actividades");
    }

    #[test]
    /// Expect reserved characters in ids to be escaped
    fn test_segment() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    /// Expect the slot to start unresolved and clones to share it
    fn test_credential_slot_shared_between_clones() {
        let api = client();
        let clone = api.clone();

        assert!(!api.is_resolved());

        clone.attach(Credential::new("token").unwrap());
        assert!(api.is_resolved());
        assert_eq!(api.credential().unwrap().as_str(), "token");

        api.detach();
        assert_eq!(*clone.slot.borrow(), CredentialSlot::Anonymous);
        assert!(clone.credential().is_none());
    }

    #[tokio::test]
    /// Expect requests to fail fast while the session is unresolved
    async fn test_request_before_restore_is_not_issued() {
        let api = client();

        let result = api.get::<serde_json::Value>("/dashboard/stats").await;

        assert_eq!(result, Err(crate::client::error::ApiError::SessionPending));
    }
}
