//! Mock endpoints for the authentication flow.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{INVALID_CREDENTIALS_DETAIL, TEST_ACCESS_TOKEN, TEST_IMPERSONATION_TOKEN},
    fixtures::auth::{
        factory::{mock_detail, mock_token, mock_user},
        AuthFixtures,
    },
};

impl<'a> AuthFixtures<'a> {
    /// `POST /api/auth/login` accepting `email` and answering with a token for
    /// a user with `role`
    pub fn create_login_endpoint(&mut self, user_id: &str, role: &str, email: &str) -> Mock {
        let body = mock_token(TEST_ACCESS_TOKEN, mock_user(user_id, role));

        self.setup
            .server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::PartialJson(json!({ "email": email })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    /// `POST /api/auth/login` rejecting the credentials with a 401
    pub fn create_login_failure_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(mock_detail(INVALID_CREDENTIALS_DETAIL).to_string())
            .create()
    }

    /// `POST /api/auth/register` echoing the account back
    pub fn create_register_endpoint(&mut self, user_id: &str, role: &str) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::PartialJson(json!({ "role": role })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_user(user_id, role).to_string())
            .create()
    }

    /// `POST /api/global/impersonate/{target_id}`, only answered for the
    /// administrator's bearer token
    pub fn create_impersonate_endpoint(&mut self, target_id: &str, target_role: &str) -> Mock {
        let body = mock_token(TEST_IMPERSONATION_TOKEN, mock_user(target_id, target_role));

        self.setup
            .server
            .mock("POST", format!("/api/global/impersonate/{}", target_id).as_str())
            .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}
