//! Mock endpoints for the school resources.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::{auth::factory::mock_detail, school::SchoolFixtures};

impl<'a> SchoolFixtures<'a> {
    /// `GET {path}` answering 200 with `body`
    ///
    /// # Arguments
    /// - `path` - Path under `/api`, such as `/estudiantes`
    /// - `body` - JSON response body
    /// - `expected_requests` - How many times the endpoint must be hit
    pub fn create_get_endpoint(&mut self, path: &str, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/api{}", path).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// `method {path}` failing with `status`
    ///
    /// A `None` detail sends an empty body, as a crashed backend would.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        detail: Option<&str>,
    ) -> Mock {
        let body = detail.map(|detail| mock_detail(detail).to_string()).unwrap_or_default();

        self.setup
            .server
            .mock(method, format!("/api{}", path).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}
