//! Fixtures for mocked API responses.
//!
//! - `auth` - login, registration and impersonation endpoints
//! - `school` - JSON bodies and endpoints for the school resources

pub mod auth;
pub mod school;
