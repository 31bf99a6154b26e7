//! Shared values for mocked API exchanges.
//!
//! None of these are real credentials.

/// Access token returned by the mocked login and impersonation endpoints
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Access token handed out when the global administrator impersonates someone
pub static TEST_IMPERSONATION_TOKEN: &str = "test-impersonation-token";

pub static TEST_EMAIL: &str = "padre@chuflay.test";

pub static TEST_PASSWORD: &str = "contraseña-segura";

pub static TEST_FULL_NAME: &str = "María Rodríguez";

pub static TEST_SCHOOL_ID: &str = "colegio-1";

/// `detail` returned by the mocked login endpoint on bad credentials
pub static INVALID_CREDENTIALS_DETAIL: &str = "Credenciales inválidas";
