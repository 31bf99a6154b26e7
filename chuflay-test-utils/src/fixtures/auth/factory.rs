//! Factory functions for account and credential bodies.

use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_FULL_NAME, TEST_SCHOOL_ID};

/// A user as returned by login, registration and the user listing
///
/// # Arguments
/// - `id` - The user id
/// - `role` - Wire value of the role, such as `padre` or `admin_global`
pub fn mock_user(id: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": TEST_EMAIL,
        "role": role,
        "full_name": TEST_FULL_NAME,
        "is_active": true,
        "colegio_id": TEST_SCHOOL_ID,
    })
}

/// A user with its own email and name, for listings with several accounts
pub fn mock_named_user(id: &str, role: &str, email: &str, full_name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "full_name": full_name,
        "is_active": true,
    })
}

/// Credential exchange body shared by login and impersonation
pub fn mock_token(access_token: &str, user: Value) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "user": user,
    })
}

/// Error body in the API's `{"detail": ...}` shape
pub fn mock_detail(detail: &str) -> Value {
    json!({ "detail": detail })
}
