use crate::{
    client::{api::ApiClient, error::ApiError},
    model::user::{LoginDto, RegisterDto, TokenDto, UserDto},
};

/// Exchanges email and password for a bearer token and the account identity
///
/// # Returns
/// - `Ok(TokenDto)`: Valid credentials, contains the token and identity
/// - `Err(ApiError::Api)`: 401 for invalid credentials or a disabled account
/// - `Err(ApiError)`: Transport failure or malformed response
pub async fn login(api: &ApiClient, credentials: &LoginDto) -> Result<TokenDto, ApiError> {
    api.post("/auth/login", credentials).await
}

/// Creates an account, the caller is not logged in by this
pub async fn register(api: &ApiClient, profile: &RegisterDto) -> Result<UserDto, ApiError> {
    api.post("/auth/register", profile).await
}
