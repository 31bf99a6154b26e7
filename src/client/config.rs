use crate::client::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
/// Persisted session on native targets, relative to the working directory
#[cfg(not(target_arch = "wasm32"))]
pub const SESSION_FILE: &str = ".chuflay-session.json";

/// Startup configuration, read once before the component tree is built
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Origin of the backend without the `/api` prefix or a trailing slash
    pub backend_url: String,
    /// File holding the persisted session on native targets
    #[cfg(not(target_arch = "wasm32"))]
    pub session_file: std::path::PathBuf,
}

impl Config {
    /// Builds the configuration from `BACKEND_URL`
    ///
    /// The value baked in at compile time wins. Native targets then fall back to
    /// the process environment, the browser falls back to the page origin.
    ///
    /// # Returns
    /// - `Ok(Config)`: A configuration with a validated backend URL
    /// - `Err(ConfigError::MissingEnvVar)`: No backend URL could be found
    /// - `Err(ConfigError::InvalidEnvValue)`: The backend URL is not an http(s) URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = match option_env!("BACKEND_URL") {
            Some(url) => url.to_string(),
            None => Self::runtime_backend_url()?,
        };

        Self::new(&backend_url)
    }

    /// Builds a configuration from an explicit backend URL
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        let backend_url = normalize_backend_url(backend_url)?;

        Ok(Self {
            backend_url,
            #[cfg(not(target_arch = "wasm32"))]
            session_file: std::path::PathBuf::from(SESSION_FILE),
        })
    }

    /// Base path every endpoint is resolved against
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn runtime_backend_url() -> Result<String, ConfigError> {
        std::env::var(BACKEND_URL_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    fn runtime_backend_url() -> Result<String, ConfigError> {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .ok_or_else(|| ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()))
    }
}

fn normalize_backend_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()));
    }

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: BACKEND_URL_VAR.to_string(),
            reason: format!("expected an http(s) URL, got {:?}", trimmed),
        });
    }

    // A backend URL that already carries the API prefix would double it
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::client::error::ConfigError;

    #[test]
    /// Expect trailing slashes and an `/api` suffix to be trimmed
    fn test_config_new_normalizes_url() {
        let config = Config::new("https://chuflay.example.com/").unwrap();
        assert_eq!(config.api_base(), "https://chuflay.example.com/api");

        let config = Config::new("http://localhost:8001/api/").unwrap();
        assert_eq!(config.api_base(), "http://localhost:8001/api");
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    /// Expect the session file to stay at its fixed path whatever the environment holds
    fn test_config_new_fixed_session_file() {
        let config = Config::new("http://localhost:8001").unwrap();

        assert_eq!(config.session_file, std::path::PathBuf::from(super::SESSION_FILE));
    }

    #[test]
    /// Expect an error for values that are not http(s) URLs
    fn test_config_new_invalid_url() {
        let result = Config::new("ftp://chuflay.example.com");

        assert!(matches!(result, Err(ConfigError::InvalidEnvValue { .. })));
    }

    #[test]
    /// Expect an error for a blank URL
    fn test_config_new_blank_url() {
        let result = Config::new("   ");

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }
}
