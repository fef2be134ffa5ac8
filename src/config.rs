//! API Configuration
//!
//! Resolves the backend base URL once at startup. A runtime-injected
//! global (`window.env.STACKVIEW_API_URL`, typically written by an env.js
//! served next to the bundle) takes precedence over the constant baked in
//! at build time. The resolved value is passed into the app explicitly;
//! nothing here is global mutable state.

use url::Url;

use crate::error::AppError;

/// Build-time fallback, embedded by the build environment.
const BUILD_TIME_API_URL: Option<&str> = option_env!("STACKVIEW_API_URL");

/// Resolved backend location.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL from the two optional sources. Runtime wins,
    /// empty values count as absent, and the winner must parse as an
    /// absolute URL. A single trailing slash is trimmed so endpoint paths
    /// concatenate cleanly.
    pub fn resolve(
        runtime: Option<String>,
        build_time: Option<String>,
    ) -> Result<Self, AppError> {
        let raw = runtime
            .filter(|v| !v.is_empty())
            .or_else(|| build_time.filter(|v| !v.is_empty()))
            .ok_or(AppError::MissingBaseUrl)?;

        if Url::parse(&raw).is_err() {
            return Err(AppError::InvalidBaseUrl { value: raw });
        }

        let base_url = raw.strip_suffix('/').unwrap_or(&raw).to_string();
        Ok(Self { base_url })
    }

    /// Gather both URL sources from the browser environment and resolve.
    pub fn from_window() -> Result<Self, AppError> {
        let resolved = Self::resolve(
            runtime_api_url(),
            BUILD_TIME_API_URL.map(str::to_string),
        );
        match &resolved {
            Ok(config) => {
                web_sys::console::log_1(
                    &format!("[APP] Using API URL: {}", config.base_url).into(),
                );
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[APP] {}", err).into());
            }
        }
        resolved
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path like "/api/health".
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Link target for the human-facing API documentation page.
    pub fn docs_url(&self) -> String {
        self.endpoint("/api/docs")
    }
}

/// Read `window.env.STACKVIEW_API_URL` if the runtime injected it.
fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"env".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::Reflect::get(&env, &"STACKVIEW_API_URL".into())
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_url_takes_precedence() {
        let config = ApiConfig::resolve(
            Some("http://runtime:8000".to_string()),
            Some("http://build:8000".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://runtime:8000");
    }

    #[test]
    fn test_build_time_url_is_the_fallback() {
        let config = ApiConfig::resolve(None, Some("http://build:8000".to_string())).unwrap();
        assert_eq!(config.base_url(), "http://build:8000");
    }

    #[test]
    fn test_empty_runtime_value_falls_through() {
        let config = ApiConfig::resolve(
            Some(String::new()),
            Some("http://build:8000".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://build:8000");
    }

    #[test]
    fn test_missing_both_sources_is_a_config_error() {
        assert_eq!(ApiConfig::resolve(None, None), Err(AppError::MissingBaseUrl));
    }

    #[test]
    fn test_malformed_url_is_a_config_error() {
        let result = ApiConfig::resolve(Some("not-a-url".to_string()), None);
        assert_eq!(
            result,
            Err(AppError::InvalidBaseUrl { value: "not-a-url".to_string() })
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::resolve(Some("http://localhost:8000/".to_string()), None).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.endpoint("/api/health"), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_docs_url_points_at_the_docs_page() {
        let config = ApiConfig::resolve(Some("https://demo.example".to_string()), None).unwrap();
        assert_eq!(config.docs_url(), "https://demo.example/api/docs");
    }
}
