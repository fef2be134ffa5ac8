//! Backend API Client
//!
//! Typed wrappers over the browser fetch API. Each endpoint returns its
//! decoded model or an [`AppError`] naming the endpoint that failed.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{HealthStatus, Item};

pub async fn fetch_health(config: &ApiConfig) -> Result<HealthStatus, AppError> {
    fetch_json(config, "/api/health").await
}

pub async fn fetch_items(config: &ApiConfig) -> Result<Vec<Item>, AppError> {
    fetch_json(config, "/api/items").await
}

pub async fn fetch_categories(config: &ApiConfig) -> Result<Vec<String>, AppError> {
    fetch_json(config, "/api/categories").await
}

/// GET an endpoint under the configured base URL and decode the JSON body.
async fn fetch_json<T>(config: &ApiConfig, endpoint: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    let url = config.endpoint(endpoint);
    web_sys::console::log_1(&format!("[APP] Fetching {}", url).into());

    let window = web_sys::window().ok_or_else(|| AppError::Network {
        endpoint: endpoint.to_string(),
        detail: "no window object".to_string(),
    })?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|err| AppError::Network {
            endpoint: endpoint.to_string(),
            detail: js_error_detail(&err),
        })?;
    let response: Response = response.dyn_into().map_err(|_| AppError::Network {
        endpoint: endpoint.to_string(),
        detail: "fetch did not return a Response".to_string(),
    })?;

    if !response.ok() {
        return Err(AppError::Http {
            endpoint: endpoint.to_string(),
            status: response.status(),
        });
    }

    let body_promise = response.json().map_err(|err| AppError::Decode {
        endpoint: endpoint.to_string(),
        detail: js_error_detail(&err),
    })?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|err| AppError::Decode {
            endpoint: endpoint.to_string(),
            detail: js_error_detail(&err),
        })?;

    serde_wasm_bindgen::from_value(body).map_err(|err| AppError::Decode {
        endpoint: endpoint.to_string(),
        detail: err.to_string(),
    })
}

/// Pull a readable message out of a thrown JS value.
fn js_error_detail(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }
}
