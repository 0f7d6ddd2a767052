//! HTTP API Client
//!
//! Functions for communicating with the Joina statistics and user API.

use gloo_net::http::Request;
use web_sys::AbortSignal;

use joina::fetch::FetchError;
use joina::forms::{Settings, Submission, SubmitOutcome, SETTINGS_STORAGE_KEY};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const API_URL_KEY: &str = "joina_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, &normalize_base(url));
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// GET a statistics endpoint and return the raw body of a 2xx response.
///
/// `signal` aborts the request when the view that issued it goes away.
pub async fn fetch_text(endpoint: &str, signal: Option<&AbortSignal>) -> Result<String, FetchError> {
    let url = format!("{}{}", get_api_base(), endpoint);

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Send a form submission. Forms without an endpoint are saved locally.
pub async fn submit(submission: &Submission) -> SubmitOutcome {
    let Some(endpoint) = submission.endpoint else {
        return save_local(submission);
    };

    let url = format!("{}{}", get_api_base(), endpoint);

    let request = match Request::post(&url).json(&submission.body) {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::Unreachable(format!("Request build error: {}", e)),
    };

    match request.send().await {
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            SubmitOutcome::from_response(response.ok(), &body)
        }
        Err(e) => SubmitOutcome::Unreachable(e.to_string()),
    }
}

fn save_local(submission: &Submission) -> SubmitOutcome {
    let Some(storage) = local_storage() else {
        return SubmitOutcome::Unreachable("local storage unavailable".to_string());
    };

    match storage.set_item(SETTINGS_STORAGE_KEY, &submission.body.to_string()) {
        Ok(()) => SubmitOutcome::Accepted(submission.body.clone()),
        Err(_) => SubmitOutcome::Unreachable("local storage is full or blocked".to_string()),
    }
}

/// Settings saved by an earlier session, if any
pub fn load_settings() -> Option<Settings> {
    let raw = local_storage()?.get_item(SETTINGS_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(settings) => Some(settings),
        Err(e) => {
            web_sys::console::error_1(&format!("Ignoring stored settings: {}", e).into());
            None
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_storage() {
        set_api_base("http://stats.joina.test/");
        assert_eq!(get_api_base(), "http://stats.joina.test");

        set_api_base("");
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    fn test_load_settings_ignores_garbage() {
        let storage = local_storage().expect("local storage");
        storage.set_item(SETTINGS_STORAGE_KEY, "{not json").unwrap();
        assert!(load_settings().is_none());

        storage
            .set_item(SETTINGS_STORAGE_KEY, r#"{"theme":"dark","notifications":false,"language":"fr"}"#)
            .unwrap();
        let settings = load_settings().expect("saved settings");
        assert!(!settings.notifications);
        assert_eq!(settings.language.label(), "French");
    }
}
