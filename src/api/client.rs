//! Statistics API Client
//!
//! HTTP client for the remote statistics and account endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::error::ApiError;
use crate::config::ApiConfig;
use crate::fetch::{FetchError, StatsSource};
use crate::forms::{Submission, SubmitOutcome};

/// Remote statistics API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET an endpoint and return the raw body of a 2xx response
    pub async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// POST a JSON body. Returns whether the status was 2xx and the raw body.
    pub async fn post_json(&self, endpoint: &str, body: &Value) -> Result<(bool, String), ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let success = response.status().is_success();
        let text = response.text().await.unwrap_or_default();
        Ok((success, text))
    }

    /// Send a form submission. Forms without an endpoint are accepted as is.
    pub async fn submit(&self, submission: &Submission) -> SubmitOutcome {
        let Some(endpoint) = submission.endpoint else {
            return SubmitOutcome::Accepted(submission.body.clone());
        };

        match self.post_json(endpoint, &submission.body).await {
            Ok((success, text)) => SubmitOutcome::from_response(success, &text),
            Err(e) => SubmitOutcome::Unreachable(e.to_string()),
        }
    }
}

#[async_trait]
impl StatsSource for ApiClient {
    async fn fetch(&self, endpoint: &str) -> Result<String, FetchError> {
        self.get_text(endpoint).await.map_err(FetchError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{spawn_provider, unused_base_url};
    use crate::fetch::{Completion, ViewController};
    use crate::forms::{FormController, FormKind};
    use crate::stats::{ExitPoints, GenderStats, Spending, VisitDuration};
    use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
    use serde_json::json;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    fn provider() -> Router {
        Router::new()
            .route(
                "/api/visits/getexitpoints",
                get(|| async { Json(json!({"north": 10, "south": 5, "west": 2, "east": 3})) }),
            )
            .route(
                "/api/visits/getstats",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/api/visits/getvisitduration",
                get(|| async { Json(json!({"firstrange": 4, "secondrange": "many"})) }),
            )
            .route(
                "/api/users/login",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "correct" {
                        (StatusCode::OK, Json(json!({"username": "alice", "email": body["email"]})))
                    } else {
                        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Wrong password"})))
                    }
                }),
            )
            .route(
                "/api/users/register",
                post(|Json(body): Json<Value>| async move { Json(body) }),
            )
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = client("http://localhost:5000/");
        assert_eq!(client.url("/api/visits/getstats"), "http://localhost:5000/api/visits/getstats");
    }

    #[tokio::test]
    async fn test_view_ready_from_provider() {
        let base = spawn_provider(provider()).await;
        let client = client(&base);
        let mut controller = ViewController::<ExitPoints>::new();

        assert_eq!(controller.load(&client).await, Completion::Applied);

        let data = controller.state().data().unwrap();
        assert_eq!(data.series.labels[0], "North Exit");
        assert_eq!(data.series.percentages(0), vec![50, 25, 10, 15]);
    }

    #[tokio::test]
    async fn test_server_error_reaches_error_state() {
        let base = spawn_provider(provider()).await;
        let client = client(&base);

        assert_eq!(
            client.get_text("/api/visits/getstats").await.map_err(FetchError::from),
            Err(FetchError::Status(500))
        );

        let mut controller = ViewController::<GenderStats>::new();
        controller.load(&client).await;
        assert_eq!(controller.state().error(), Some("Failed to load data. Please try again."));
    }

    #[tokio::test]
    async fn test_malformed_body_reaches_error_state() {
        let base = spawn_provider(provider()).await;
        let mut controller = ViewController::<VisitDuration>::new();

        controller.load(&client(&base)).await;

        assert_eq!(controller.state().error(), Some("Failed to load chart data"));
    }

    #[tokio::test]
    async fn test_missing_route_reaches_error_state() {
        let base = spawn_provider(provider()).await;
        let mut controller = ViewController::<Spending>::new();

        controller.load(&client(&base)).await;

        assert_eq!(controller.state().error(), Some("Failed to load chart data"));
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let client = client(&unused_base_url());

        let result = client.fetch("/api/visits/getexitpoints").await;
        assert!(matches!(result, Err(FetchError::Network(_))));

        let mut form = FormController::new(FormKind::Login);
        form.set("email", "alice@example.com").unwrap();
        form.set("password", "correct").unwrap();
        let submission = form.begin_submit().unwrap();
        form.finish(client.submit(&submission).await);
        assert_eq!(
            form.status().message(),
            Some("An error occurred while logging in. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let base = spawn_provider(provider()).await;
        let client = client(&base);
        let mut form = FormController::new(FormKind::Login);
        form.set("email", "alice@example.com").unwrap();
        form.set("password", "wrong").unwrap();

        let submission = form.begin_submit().unwrap();
        form.finish(client.submit(&submission).await);
        assert_eq!(form.status().message(), Some("Wrong password"));
        assert_eq!(form.state().text("email"), "alice@example.com");

        form.set("password", "correct").unwrap();
        let submission = form.begin_submit().unwrap();
        form.finish(client.submit(&submission).await);
        assert_eq!(form.status().message(), Some("Welcome back, alice!"));
        assert_eq!(form.state().text("email"), "");
    }

    #[tokio::test]
    async fn test_register_echo() {
        let base = spawn_provider(provider()).await;
        let mut form = FormController::new(FormKind::Register);
        form.set("username", "bob").unwrap();
        form.set("email", "bob@example.com").unwrap();
        form.set("password", "pw").unwrap();

        let submission = form.begin_submit().unwrap();
        form.finish(client(&base).submit(&submission).await);

        assert_eq!(form.status().message(), Some("User registered successfully: bob"));
    }

    #[tokio::test]
    async fn test_settings_submit_is_local() {
        let client = client(&unused_base_url());
        let mut form = FormController::new(FormKind::Settings);
        form.set("language", "fr").unwrap();

        let submission = form.begin_submit().unwrap();
        let outcome = client.submit(&submission).await;

        assert_eq!(outcome, SubmitOutcome::Accepted(submission.body.clone()));
    }
}
