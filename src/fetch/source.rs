//! Async data sources for native callers

use async_trait::async_trait;

use super::controller::{Completion, ViewController};
use super::error::FetchError;
use crate::stats::StatsPayload;

/// Something that can answer a GET for a statistics endpoint with its raw body
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, endpoint: &str) -> Result<String, FetchError>;
}

impl<P: StatsPayload> ViewController<P> {
    /// Run one fetch through `source`: the initial one if the view is not
    /// mounted yet, otherwise a retry.
    pub async fn load<S: StatsSource + ?Sized>(&mut self, source: &S) -> Completion {
        let ticket = match self.retry() {
            Some(ticket) => ticket,
            None => self.mount(),
        };

        let outcome = source.fetch(ticket.endpoint()).await;
        self.complete(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{ExitPoints, GenderStats};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned responses keyed by endpoint, recording every request
    struct FixedSource {
        responses: HashMap<&'static str, Result<String, FetchError>>,
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StatsSource for FixedSource {
        async fn fetch(&self, endpoint: &str) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(endpoint.to_string());
            self.responses
                .get(endpoint)
                .cloned()
                .unwrap_or(Err(FetchError::Status(404)))
        }
    }

    #[tokio::test]
    async fn test_load_mounts_and_fetches_once() {
        let source = FixedSource {
            responses: HashMap::from([(
                "/api/visits/getexitpoints",
                Ok(r#"{"north": 10, "south": 5, "west": 2, "east": 3}"#.to_string()),
            )]),
            requests: Mutex::new(Vec::new()),
        };
        let mut controller = ViewController::<ExitPoints>::new();

        let completion = controller.load(&source).await;

        assert_eq!(completion, Completion::Applied);
        assert!(controller.is_mounted());
        assert!(controller.state().is_ready());
        assert_eq!(*source.requests.lock().unwrap(), vec!["/api/visits/getexitpoints"]);
    }

    #[tokio::test]
    async fn test_load_reports_error() {
        let source = FixedSource {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        };
        let mut controller = ViewController::<GenderStats>::new();

        controller.load(&source).await;
        assert_eq!(controller.state().error(), Some("Failed to load data. Please try again."));

        controller.load(&source).await;
        assert_eq!(source.requests.lock().unwrap().len(), 2);
    }
}
