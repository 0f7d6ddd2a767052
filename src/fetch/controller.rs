//! View-State Controller
//!
//! Drives one chart view through `loading -> ready | error`. The controller
//! does no I/O itself: [`ViewController::mount`] and [`ViewController::retry`]
//! hand out a [`FetchTicket`] naming the request to make, and the caller
//! reports the outcome through [`ViewController::complete`].
//!
//! Every ticket carries a generation. Only the newest ticket of a mounted
//! controller may change state, so a slow response that lands after a retry
//! or after the view was torn down is dropped.

use chrono::{DateTime, Utc};

use super::error::FetchError;
use super::state::{FetchState, ViewData};
use crate::stats::{parse_payload, ChartView, StatsPayload};

/// One issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    endpoint: &'static str,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }
}

/// What happened to a reported fetch outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// State changed to ready or error
    Applied,
    /// A newer ticket was issued after this one
    Stale,
    /// The view is no longer mounted
    Unmounted,
}

#[derive(Debug)]
pub struct ViewController<P: StatsPayload> {
    state: FetchState<ViewData<P>>,
    generation: u64,
    mounted: bool,
    last_updated: Option<DateTime<Utc>>,
}

impl<P: StatsPayload> Default for ViewController<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: StatsPayload> ViewController<P> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
            mounted: false,
            last_updated: None,
        }
    }

    pub fn view(&self) -> ChartView {
        P::VIEW
    }

    pub fn state(&self) -> &FetchState<ViewData<P>> {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// When the view last became ready
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Enter loading and issue the initial fetch
    pub fn mount(&mut self) -> FetchTicket {
        self.mounted = true;
        self.begin()
    }

    /// Re-enter loading and issue a fresh fetch, superseding any in flight.
    ///
    /// Returns `None` once the view has been unmounted.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }
        Some(self.begin())
    }

    /// Tear the view down; outstanding tickets can no longer change state
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!(view = %P::VIEW, "view unmounted");
        }
        self.mounted = false;
    }

    /// Apply the outcome of `ticket`'s request
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<String, FetchError>) -> Completion {
        if !self.mounted {
            tracing::debug!(view = %P::VIEW, generation = ticket.generation, "dropping result for unmounted view");
            return Completion::Unmounted;
        }
        if ticket.generation != self.generation {
            tracing::debug!(
                view = %P::VIEW,
                generation = ticket.generation,
                current = self.generation,
                "dropping superseded result"
            );
            return Completion::Stale;
        }

        let parsed = outcome.and_then(|body| parse_payload::<P>(&body).map_err(FetchError::from));

        self.state = match parsed {
            Ok(payload) => {
                self.last_updated = Some(Utc::now());
                tracing::debug!(view = %P::VIEW, "view ready");
                FetchState::Ready(ViewData::new(payload))
            }
            Err(e) => {
                tracing::warn!(view = %P::VIEW, endpoint = ticket.endpoint, error = %e, "fetch failed");
                FetchState::Error(P::VIEW.error_message().to_string())
            }
        };

        Completion::Applied
    }

    fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;

        FetchTicket {
            generation: self.generation,
            endpoint: P::ENDPOINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{ExitPoints, GenderStats, Spending, VisitDuration};

    const EXIT_BODY: &str = r#"{"north": 10, "south": 5, "west": 2, "east": 3}"#;

    #[test]
    fn test_mount_issues_one_fetch() {
        let mut controller = ViewController::<ExitPoints>::new();
        assert!(controller.state().is_loading());

        let ticket = controller.mount();
        assert_eq!(ticket.endpoint(), "/api/visits/getexitpoints");
        assert!(controller.state().is_loading());
        assert!(controller.is_mounted());
    }

    #[test]
    fn test_success_becomes_ready() {
        let mut controller = ViewController::<ExitPoints>::new();
        let ticket = controller.mount();

        let completion = controller.complete(ticket, Ok(EXIT_BODY.to_string()));

        assert_eq!(completion, Completion::Applied);
        let data = controller.state().data().unwrap();
        assert_eq!(data.payload.north, 10.0);
        assert_eq!(data.series.percentages(0), vec![50, 25, 10, 15]);
        assert!(controller.last_updated().is_some());
    }

    #[test]
    fn test_server_error_shows_generic_message() {
        let mut controller = ViewController::<Spending>::new();
        let ticket = controller.mount();

        controller.complete(ticket, Err(FetchError::Status(500)));

        assert_eq!(controller.state().error(), Some("Failed to load chart data"));
        assert!(controller.last_updated().is_none());
    }

    #[test]
    fn test_network_error_message_per_view() {
        let mut exit = ViewController::<ExitPoints>::new();
        let ticket = exit.mount();
        exit.complete(ticket, Err(FetchError::Network("connection refused".into())));
        assert_eq!(
            exit.state().error(),
            Some("Failed to load exit point data. Please try again later.")
        );

        let mut gender = ViewController::<GenderStats>::new();
        let ticket = gender.mount();
        gender.complete(ticket, Err(FetchError::Network("timeout".into())));
        assert_eq!(gender.state().error(), Some("Failed to load data. Please try again."));
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let mut controller = ViewController::<VisitDuration>::new();
        let ticket = controller.mount();

        controller.complete(ticket, Ok(r#"{"firstrange": 3}"#.to_string()));

        assert_eq!(controller.state().error(), Some("Failed to load chart data"));
    }

    #[test]
    fn test_retry_after_error() {
        let mut controller = ViewController::<ExitPoints>::new();
        let first = controller.mount();
        controller.complete(first, Err(FetchError::Status(503)));
        assert!(controller.state().error().is_some());

        let second = controller.retry().unwrap();
        assert!(controller.state().is_loading());
        assert_ne!(first.generation(), second.generation());

        controller.complete(second, Ok(EXIT_BODY.to_string()));
        assert!(controller.state().is_ready());
    }

    #[test]
    fn test_repeated_retry_keeps_only_latest() {
        let mut controller = ViewController::<ExitPoints>::new();
        let first = controller.mount();
        let second = controller.retry().unwrap();
        let third = controller.retry().unwrap();

        assert_eq!(controller.complete(first, Ok(EXIT_BODY.to_string())), Completion::Stale);
        assert_eq!(controller.complete(second, Err(FetchError::Status(500))), Completion::Stale);
        assert!(controller.state().is_loading());

        assert_eq!(controller.complete(third, Ok(EXIT_BODY.to_string())), Completion::Applied);
        assert!(controller.state().is_ready());
    }

    #[test]
    fn test_completion_after_unmount_is_dropped() {
        let mut controller = ViewController::<ExitPoints>::new();
        let ticket = controller.mount();
        controller.unmount();

        let completion = controller.complete(ticket, Ok(EXIT_BODY.to_string()));

        assert_eq!(completion, Completion::Unmounted);
        assert!(controller.state().is_loading());
        assert!(controller.retry().is_none());
    }

    #[test]
    fn test_refresh_from_ready() {
        let mut controller = ViewController::<ExitPoints>::new();
        let ticket = controller.mount();
        controller.complete(ticket, Ok(EXIT_BODY.to_string()));
        assert!(controller.state().is_ready());

        let ticket = controller.retry().unwrap();
        assert!(controller.state().is_loading());
        controller.complete(ticket, Ok(r#"{"north": 1, "south": 1, "west": 1, "east": 1}"#.to_string()));
        assert_eq!(controller.state().data().unwrap().payload.north, 1.0);
    }
}
