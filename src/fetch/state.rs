//! View fetch state

use crate::chart::ChartConfig;
use crate::stats::{ChartSeries, StatsPayload};

/// Lifecycle phase of one view's data
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    /// User-facing message
    Error(String),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Error(message) => FetchState::Error(message),
            FetchState::Ready(data) => FetchState::Ready(f(data)),
        }
    }

    /// Short phase name for logs and CLI output
    pub fn phase(&self) -> &'static str {
        match self {
            FetchState::Loading => "loading",
            FetchState::Error(_) => "error",
            FetchState::Ready(_) => "ready",
        }
    }
}

/// Validated payload of a ready view together with its chart series
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData<P> {
    pub payload: P,
    pub series: ChartSeries,
}

impl<P: StatsPayload> ViewData<P> {
    pub fn new(payload: P) -> Self {
        let series = payload.to_series();
        Self { payload, series }
    }

    /// Renderer configuration for this data
    pub fn chart(&self) -> ChartConfig {
        ChartConfig::for_view(P::VIEW, self.series.clone())
    }
}
