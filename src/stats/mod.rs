//! Visit Statistics
//!
//! Payload schemas for the statistics endpoints and the fixed transformers
//! that turn them into chart series.

pub mod error;
pub mod format;
pub mod payload;
pub mod series;
pub mod transform;

pub use error::{SchemaError, SeriesError};
pub use format::{format_count, format_thousands_tick, format_usd, GenderSummary};
pub use payload::{parse_payload, ExitPoints, GenderStats, Spending, StatsPayload, VisitDuration};
pub use series::{share_percent, ChartSeries, Dataset, SeriesEntry};

/// The four chart views on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartView {
    ExitPoints,
    VisitDuration,
    GenderStats,
    Spending,
}

impl ChartView {
    pub const ALL: [ChartView; 4] = [
        ChartView::Spending,
        ChartView::GenderStats,
        ChartView::ExitPoints,
        ChartView::VisitDuration,
    ];

    /// Endpoint the view fetches on mount
    pub fn endpoint(&self) -> &'static str {
        match self {
            ChartView::ExitPoints => ExitPoints::ENDPOINT,
            ChartView::VisitDuration => VisitDuration::ENDPOINT,
            ChartView::GenderStats => GenderStats::ENDPOINT,
            ChartView::Spending => Spending::ENDPOINT,
        }
    }

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            ChartView::ExitPoints => "Visitor Exit Points Distribution",
            ChartView::VisitDuration => "Visit Duration Distribution",
            ChartView::GenderStats => "Gender Distribution & Salary Comparison",
            ChartView::Spending => "Customer Spending Distribution",
        }
    }

    /// Heading of the dashboard card holding the chart
    pub fn section(&self) -> &'static str {
        match self {
            ChartView::Spending => "Trend Analysis",
            ChartView::GenderStats => "Comparative Data",
            ChartView::ExitPoints => "Distribution Breakdown",
            ChartView::VisitDuration => "Frequency Analysis",
        }
    }

    /// Generic message shown when the fetch fails for any reason
    pub fn error_message(&self) -> &'static str {
        match self {
            ChartView::ExitPoints => "Failed to load exit point data. Please try again later.",
            ChartView::GenderStats => "Failed to load data. Please try again.",
            ChartView::VisitDuration | ChartView::Spending => "Failed to load chart data",
        }
    }

    /// Message shown while the fetch is in flight
    pub fn loading_message(&self) -> &'static str {
        match self {
            ChartView::GenderStats => "Loading statistics...",
            _ => "Loading chart data...",
        }
    }

    /// Short name used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            ChartView::ExitPoints => "exit-points",
            ChartView::VisitDuration => "visit-duration",
            ChartView::GenderStats => "gender",
            ChartView::Spending => "spending",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.slug() == slug)
    }
}

impl std::fmt::Display for ChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ChartView::ExitPoints.endpoint(), "/api/visits/getexitpoints");
        assert_eq!(ChartView::VisitDuration.endpoint(), "/api/visits/getvisitduration");
        assert_eq!(ChartView::GenderStats.endpoint(), "/api/visits/getstats");
        assert_eq!(ChartView::Spending.endpoint(), "/api/visits/getspending");
    }

    #[test]
    fn test_slug_round_trip() {
        for view in ChartView::ALL {
            assert_eq!(ChartView::from_slug(view.slug()), Some(view));
        }
        assert_eq!(ChartView::from_slug("radar"), None);
    }
}
