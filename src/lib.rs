//! # Joina
//!
//! Core of the Joina analytics dashboard: per-view data fetching, payload
//! validation, chart configuration, forms and the navigation shell.
//!
//! ## Modules
//!
//! - [`fetch`]: `loading | error | ready` lifecycle of a chart view
//! - [`stats`]: statistics payloads and their chart series
//! - [`chart`]: declarative chart configuration for the renderer
//! - [`forms`]: login, register and settings forms
//! - [`shell`]: current view selection and session
//! - [`api`]: native HTTP client (feature `native`)
//!
//! The browser front end builds this crate without default features and
//! performs its own requests; the controllers here never do I/O.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use joina::{ApiClient, Config, ViewController};
//! use joina::stats::ExitPoints;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ApiClient::new(&config.api)?;
//!
//!     let mut view = ViewController::<ExitPoints>::new();
//!     view.load(&client).await;
//!
//!     if let Some(data) = view.state().data() {
//!         println!("{:?}", data.series.percentages(0));
//!     }
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod fetch;
pub mod forms;
pub mod shell;
pub mod stats;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use chart::{ChartConfig, ChartKind, ChartRegistry};

pub use fetch::{Completion, FetchError, FetchState, FetchTicket, ViewController, ViewData};

pub use forms::{
    FormController, FormError, FormKind, FormState, FormStatus, Settings, SubmitOutcome,
    Submission,
};

pub use shell::{CurrentView, Session};

pub use stats::{ChartSeries, ChartView, SchemaError, SeriesError, StatsPayload};

#[cfg(feature = "native")]
pub use api::{ApiClient, ApiError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use fetch::StatsSource;
