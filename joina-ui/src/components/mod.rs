//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod form_field;
pub mod loading;
pub mod nav;
pub mod toast;
pub mod views;

pub use chart::ChartCanvas;
pub use form_field::FormField;
pub use nav::{HeaderBar, SideNav};
pub use toast::Toast;
pub use views::{ExitPointsChart, GenderStatsChart, SpendingChart, VisitDurationChart};
