//! Chart Renderer delegation
//!
//! Declarative chart configurations handed to an external renderer, plus the
//! process-wide chart type registry.

pub mod config;
pub mod options;
pub mod registry;

pub use config::{ChartConfig, DatasetStyle, TooltipText};
pub use options::{ChartKind, ChartOptions, TickFormat, TooltipFormat};
pub use registry::{ChartRegistry, RegistryError};
