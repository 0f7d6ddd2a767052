//! Chart Options
//!
//! Declarative visual options in the JSON shape the Chart.js renderer
//! consumes. Nothing here computes layout or geometry; the renderer does.

use serde::Serialize;
use std::collections::BTreeMap;

/// Chart type understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    EaseOutQuart,
    EaseInOutQuad,
    EaseOutBounce,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl Font {
    pub fn size(size: u32) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = Some("bold".to_string());
        self
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }
}

/// Uniform padding or per-side padding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(u32),
    Sides {
        #[serde(skip_serializing_if = "Option::is_none")]
        top: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bottom: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        right: Option<u32>,
    },
}

impl Padding {
    pub fn vertical(top: u32, bottom: u32) -> Self {
        Padding::Sides {
            top: Some(top),
            bottom: Some(bottom),
            left: None,
            right: None,
        }
    }

    pub fn sides(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Padding::Sides {
            top: Some(top),
            bottom: Some(bottom),
            left: Some(left),
            right: Some(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub font: Font,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_point_style: bool,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub padding: Padding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// How tooltip text is produced for a chart; bound to callbacks by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    /// `"{label}: {value} ({pct}%)"`
    Share,
    /// Title `"{label} minutes"`, body `"{dataset}: {value} visits"`
    Visits,
    /// Title `"Spending: ${label}"`, body `"Shoppers: {value}"`
    Shoppers,
    /// `"{dataset}: {value}"`, salaries in dollars
    CountOrSalary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub padding: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    pub display_colors: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_point_style: bool,
    pub title_font: Font,
    pub body_font: Font,
    #[serde(skip)]
    pub format: TooltipFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
    pub tooltip: Tooltip,
}

/// How axis tick labels are produced; bound to a callback by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickFormat {
    #[default]
    Plain,
    /// Values of 1000 and above render as `"65k"`
    Thousands,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
}

impl Grid {
    pub fn hidden() -> Self {
        Self {
            display: Some(false),
            ..Default::default()
        }
    }

    pub fn faint() -> Self {
        Self {
            color: Some("rgba(0, 0, 0, 0.05)".to_string()),
            line_width: Some(1),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    pub font: Font,
    #[serde(skip)]
    pub format: TickFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl AxisTitle {
    pub fn new(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_string(),
            font: Font::size(14).bold(),
            color: "#555".to_string(),
            padding: None,
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: Easing,
}

/// Animation of a single element property
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyAnimation {
    pub duration: u32,
    pub easing: Easing,
    pub from: f64,
    pub to: f64,
    #[serde(rename = "loop")]
    pub repeat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub padding: Padding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

/// Full option set for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub animations: BTreeMap<&'static str, PropertyAnimation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

impl ChartOptions {
    /// Responsive chart that fills its container
    pub fn new(plugins: Plugins) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins,
            scales: None,
            animation: None,
            animations: BTreeMap::new(),
            layout: None,
            interaction: None,
        }
    }

    /// Tick format of the y axis, if the chart has axes
    pub fn y_tick_format(&self) -> Option<TickFormat> {
        self.scales.as_ref().map(|s| s.y.ticks.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_serialization() {
        assert_eq!(serde_json::to_value(Padding::Uniform(16)).unwrap(), 16);

        let json = serde_json::to_value(Padding::vertical(10, 30)).unwrap();
        assert_eq!(json, serde_json::json!({"top": 10, "bottom": 30}));
    }

    #[test]
    fn test_easing_names() {
        let json = serde_json::to_value(Easing::EaseOutQuart).unwrap();
        assert_eq!(json, "easeOutQuart");
        let json = serde_json::to_value(Easing::EaseInOutQuad).unwrap();
        assert_eq!(json, "easeInOutQuad");
    }

    #[test]
    fn test_font_builder() {
        let font = Font::size(18).bold().family("Inter, sans-serif");
        let json = serde_json::to_value(font).unwrap();
        assert_eq!(json["size"], 18);
        assert_eq!(json["weight"], "bold");
        assert_eq!(json["family"], "Inter, sans-serif");
    }
}
