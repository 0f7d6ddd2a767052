//! Chart Configuration
//!
//! Assembles series, dataset styling and options into the configuration each
//! view hands to the renderer, and formats the text the renderer asks for
//! through tooltip and tick callbacks.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::options::*;
use crate::stats::transform::SPENDING_LINE;
use crate::stats::{
    format_count, format_thousands_tick, format_usd, share_percent, ChartSeries, ChartView,
};

const FONT_INTER: &str = "Inter, sans-serif";
const FONT_INTER_SYSTEM: &str = "Inter, system-ui, sans-serif";
const TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";

/// Line fill used before the chart area is laid out
pub const LINE_FILL_FALLBACK: &str = "rgba(255, 99, 132, 0.1)";

/// Vertical gradient under the line, bottom stop first
pub const LINE_FILL_STOPS: [(f64, &str); 2] = [
    (0.0, "rgba(255, 99, 132, 0.05)"),
    (1.0, "rgba(255, 99, 132, 0.3)"),
];

/// Per-dataset drawing attributes applied on top of the series colors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hit_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<String>,
}

/// Tooltip text for one hovered entry
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipText {
    /// `None` leaves the renderer's default title in place
    pub title: Option<String>,
    pub label: String,
}

/// Everything the renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub view: ChartView,
    pub data: ChartSeries,
    pub style: DatasetStyle,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Configuration for a view's chart, using that view's fixed presets
    pub fn for_view(view: ChartView, data: ChartSeries) -> Self {
        let (kind, style, options) = match view {
            ChartView::ExitPoints => (ChartKind::Pie, exit_points_style(), exit_points_options()),
            ChartView::VisitDuration => (
                ChartKind::Bar,
                visit_duration_style(),
                visit_duration_options(),
            ),
            ChartView::GenderStats => (ChartKind::Bar, gender_style(), gender_options()),
            ChartView::Spending => (ChartKind::Line, spending_style(), spending_options()),
        };

        Self {
            kind,
            view,
            data,
            style,
            options,
        }
    }

    /// Renderer configuration as JSON: `{type, data: {labels, datasets}, options}`
    pub fn to_json(&self) -> Value {
        let style = to_object(&self.style);

        let datasets: Vec<Value> = self
            .data
            .datasets
            .iter()
            .map(|dataset| {
                let mut object = to_object(dataset);

                if self.kind == ChartKind::Line {
                    // Per-point colors go on the points; the line and its fill are single colors
                    let points = object
                        .remove("backgroundColor")
                        .unwrap_or_else(|| Value::Array(Vec::new()));
                    object.insert("pointBackgroundColor".into(), points.clone());
                    object.insert("pointHoverBackgroundColor".into(), points);
                    object.insert("backgroundColor".into(), json!(LINE_FILL_FALLBACK));
                    object.insert("borderColor".into(), json!(SPENDING_LINE));
                }

                object.extend(style.clone());
                Value::Object(object)
            })
            .collect();

        json!({
            "type": self.kind,
            "data": {
                "labels": self.data.labels,
                "datasets": datasets,
            },
            "options": self.options,
        })
    }

    /// Tooltip text for the entry at `index` of dataset `dataset`
    pub fn tooltip(&self, dataset: usize, index: usize) -> Option<TooltipText> {
        let set = self.data.datasets.get(dataset)?;
        let label = self.data.labels.get(index)?;
        let value = *set.values.get(index)?;

        let text = match self.options.plugins.tooltip.format {
            TooltipFormat::Share => TooltipText {
                title: None,
                label: format!(
                    "{}: {} ({}%)",
                    label,
                    format_count(value),
                    share_percent(value, set.total())
                ),
            },
            TooltipFormat::Visits => TooltipText {
                title: Some(format!("{} minutes", label)),
                label: format!("{}: {} visits", set.label, format_count(value)),
            },
            TooltipFormat::Shoppers => TooltipText {
                title: Some(format!("Spending: ${}", label)),
                label: format!("Shoppers: {}", format_count(value)),
            },
            TooltipFormat::CountOrSalary => {
                let shown = if set.label == crate::stats::transform::GENDER_SALARY_DATASET {
                    format_usd(value)
                } else {
                    format_count(value)
                };
                TooltipText {
                    title: None,
                    label: format!("{}: {}", set.label, shown),
                }
            }
        };

        Some(text)
    }

    /// Gradient stops for the area under a line chart
    pub fn fill_gradient(&self) -> Option<&'static [(f64, &'static str)]> {
        match self.kind {
            ChartKind::Line => Some(&LINE_FILL_STOPS),
            _ => None,
        }
    }

    /// Label for a y axis tick
    pub fn y_tick(&self, value: f64) -> String {
        match self.options.y_tick_format().unwrap_or_default() {
            TickFormat::Plain => format_count(value),
            TickFormat::Thousands => format_thousands_tick(value),
        }
    }
}

fn to_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn top_legend(font: Font) -> Legend {
    Legend {
        position: LegendPosition::Top,
        labels: LegendLabels {
            font,
            use_point_style: true,
            padding: 20,
        },
    }
}

fn title(view: ChartView, font: Font, padding: Padding, color: Option<&str>) -> Title {
    Title {
        display: true,
        text: view.title().to_string(),
        font,
        padding,
        color: color.map(str::to_string),
    }
}

fn exit_points_style() -> DatasetStyle {
    DatasetStyle {
        border_width: Some(2),
        hover_offset: Some(12),
        ..Default::default()
    }
}

fn exit_points_options() -> ChartOptions {
    ChartOptions::new(Plugins {
        legend: Legend {
            position: LegendPosition::Right,
            labels: LegendLabels {
                font: Font::size(14).family(FONT_INTER_SYSTEM),
                use_point_style: false,
                padding: 20,
            },
        },
        title: title(
            ChartView::ExitPoints,
            Font::size(18).bold().family(FONT_INTER_SYSTEM),
            Padding::vertical(10, 30),
            None,
        ),
        tooltip: Tooltip {
            background_color: TOOLTIP_BACKGROUND.to_string(),
            padding: 12,
            corner_radius: None,
            display_colors: true,
            use_point_style: false,
            title_font: Font::size(14),
            body_font: Font::size(13),
            format: TooltipFormat::Share,
        },
    })
}

fn visit_duration_style() -> DatasetStyle {
    DatasetStyle {
        border_width: Some(2),
        border_radius: Some(6),
        border_skipped: Some(false),
        bar_thickness: Some(40),
        ..Default::default()
    }
}

fn visit_duration_options() -> ChartOptions {
    let mut options = ChartOptions::new(Plugins {
        legend: top_legend(Font::size(14).bold()),
        title: title(
            ChartView::VisitDuration,
            Font::size(20).bold(),
            Padding::vertical(10, 30),
            Some("#333"),
        ),
        tooltip: Tooltip {
            background_color: TOOLTIP_BACKGROUND.to_string(),
            padding: 12,
            corner_radius: Some(6),
            display_colors: false,
            use_point_style: false,
            title_font: Font::size(16),
            body_font: Font::size(14),
            format: TooltipFormat::Visits,
        },
    });

    options.scales = Some(Scales {
        x: Axis {
            begin_at_zero: None,
            title: Some(
                AxisTitle::new("Visit Duration Range (minutes)").padding(Padding::Sides {
                    top: Some(10),
                    bottom: None,
                    left: None,
                    right: None,
                }),
            ),
            grid: Grid::hidden(),
            ticks: Ticks {
                font: Font::size(12),
                ..Default::default()
            },
        },
        y: Axis {
            begin_at_zero: Some(true),
            title: Some(AxisTitle::new("Number of Visits")),
            grid: Grid::faint(),
            ticks: Ticks {
                precision: Some(0),
                font: Font::size(12),
                format: TickFormat::Plain,
            },
        },
    });
    options.animation = Some(Animation {
        duration: 2000,
        easing: Easing::EaseOutQuart,
    });
    options.layout = Some(Layout {
        padding: Padding::sides(0, 10, 10, 10),
    });
    options
}

fn gender_style() -> DatasetStyle {
    DatasetStyle {
        border_width: Some(1),
        border_radius: Some(8),
        border_skipped: Some(false),
        bar_percentage: Some(0.7),
        category_percentage: Some(0.7),
        ..Default::default()
    }
}

fn gender_options() -> ChartOptions {
    let mut options = ChartOptions::new(Plugins {
        legend: top_legend(Font::size(12).bold().family(FONT_INTER)),
        title: title(
            ChartView::GenderStats,
            Font::size(18).bold().family(FONT_INTER),
            Padding::vertical(10, 20),
            Some("#333"),
        ),
        tooltip: Tooltip {
            background_color: TOOLTIP_BACKGROUND.to_string(),
            padding: 12,
            corner_radius: Some(6),
            display_colors: true,
            use_point_style: false,
            title_font: Font::size(14).bold(),
            body_font: Font::size(13),
            format: TooltipFormat::CountOrSalary,
        },
    });

    options.scales = Some(Scales {
        x: Axis {
            begin_at_zero: None,
            title: None,
            grid: Grid::hidden(),
            ticks: Ticks {
                font: Font::default().family(FONT_INTER).bold(),
                ..Default::default()
            },
        },
        y: Axis {
            begin_at_zero: Some(true),
            title: None,
            grid: Grid::faint(),
            ticks: Ticks {
                precision: None,
                font: Font::default().family(FONT_INTER),
                format: TickFormat::Thousands,
            },
        },
    });
    options.animation = Some(Animation {
        duration: 1500,
        easing: Easing::EaseOutQuart,
    });
    options.layout = Some(Layout {
        padding: Padding::Uniform(16),
    });
    options
}

fn spending_style() -> DatasetStyle {
    DatasetStyle {
        border_width: Some(3),
        fill: Some(true),
        tension: Some(0.4),
        point_radius: Some(8),
        point_hover_radius: Some(12),
        point_border_color: Some("white".to_string()),
        point_border_width: Some(2),
        point_hit_radius: Some(10),
        point_hover_border_width: Some(3),
        point_hover_border_color: Some("white".to_string()),
        ..Default::default()
    }
}

fn spending_options() -> ChartOptions {
    let mut options = ChartOptions::new(Plugins {
        legend: top_legend(Font::size(14).bold()),
        title: title(
            ChartView::Spending,
            Font::size(20).bold(),
            Padding::vertical(10, 20),
            Some("#333"),
        ),
        tooltip: Tooltip {
            background_color: TOOLTIP_BACKGROUND.to_string(),
            padding: 12,
            corner_radius: Some(6),
            display_colors: true,
            use_point_style: true,
            title_font: Font::size(16),
            body_font: Font::size(14),
            format: TooltipFormat::Shoppers,
        },
    });

    options.scales = Some(Scales {
        x: Axis {
            begin_at_zero: None,
            title: Some(AxisTitle::new("Spending Range ($)").padding(Padding::Uniform(10))),
            grid: Grid::hidden(),
            ticks: Ticks {
                font: Font::size(12),
                ..Default::default()
            },
        },
        y: Axis {
            begin_at_zero: Some(true),
            title: Some(AxisTitle::new("Number of Customers").padding(Padding::Uniform(10))),
            grid: Grid {
                color: Some("rgba(0, 0, 0, 0.05)".to_string()),
                ..Default::default()
            },
            ticks: Ticks {
                precision: Some(0),
                font: Font::size(12),
                format: TickFormat::Plain,
            },
        },
    });
    options.animations.insert(
        "tension",
        PropertyAnimation {
            duration: 1000,
            easing: Easing::EaseInOutQuad,
            from: 0.4,
            to: 0.4,
            repeat: false,
        },
    );
    options.animations.insert(
        "radius",
        PropertyAnimation {
            duration: 1000,
            easing: Easing::EaseOutBounce,
            from: 0.0,
            to: 8.0,
            repeat: false,
        },
    );
    options.layout = Some(Layout {
        padding: Padding::sides(0, 10, 10, 10),
    });
    options.interaction = Some(Interaction {
        mode: "index",
        intersect: false,
    });
    options
}
