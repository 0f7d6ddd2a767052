//! Chart Series
//!
//! The (labels, values, style) data handed to a chart renderer.

use serde::Serialize;

use super::error::SeriesError;

/// One labelled run of values with a parallel color per value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(rename = "data")]
    pub values: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
}

impl Dataset {
    /// Build a dataset from static palettes
    pub fn new(label: &str, values: Vec<f64>, background: &[&str], border: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            values,
            background_color: background.iter().map(|c| c.to_string()).collect(),
            border_color: border.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Labels shared by one or more datasets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    /// Build a series, checking every dataset lines up with the labels
    pub fn new(labels: &[&str], datasets: Vec<Dataset>) -> Result<Self, SeriesError> {
        let expected = labels.len();

        for dataset in &datasets {
            if dataset.values.len() != expected {
                return Err(SeriesError::ValueCount {
                    dataset: dataset.label.clone(),
                    values: dataset.values.len(),
                    labels: expected,
                });
            }

            for colors in [&dataset.background_color, &dataset.border_color] {
                if colors.len() != expected {
                    return Err(SeriesError::ColorCount {
                        dataset: dataset.label.clone(),
                        colors: colors.len(),
                        labels: expected,
                    });
                }
            }
        }

        Ok(Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets,
        })
    }

    /// Number of labels (fixed per chart type)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// First dataset, which single-series charts use exclusively
    pub fn primary(&self) -> Option<&Dataset> {
        self.datasets.first()
    }

    /// Rounded percentage share of each value in a dataset.
    ///
    /// A zero total yields zero for every entry.
    pub fn percentages(&self, dataset: usize) -> Vec<u32> {
        let Some(dataset) = self.datasets.get(dataset) else {
            return Vec::new();
        };

        let total = dataset.total();
        dataset
            .values
            .iter()
            .map(|value| share_percent(*value, total))
            .collect()
    }

    /// Label, value and color of each entry in a dataset, in order
    pub fn entries(&self, dataset: usize) -> Vec<SeriesEntry> {
        let Some(dataset) = self.datasets.get(dataset) else {
            return Vec::new();
        };

        self.labels
            .iter()
            .zip(&dataset.values)
            .zip(&dataset.background_color)
            .map(|((label, value), color)| SeriesEntry {
                label: label.clone(),
                value: *value,
                color: color.clone(),
            })
            .collect()
    }
}

/// A single labelled value, used for legends beside a chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Percentage of `value` in `total`, rounded to the nearest integer
pub fn share_percent(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    ((value / total) * 100.0).round() as u32
}
