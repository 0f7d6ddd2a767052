//! Statistics error types

use thiserror::Error;

/// A response body that does not match the expected aggregate shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Body is not JSON, or a field is missing or not a number
    #[error("Decode error: {0}")]
    Decode(String),

    /// Field holds NaN or an infinity
    #[error("Field {field} is not a finite number")]
    NotFinite { field: &'static str },

    /// Counters and averages are never negative
    #[error("Field {field} is negative: {value}")]
    Negative { field: &'static str, value: f64 },
}

/// A series whose parallel sequences disagree in length
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Dataset {dataset}: {values} values for {labels} labels")]
    ValueCount {
        dataset: String,
        values: usize,
        labels: usize,
    },

    #[error("Dataset {dataset}: {colors} colors for {labels} labels")]
    ColorCount {
        dataset: String,
        colors: usize,
        labels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::Negative { field: "north", value: -2.0 };
        assert_eq!(err.to_string(), "Field north is negative: -2");

        let err = SeriesError::ValueCount {
            dataset: "Visit Duration".to_string(),
            values: 7,
            labels: 8,
        };
        assert_eq!(err.to_string(), "Dataset Visit Duration: 7 values for 8 labels");
    }
}
