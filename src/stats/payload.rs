//! Aggregate Payloads
//!
//! Typed records for the JSON bodies returned by the visit statistics
//! endpoints. Deserialization fails on missing or non-numeric fields, and
//! [`StatsPayload::validate`] rejects values no counter can hold.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::SchemaError;
use super::series::ChartSeries;
use super::ChartView;

/// A fixed-shape aggregate returned by one statistics endpoint
pub trait StatsPayload: DeserializeOwned + Clone + std::fmt::Debug + 'static {
    /// Endpoint path relative to the API base URL
    const ENDPOINT: &'static str;

    /// The chart view this payload feeds
    const VIEW: ChartView;

    /// Named numeric fields in wire order
    fn fields(&self) -> Vec<(&'static str, f64)>;

    /// Reshape into the chart series for [`Self::VIEW`]
    fn to_series(&self) -> ChartSeries;

    /// Check every field holds a finite, non-negative number
    fn validate(&self) -> Result<(), SchemaError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(SchemaError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(SchemaError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Decode and validate a raw response body
pub fn parse_payload<P: StatsPayload>(body: &str) -> Result<P, SchemaError> {
    let payload: P =
        serde_json::from_str(body).map_err(|e| SchemaError::Decode(e.to_string()))?;
    payload.validate()?;
    Ok(payload)
}

/// Visitor counts per exit gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitPoints {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

/// Visit counts per duration bucket (minutes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitDuration {
    pub firstrange: f64,
    pub secondrange: f64,
    pub thirdrange: f64,
    pub forthrange: f64,
    pub fifthrange: f64,
    pub sixthrange: f64,
    pub seventhrange: f64,
    pub lastrange: f64,
}

/// Visitor counts and average salary by gender
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderStats {
    pub male: f64,
    pub female: f64,
    pub male_salary: f64,
    pub female_salary: f64,
}

/// Shopper counts per spending bucket (dollars)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spending {
    pub lowerrange: f64,
    pub lowermiddlerange: f64,
    pub middlerange: f64,
    pub uppermiddlerange: f64,
    pub upperrange: f64,
}

impl StatsPayload for ExitPoints {
    const ENDPOINT: &'static str = "/api/visits/getexitpoints";
    const VIEW: ChartView = ChartView::ExitPoints;

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("north", self.north),
            ("south", self.south),
            ("west", self.west),
            ("east", self.east),
        ]
    }

    fn to_series(&self) -> ChartSeries {
        super::transform::exit_points(self)
    }
}

impl StatsPayload for VisitDuration {
    const ENDPOINT: &'static str = "/api/visits/getvisitduration";
    const VIEW: ChartView = ChartView::VisitDuration;

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("firstrange", self.firstrange),
            ("secondrange", self.secondrange),
            ("thirdrange", self.thirdrange),
            ("forthrange", self.forthrange),
            ("fifthrange", self.fifthrange),
            ("sixthrange", self.sixthrange),
            ("seventhrange", self.seventhrange),
            ("lastrange", self.lastrange),
        ]
    }

    fn to_series(&self) -> ChartSeries {
        super::transform::visit_duration(self)
    }
}

impl StatsPayload for GenderStats {
    const ENDPOINT: &'static str = "/api/visits/getstats";
    const VIEW: ChartView = ChartView::GenderStats;

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("male", self.male),
            ("female", self.female),
            ("male_salary", self.male_salary),
            ("female_salary", self.female_salary),
        ]
    }

    fn to_series(&self) -> ChartSeries {
        super::transform::gender_stats(self)
    }
}

impl StatsPayload for Spending {
    const ENDPOINT: &'static str = "/api/visits/getspending";
    const VIEW: ChartView = ChartView::Spending;

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("lowerrange", self.lowerrange),
            ("lowermiddlerange", self.lowermiddlerange),
            ("middlerange", self.middlerange),
            ("uppermiddlerange", self.uppermiddlerange),
            ("upperrange", self.upperrange),
        ]
    }

    fn to_series(&self) -> ChartSeries {
        super::transform::spending(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exit_points() {
        let payload: ExitPoints =
            parse_payload(r#"{"north": 10, "south": 5, "west": 2, "east": 3}"#).unwrap();
        assert_eq!(payload.north, 10.0);
        assert_eq!(payload.east, 3.0);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload: GenderStats = parse_payload(
            r#"{"male": 45, "female": 55, "male_salary": 65000, "female_salary": 62000, "_id": "x"}"#,
        )
        .unwrap();
        assert_eq!(payload.female_salary, 62000.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = parse_payload::<ExitPoints>(r#"{"north": 10, "south": 5, "west": 2}"#);
        assert!(matches!(result, Err(SchemaError::Decode(_))));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let result = parse_payload::<Spending>(
            r#"{"lowerrange": "ten", "lowermiddlerange": 1, "middlerange": 1,
                "uppermiddlerange": 1, "upperrange": 1}"#,
        );
        assert!(matches!(result, Err(SchemaError::Decode(_))));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let result = parse_payload::<ExitPoints>(r#"{"north": -1, "south": 5, "west": 2, "east": 3}"#);
        match result {
            Err(SchemaError::Negative { field, value }) => {
                assert_eq!(field, "north");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected negative error, got {:?}", other),
        }
    }

    #[test]
    fn test_body_not_json() {
        let result = parse_payload::<VisitDuration>("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(SchemaError::Decode(_))));
    }

    #[test]
    fn test_fields_follow_wire_order() {
        let payload = VisitDuration {
            firstrange: 1.0,
            secondrange: 2.0,
            thirdrange: 3.0,
            forthrange: 4.0,
            fifthrange: 5.0,
            sixthrange: 6.0,
            seventhrange: 7.0,
            lastrange: 8.0,
        };
        let values: Vec<f64> = payload.fields().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
