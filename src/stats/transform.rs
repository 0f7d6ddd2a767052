//! Data Transformers
//!
//! Fixed relabelings from aggregate payloads to chart series. Each chart has
//! hardcoded labels, ordering and palette; values pass through untouched.

use super::payload::{ExitPoints, GenderStats, Spending, VisitDuration};
use super::series::{ChartSeries, Dataset};

pub const EXIT_POINT_LABELS: [&str; 4] = ["North Exit", "South Exit", "West Exit", "East Exit"];

const EXIT_POINT_BACKGROUND: [&str; 4] = [
    "rgba(255, 99, 132, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 206, 86, 0.8)",
    "rgba(75, 192, 192, 0.8)",
];

const EXIT_POINT_BORDER: [&str; 4] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(75, 192, 192, 1)",
];

pub const VISIT_DURATION_LABELS: [&str; 8] = [
    "0-20", "21-40", "41-60", "61-80", "81-100", "101-120", "121-140", "141-160",
];

// Blue to purple gradient
const VISIT_DURATION_BACKGROUND: [&str; 8] = [
    "rgba(53, 162, 235, 0.8)",
    "rgba(75, 138, 220, 0.8)",
    "rgba(94, 114, 206, 0.8)",
    "rgba(113, 90, 192, 0.8)",
    "rgba(132, 66, 177, 0.8)",
    "rgba(151, 42, 163, 0.8)",
    "rgba(170, 18, 149, 0.8)",
    "rgba(187, 0, 134, 0.8)",
];

const VISIT_DURATION_BORDER: [&str; 8] = [
    "rgba(53, 162, 235, 1)",
    "rgba(75, 138, 220, 1)",
    "rgba(94, 114, 206, 1)",
    "rgba(113, 90, 192, 1)",
    "rgba(132, 66, 177, 1)",
    "rgba(151, 42, 163, 1)",
    "rgba(170, 18, 149, 1)",
    "rgba(187, 0, 134, 1)",
];

pub const GENDER_LABELS: [&str; 2] = ["Male", "Female"];

pub const GENDER_COUNT_DATASET: &str = "Count";
pub const GENDER_SALARY_DATASET: &str = "Average Salary ($)";

const GENDER_COUNT_BACKGROUND: [&str; 2] = ["rgba(54, 162, 235, 0.8)", "rgba(75, 192, 192, 0.8)"];
const GENDER_COUNT_BORDER: [&str; 2] = ["rgba(54, 162, 235, 1)", "rgba(75, 192, 192, 1)"];
const GENDER_SALARY_BACKGROUND: [&str; 2] = ["rgba(255, 99, 132, 0.8)", "rgba(255, 159, 64, 0.8)"];
const GENDER_SALARY_BORDER: [&str; 2] = ["rgba(255, 99, 132, 1)", "rgba(255, 159, 64, 1)"];

pub const SPENDING_LABELS: [&str; 5] = ["0-200", "201-400", "401-600", "601-800", "801+"];

const SPENDING_POINTS: [&str; 5] = [
    "rgba(255, 99, 132, 1)",
    "rgba(255, 159, 64, 1)",
    "rgba(255, 205, 86, 1)",
    "rgba(75, 192, 192, 1)",
    "rgba(54, 162, 235, 1)",
];

/// The line itself is drawn in a single color
pub const SPENDING_LINE: &str = "rgba(255, 99, 132, 1)";

const SPENDING_LINE_BORDER: [&str; 5] = [SPENDING_LINE; 5];

/// Build a series from palettes whose lengths are fixed by the constants above
fn fixed(labels: &[&str], datasets: Vec<Dataset>) -> ChartSeries {
    match ChartSeries::new(labels, datasets) {
        Ok(series) => series,
        // Palettes and labels are compile-time constants of equal length
        Err(e) => unreachable!("fixed chart palette out of shape: {}", e),
    }
}

pub fn exit_points(data: &ExitPoints) -> ChartSeries {
    fixed(
        &EXIT_POINT_LABELS,
        vec![Dataset::new(
            "Visitor Exit Points",
            vec![data.north, data.south, data.west, data.east],
            &EXIT_POINT_BACKGROUND,
            &EXIT_POINT_BORDER,
        )],
    )
}

pub fn visit_duration(data: &VisitDuration) -> ChartSeries {
    fixed(
        &VISIT_DURATION_LABELS,
        vec![Dataset::new(
            "Visit Duration",
            vec![
                data.firstrange,
                data.secondrange,
                data.thirdrange,
                data.forthrange,
                data.fifthrange,
                data.sixthrange,
                data.seventhrange,
                data.lastrange,
            ],
            &VISIT_DURATION_BACKGROUND,
            &VISIT_DURATION_BORDER,
        )],
    )
}

pub fn gender_stats(data: &GenderStats) -> ChartSeries {
    fixed(
        &GENDER_LABELS,
        vec![
            Dataset::new(
                GENDER_COUNT_DATASET,
                vec![data.male, data.female],
                &GENDER_COUNT_BACKGROUND,
                &GENDER_COUNT_BORDER,
            ),
            Dataset::new(
                GENDER_SALARY_DATASET,
                vec![data.male_salary, data.female_salary],
                &GENDER_SALARY_BACKGROUND,
                &GENDER_SALARY_BORDER,
            ),
        ],
    )
}

pub fn spending(data: &Spending) -> ChartSeries {
    fixed(
        &SPENDING_LABELS,
        vec![Dataset::new(
            "Number of Shoppers",
            vec![
                data.lowerrange,
                data.lowermiddlerange,
                data.middlerange,
                data.uppermiddlerange,
                data.upperrange,
            ],
            &SPENDING_POINTS,
            &SPENDING_LINE_BORDER,
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::payload::{parse_payload, StatsPayload};

    #[test]
    fn test_exit_points_scenario() {
        let data: ExitPoints =
            parse_payload(r#"{"north": 10, "south": 5, "west": 2, "east": 3}"#).unwrap();
        let series = data.to_series();

        assert_eq!(
            series.labels,
            vec!["North Exit", "South Exit", "West Exit", "East Exit"]
        );
        assert_eq!(series.datasets[0].values, vec![10.0, 5.0, 2.0, 3.0]);
        assert_eq!(series.percentages(0), vec![50, 25, 10, 15]);
        assert_eq!(series.percentages(0).iter().sum::<u32>(), 100);
    }

    #[test]
    fn test_visit_duration_all_zero() {
        let data = VisitDuration {
            firstrange: 0.0,
            secondrange: 0.0,
            thirdrange: 0.0,
            forthrange: 0.0,
            fifthrange: 0.0,
            sixthrange: 0.0,
            seventhrange: 0.0,
            lastrange: 0.0,
        };
        let series = data.to_series();

        assert_eq!(series.len(), 8);
        assert!(series.datasets[0].values.iter().all(|v| *v == 0.0));
        assert!(series.percentages(0).iter().all(|p| *p == 0));
    }

    #[test]
    fn test_values_pass_through_unchanged() {
        let data = Spending {
            lowerrange: 12.0,
            lowermiddlerange: 40.5,
            middlerange: 33.0,
            uppermiddlerange: 7.0,
            upperrange: 1.0,
        };
        let series = data.to_series();
        let expected: Vec<f64> = data.fields().into_iter().map(|(_, v)| v).collect();

        assert_eq!(series.len(), SPENDING_LABELS.len());
        assert_eq!(series.datasets[0].values, expected);
        assert_eq!(series.datasets[0].border_color, vec![SPENDING_LINE; 5]);
    }

    #[test]
    fn test_gender_stats_two_datasets() {
        let data = GenderStats {
            male: 45.0,
            female: 55.0,
            male_salary: 65000.0,
            female_salary: 62000.0,
        };
        let series = data.to_series();

        assert_eq!(series.labels, vec!["Male", "Female"]);
        assert_eq!(series.datasets.len(), 2);
        assert_eq!(series.datasets[0].label, GENDER_COUNT_DATASET);
        assert_eq!(series.datasets[0].values, vec![45.0, 55.0]);
        assert_eq!(series.datasets[1].label, GENDER_SALARY_DATASET);
        assert_eq!(series.datasets[1].values, vec![65000.0, 62000.0]);
    }

    #[test]
    fn test_series_length_matches_labels() {
        let exit = ExitPoints { north: 1.0, south: 1.0, west: 1.0, east: 1.0 };
        assert_eq!(exit.to_series().len(), EXIT_POINT_LABELS.len());
        for dataset in &exit.to_series().datasets {
            assert_eq!(dataset.values.len(), dataset.background_color.len());
            assert_eq!(dataset.values.len(), dataset.border_color.len());
        }
    }
}
