//! Display Formatting
//!
//! Number formatting and derived figures shown around the charts.

use num_format::{Locale, ToFormattedString};

use super::payload::GenderStats;

/// Format a count without a trailing `.0` for whole numbers
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format dollars with thousands separators and no fraction digits
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let dollars = (rounded.abs() as u64).to_formatted_string(&Locale::en);

    format!("{}${}", sign, dollars)
}

/// Axis tick label: thousands collapse to `k`
pub fn format_thousands_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", format_count(value / 1000.0))
    } else {
        format_count(value)
    }
}

/// Summary figures shown under the gender chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenderSummary {
    pub male: f64,
    pub female: f64,
    pub total: f64,
    pub male_salary: f64,
    pub female_salary: f64,
    pub salary_gap: f64,
}

impl GenderSummary {
    pub fn from_stats(stats: &GenderStats) -> Self {
        Self {
            male: stats.male,
            female: stats.female,
            total: stats.male + stats.female,
            male_salary: stats.male_salary,
            female_salary: stats.female_salary,
            salary_gap: (stats.male_salary - stats.female_salary).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(65000.0), "$65,000");
        assert_eq!(format_usd(1234567.4), "$1,234,567");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(-3000.0), "-$3,000");
        assert_eq!(format_usd(12345678901.0), "$12,345,678,901");
        assert_eq!(format_usd(999.0), "$999");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10.0), "10");
        assert_eq!(format_count(40.5), "40.5");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_thousands_tick() {
        assert_eq!(format_thousands_tick(65000.0), "65k");
        assert_eq!(format_thousands_tick(2500.0), "2.5k");
        assert_eq!(format_thousands_tick(999.0), "999");
    }

    #[test]
    fn test_gender_summary() {
        let summary = GenderSummary::from_stats(&GenderStats {
            male: 45.0,
            female: 55.0,
            male_salary: 62000.0,
            female_salary: 65000.0,
        });
        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.salary_gap, 3000.0);
        assert_eq!(format_usd(summary.salary_gap), "$3,000");
    }
}
