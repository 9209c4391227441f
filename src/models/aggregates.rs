//! Aggregation result models.
//!
//! This module contains the records produced by the department queries:
//! gender balance, salary-bucket frequencies, and the chart series and
//! summary built from them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Department, Gender};

/// Width of one salary histogram bucket, in currency units.
pub const BUCKET_SIZE: i32 = 1000;

/// Returns the histogram bucket of a salary.
///
/// Integer division truncating toward zero, so 999 lands in bucket 0 and
/// 1000 in bucket 1.
///
/// # Example
///
/// ```
/// use employee_dashboard::models::salary_bucket;
///
/// assert_eq!(salary_bucket(999), 0);
/// assert_eq!(salary_bucket(1000), 1);
/// assert_eq!(salary_bucket(52_499), 52);
/// ```
pub fn salary_bucket(salary: i32) -> i32 {
    salary / BUCKET_SIZE
}

/// Number of rows sharing one `(gender, salary bucket)` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenderIntervalFrequency {
    /// Gender key.
    pub gender: Gender,
    /// Salary bucket key (`salary / BUCKET_SIZE`).
    pub interval: i32,
    /// Number of joined rows with this key.
    pub frequency: u64,
}

impl GenderIntervalFrequency {
    /// Lower bound of the bucket in currency units, used as the chart x value.
    pub fn bucket_start(&self) -> i64 {
        i64::from(self.interval) * i64::from(BUCKET_SIZE)
    }
}

/// Headcount per gender with absent genders reported as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderBalance {
    /// Number of male employees.
    pub male: u64,
    /// Number of female employees.
    pub female: u64,
}

impl GenderBalance {
    /// Builds a balance from a gender count map, defaulting missing keys to 0.
    pub fn from_counts(counts: &HashMap<Gender, u64>) -> Self {
        Self {
            male: counts.get(&Gender::Male).copied().unwrap_or(0),
            female: counts.get(&Gender::Female).copied().unwrap_or(0),
        }
    }

    /// Total headcount.
    pub fn total(&self) -> u64 {
        self.male + self.female
    }
}

/// A single point of a salary distribution series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Bucket start in currency units.
    pub x: i64,
    /// Number of employees in the bucket.
    pub y: u64,
}

/// Salary histogram split into one series per gender, each ascending by x.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDistribution {
    /// Male series.
    pub male: Vec<SeriesPoint>,
    /// Female series.
    pub female: Vec<SeriesPoint>,
}

impl SalaryDistribution {
    /// Splits an unsorted histogram into sorted per-gender series.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_dashboard::models::{Gender, GenderIntervalFrequency, SalaryDistribution};
    ///
    /// let histogram = vec![
    ///     GenderIntervalFrequency { gender: Gender::Male, interval: 3, frequency: 1 },
    ///     GenderIntervalFrequency { gender: Gender::Female, interval: 2, frequency: 4 },
    ///     GenderIntervalFrequency { gender: Gender::Male, interval: 1, frequency: 2 },
    /// ];
    /// let distribution = SalaryDistribution::from_histogram(&histogram);
    /// assert_eq!(distribution.male[0].x, 1000);
    /// assert_eq!(distribution.male[1].x, 3000);
    /// assert_eq!(distribution.female[0].y, 4);
    /// ```
    pub fn from_histogram(histogram: &[GenderIntervalFrequency]) -> Self {
        let mut distribution = Self::default();
        for entry in histogram {
            let point = SeriesPoint {
                x: entry.bucket_start(),
                y: entry.frequency,
            };
            match entry.gender {
                Gender::Male => distribution.male.push(point),
                Gender::Female => distribution.female.push(point),
            }
        }
        distribution.male.sort_by_key(|p| p.x);
        distribution.female.sort_by_key(|p| p.x);
        distribution
    }

    /// Returns the series for one gender.
    pub fn series(&self, gender: Gender) -> &[SeriesPoint] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Everything the dashboard shows for one selected department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// The selected department.
    pub department: Department,
    /// Number of employees with a current salary.
    pub headcount: u64,
    /// Headcount formatted with thousands separators.
    pub headcount_display: String,
    /// Mean current salary.
    pub average_salary: Decimal,
    /// Mean salary truncated to whole units, e.g. `"$52,345"`.
    pub average_salary_display: String,
    /// Headcount per gender.
    pub gender_balance: GenderBalance,
    /// Salary histogram as chart series.
    pub salary_distribution: SalaryDistribution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_truncates_instead_of_rounding() {
        assert_eq!(salary_bucket(999), 0);
        assert_eq!(salary_bucket(1000), 1);
        assert_eq!(salary_bucket(1999), 1);
        assert_eq!(salary_bucket(0), 0);
    }

    #[test]
    fn test_bucket_start_multiplies_by_bucket_size() {
        let entry = GenderIntervalFrequency {
            gender: Gender::Female,
            interval: 52,
            frequency: 7,
        };
        assert_eq!(entry.bucket_start(), 52_000);
    }

    #[test]
    fn test_gender_balance_defaults_missing_gender_to_zero() {
        let counts = HashMap::from([(Gender::Female, 3)]);
        let balance = GenderBalance::from_counts(&counts);
        assert_eq!(balance.male, 0);
        assert_eq!(balance.female, 3);
        assert_eq!(balance.total(), 3);
    }

    #[test]
    fn test_distribution_of_empty_histogram_is_empty() {
        let distribution = SalaryDistribution::from_histogram(&[]);
        assert!(distribution.male.is_empty());
        assert!(distribution.female.is_empty());
    }

    #[test]
    fn test_distribution_sorts_each_series_ascending() {
        let histogram = vec![
            GenderIntervalFrequency { gender: Gender::Female, interval: 70, frequency: 1 },
            GenderIntervalFrequency { gender: Gender::Female, interval: 45, frequency: 2 },
            GenderIntervalFrequency { gender: Gender::Male, interval: 60, frequency: 3 },
            GenderIntervalFrequency { gender: Gender::Female, interval: 50, frequency: 4 },
        ];
        let distribution = SalaryDistribution::from_histogram(&histogram);

        let female_x: Vec<i64> = distribution.series(Gender::Female).iter().map(|p| p.x).collect();
        assert_eq!(female_x, vec![45_000, 50_000, 70_000]);
        assert_eq!(distribution.series(Gender::Male), &[SeriesPoint { x: 60_000, y: 3 }]);
    }
}
