//! Grouped reductions over joined department rows.
//!
//! Each aggregator consumes its own parallel stream of [`JoinedRecord`]s and
//! reduces it with rayon's fold/reduce. Every combine step is a sum, so the
//! result does not depend on how rayon splits the work.

use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::models::{Gender, GenderIntervalFrequency, JoinedRecord, salary_bucket};

fn merge_counts<K: Eq + Hash>(mut into: HashMap<K, u64>, from: HashMap<K, u64>) -> HashMap<K, u64> {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
    into
}

/// Counts joined rows per gender.
///
/// Only genders that occur are present in the map; callers default missing
/// keys to zero.
///
/// # Example
///
/// ```
/// use employee_dashboard::query::count_by_gender;
/// use employee_dashboard::models::JoinedRecord;
/// use rayon::prelude::*;
///
/// let records: Vec<JoinedRecord<'_>> = Vec::new();
/// assert!(count_by_gender(records.into_par_iter()).is_empty());
/// ```
pub fn count_by_gender<'a, I>(records: I) -> HashMap<Gender, u64>
where
    I: ParallelIterator<Item = JoinedRecord<'a>>,
{
    records
        .fold(HashMap::new, |mut counts: HashMap<Gender, u64>, record| {
            *counts.entry(record.employee.gender).or_insert(0) += 1;
            counts
        })
        .reduce(HashMap::new, merge_counts)
}

/// Arithmetic mean of the joined salaries.
///
/// Returns zero for an empty stream.
pub fn average_salary<'a, I>(records: I) -> Decimal
where
    I: ParallelIterator<Item = JoinedRecord<'a>>,
{
    let (total, count) = records
        .map(|record| (i64::from(record.salary.salary), 1u64))
        .reduce(|| (0, 0), |(t1, c1), (t2, c2)| (t1 + t2, c1 + c2));

    if count == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(total) / Decimal::from(count)
}

/// Counts joined rows per `(gender, salary bucket)`.
///
/// The result is unsorted; see
/// [`SalaryDistribution::from_histogram`](crate::models::SalaryDistribution::from_histogram)
/// for the per-gender chart series.
pub fn salary_histogram<'a, I>(records: I) -> Vec<GenderIntervalFrequency>
where
    I: ParallelIterator<Item = JoinedRecord<'a>>,
{
    records
        .fold(
            HashMap::new,
            |mut counts: HashMap<(Gender, i32), u64>, record| {
                let key = (record.employee.gender, salary_bucket(record.salary.salary));
                *counts.entry(key).or_insert(0) += 1;
                counts
            },
        )
        .reduce(HashMap::new, merge_counts)
        .into_iter()
        .map(|((gender, interval), frequency)| GenderIntervalFrequency {
            gender,
            interval,
            frequency,
        })
        .collect()
}
