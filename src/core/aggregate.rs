use std::cmp::Reverse;
use std::hash::Hash;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;

use crate::error::{ChartError, ChartResult};

/// Groups `records` by `key_of` and sums `measure_of` within each group.
///
/// Keys keep the order of their first appearance in `records`. An empty input
/// yields an empty map. Any non-finite measure fails the whole call with
/// [`ChartError::InvalidMeasure`] carrying the offending record index; a group
/// sum that overflows fails with [`ChartError::SumOverflow`] naming the record
/// that pushed it past `f64::MAX`.
pub fn aggregate<R, K, KF, MF>(
    records: &[R],
    key_of: KF,
    measure_of: MF,
) -> ChartResult<IndexMap<K, f64>>
where
    K: Eq + Hash,
    KF: Fn(&R) -> K,
    MF: Fn(&R) -> f64,
{
    let mut groups: IndexMap<K, f64> = IndexMap::new();
    for (index, record) in records.iter().enumerate() {
        let value = finite_measure(index, measure_of(record))?;
        accumulate(groups.entry(key_of(record)).or_insert(0.0), index, value)?;
    }

    debug!(
        records = records.len(),
        groups = groups.len(),
        "aggregate records"
    );
    Ok(groups)
}

/// Parallel variant of [`aggregate`] with the same contract.
///
/// Key order of the result depends on how rayon splits the input; compare
/// results as maps, not as sequences. When merging partial sums overflows,
/// the sequential pass is rerun so the error names the offending record.
#[cfg(feature = "parallel-aggregation")]
pub fn aggregate_parallel<R, K, KF, MF>(
    records: &[R],
    key_of: KF,
    measure_of: MF,
) -> ChartResult<IndexMap<K, f64>>
where
    R: Sync,
    K: Eq + Hash + Send,
    KF: Fn(&R) -> K + Sync,
    MF: Fn(&R) -> f64 + Sync,
{
    let groups = records
        .par_iter()
        .enumerate()
        .try_fold(IndexMap::new, |mut acc: IndexMap<K, f64>, (index, record)| {
            let value = finite_measure(index, measure_of(record))?;
            accumulate(acc.entry(key_of(record)).or_insert(0.0), index, value)?;
            Ok::<_, ChartError>(acc)
        })
        .try_reduce(IndexMap::new, |mut left, right| {
            for (key, value) in right {
                *left.entry(key).or_insert(0.0) += value;
            }
            Ok(left)
        })?;

    if groups.values().any(|sum| !sum.is_finite()) {
        return aggregate(records, key_of, measure_of);
    }

    debug!(
        records = records.len(),
        groups = groups.len(),
        "aggregate records in parallel"
    );
    Ok(groups)
}

/// Flattens groups into `(key, sum)` pairs ordered by descending sum.
///
/// Equal sums keep their map order.
#[must_use]
pub fn sorted_by_value_desc<K>(groups: IndexMap<K, f64>) -> Vec<(K, f64)> {
    let mut entries: Vec<(K, f64)> = groups.into_iter().collect();
    entries.sort_by_key(|(_, value)| Reverse(OrderedFloat(*value)));
    entries
}

/// Flattens groups into `(key, sum)` pairs ordered by ascending key.
#[must_use]
pub fn sorted_by_key<K: Ord>(groups: IndexMap<K, f64>) -> Vec<(K, f64)> {
    let mut entries: Vec<(K, f64)> = groups.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Returns the `n` records with the largest measure, largest first.
///
/// Ties keep input order. Every measure is validated, including those that
/// end up outside the top `n`.
pub fn top_n_by<R, MF>(records: &[R], measure_of: MF, n: usize) -> ChartResult<Vec<&R>>
where
    MF: Fn(&R) -> f64,
{
    let mut ranked = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let value = finite_measure(index, measure_of(record))?;
        ranked.push((OrderedFloat(value), record));
    }
    ranked.sort_by_key(|(value, _)| Reverse(*value));
    ranked.truncate(n);

    trace!(records = records.len(), kept = ranked.len(), "top n by measure");
    Ok(ranked.into_iter().map(|(_, record)| record).collect())
}

/// Sums a sequence of values.
#[must_use]
pub fn total<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

fn accumulate(sum: &mut f64, index: usize, value: f64) -> ChartResult<()> {
    let next = *sum + value;
    if !next.is_finite() {
        return Err(ChartError::SumOverflow { index });
    }
    *sum = next;
    Ok(())
}

fn finite_measure(index: usize, value: f64) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidMeasure { index, value })
    }
}
