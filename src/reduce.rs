//! Range reducer (4.F): per-group numeric summaries over a contiguous
//! `[start, end)` slice of a value column.
//!
//! The reducer has no error channel: it makes no promise about the
//! post-call ordering of `V` on the quantile path either. An empty slice
//! (`start == end`) is a caller bug with undefined behavior at the API
//! level; this implementation returns `NaN` rather than panicking.
//!
//! All comparisons use [`f64::total_cmp`] (a total order by bit pattern),
//! since order-sensitive float comparators beyond that are out of scope.

/// Tagged dispatch for the reducer, matching Design Notes §9: "switch on
/// function name or code expressed as a tagged-variant dispatch;
/// percentile is a parameterized case, not a separate family." `Quantile`
/// also serves as `median` (`Quantile(50.0)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReduceCode {
    Sum,
    Mean,
    Sd,
    Min,
    Max,
    Count,
    Percent,
    Iqr,
    First,
    FirstNm,
    Last,
    LastNm,
    Quantile(f64),
}

/// Applies `code` to `v[start..end)`. `v` is the *whole* value column, not
/// just the slice under summary: `percent` needs `v.len()` as the whole
/// to divide the group size by, and the quantile path needs the full
/// column to compute in-place selection without an extra copy.
///
/// The quantile path mutates `v[start..end)` in place via partition
/// selection; callers who need `v` preserved must copy it first.
pub fn reduce(code: ReduceCode, v: &mut [f64], start: usize, end: usize) -> f64 {
    use ReduceCode::*;
    match code {
        Sum => sum_range(v, start, end),
        Mean => mean_range(v, start, end),
        Sd => sd_range(v, start, end),
        Min => min_range(v, start, end),
        Max => max_range(v, start, end),
        Count => (end.saturating_sub(start)) as f64,
        Percent => {
            if v.is_empty() {
                f64::NAN
            } else {
                (end.saturating_sub(start)) as f64 / v.len() as f64 * 100.0
            }
        }
        Iqr => quantile_range(v, start, end, 75.0) - quantile_range(v, start, end, 25.0),
        First => {
            if start < end {
                v[start]
            } else {
                f64::NAN
            }
        }
        Last => {
            if end > start {
                v[end - 1]
            } else {
                f64::NAN
            }
        }
        FirstNm => first_non_missing(v, start, end),
        LastNm => last_non_missing(v, start, end),
        Quantile(p) => quantile_range(v, start, end, p),
    }
}

pub(crate) fn sum_range(v: &[f64], start: usize, end: usize) -> f64 {
    v[start..end].iter().sum()
}

pub(crate) fn mean_range(v: &[f64], start: usize, end: usize) -> f64 {
    let n = end - start;
    if n == 0 {
        return f64::NAN;
    }
    sum_range(v, start, end) / n as f64
}

/// Two-pass standard deviation (Bessel-corrected, divides by `N - 1`). For
/// `N = 1` the `0.0 / 0.0` division naturally yields `NaN` rather than
/// panicking, which is an acceptable result for a singleton group.
pub(crate) fn sd_range(v: &[f64], start: usize, end: usize) -> f64 {
    let n = end - start;
    let mean = mean_range(v, start, end);
    let sq_dev: f64 = v[start..end].iter().map(|&x| (x - mean) * (x - mean)).sum();
    (sq_dev / (n as f64 - 1.0)).sqrt()
}

pub(crate) fn min_range(v: &[f64], start: usize, end: usize) -> f64 {
    if start >= end {
        return f64::NAN;
    }
    v[start..end]
        .iter()
        .copied()
        .fold(v[start], |acc, x| if x.total_cmp(&acc).is_lt() { x } else { acc })
}

pub(crate) fn max_range(v: &[f64], start: usize, end: usize) -> f64 {
    if start >= end {
        return f64::NAN;
    }
    v[start..end]
        .iter()
        .copied()
        .fold(v[start], |acc, x| if x.total_cmp(&acc).is_gt() { x } else { acc })
}

fn first_non_missing(v: &[f64], start: usize, end: usize) -> f64 {
    v[start..end]
        .iter()
        .copied()
        .find(|x| !x.is_nan())
        .unwrap_or(f64::NAN)
}

fn last_non_missing(v: &[f64], start: usize, end: usize) -> f64 {
    v[start..end]
        .iter()
        .rev()
        .copied()
        .find(|x| !x.is_nan())
        .unwrap_or(f64::NAN)
}

/// Quantile selection (4.F): the non-trivial path. `p` is in `(0, 100)`.
///
/// Edge cases, in order: `N = 0` undefined (`NaN`), `N = 1` returns the
/// single element, `N = 2` resolves directly from the two values. For
/// `N >= 3`, `q = floor(p * N / 100)`; `q == 0` is the min, `q == N - 1`
/// is the max, otherwise an in-place partition selection
/// ([`<[f64]>::select_nth_unstable_by`], Rust's quickselect) places the
/// `q`th order statistic. When `p * N / 100` is itself an integer (the
/// quantile falls exactly between two order statistics), the `(q - 1)`th
/// is also selected (from the already-partitioned lower half, to avoid an
/// off-by-one against the `q`th) and the two are averaged.
pub(crate) fn quantile_range(v: &mut [f64], start: usize, end: usize, p: f64) -> f64 {
    let n = end - start;
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return v[start];
    }
    if n == 2 {
        let (a, b) = (v[start], v[end - 1]);
        return if p > 50.0 {
            if a.total_cmp(&b).is_gt() { a } else { b }
        } else if p < 50.0 {
            if a.total_cmp(&b).is_lt() { a } else { b }
        } else {
            (a + b) / 2.0
        };
    }

    let exact_position = p * n as f64 / 100.0;
    let q = exact_position.floor() as usize;

    if q == 0 {
        return min_range(v, start, end);
    }
    if q == n - 1 {
        return max_range(v, start, end);
    }

    let slice = &mut v[start..end];
    let qth_val = {
        let (_, pivot, _) = slice.select_nth_unstable_by(q, |a, b| a.total_cmp(b));
        *pivot
    };

    if (q as f64) == exact_position {
        let qm1_val = {
            let lower = &mut slice[..q];
            let (_, pivot, _) = lower.select_nth_unstable_by(q - 1, |a, b| a.total_cmp(b));
            *pivot
        };
        (qth_val + qm1_val) / 2.0
    } else {
        qth_val
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_mean_parity() {
        let mut v = vec![1.0, 2.0, 3.0, 4.0];
        let sum = reduce(ReduceCode::Sum, &mut v, 0, 4);
        let mean = reduce(ReduceCode::Mean, &mut v, 0, 4);
        assert_eq!(sum / 4.0, mean);
    }

    #[test]
    fn quantiles_of_four_evens() {
        // N = 4: p = 50 lands exactly between ranks 2 and 3 (average, the
        // usual even-N median); p = 25 hits q = 1, also an exact rank
        // boundary, so it averages with q - 1 (the minimum) rather than
        // returning the plain order statistic; p = 75 hits q = N - 1 and
        // returns the max directly, with no averaging at that edge.
        let mut v = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(reduce(ReduceCode::Quantile(50.0), &mut v.clone(), 0, 4), 2.5);
        assert_eq!(reduce(ReduceCode::Quantile(25.0), &mut v.clone(), 0, 4), 1.5);
        assert_eq!(reduce(ReduceCode::Quantile(75.0), &mut v.clone(), 0, 4), 4.0);
        assert_eq!(reduce(ReduceCode::Iqr, &mut v, 0, 4), 2.5);
    }

    #[test]
    fn two_element_edges() {
        let mut v = vec![10.0, 20.0];
        assert_eq!(reduce(ReduceCode::Quantile(30.0), &mut v.clone(), 0, 2), 10.0);
        assert_eq!(reduce(ReduceCode::Quantile(70.0), &mut v.clone(), 0, 2), 20.0);
        assert_eq!(reduce(ReduceCode::Quantile(50.0), &mut v, 0, 2), 15.0);
    }

    #[test]
    fn singleton_quantile() {
        let mut v = vec![7.0];
        assert_eq!(reduce(ReduceCode::Quantile(10.0), &mut v.clone(), 0, 1), 7.0);
        assert_eq!(reduce(ReduceCode::Quantile(90.0), &mut v, 0, 1), 7.0);
    }

    #[test]
    fn quantile_off_boundary_matches_sorted_order_statistic() {
        // Percentiles chosen so p * N / 100 is never an integer: the general
        // branch must return the plain q-th order statistic with no
        // averaging.
        let mut v: Vec<f64> = (0..11).map(|i| i as f64).collect(); // 0..=10, N=11
        let mut sorted = v.clone();
        sorted.sort_by(f64::total_cmp);
        for &p in &[13.0, 30.0, 47.0, 68.0, 89.0] {
            let q = (p * 11.0 / 100.0).floor() as usize;
            let got = reduce(ReduceCode::Quantile(p), &mut v.clone(), 0, 11);
            assert_eq!(got, sorted[q], "p={p}");
        }
    }

    #[test]
    fn min_max_sd() {
        let mut v = vec![4.0, 1.0, 7.0, 3.0];
        assert_eq!(reduce(ReduceCode::Min, &mut v, 0, 4), 1.0);
        assert_eq!(reduce(ReduceCode::Max, &mut v, 0, 4), 7.0);
        let sd = reduce(ReduceCode::Sd, &mut v, 0, 4);
        assert!(sd > 0.0 && sd.is_finite());
    }

    #[test]
    fn sd_of_singleton_is_nan_not_a_crash() {
        let mut v = vec![5.0];
        assert!(reduce(ReduceCode::Sd, &mut v, 0, 1).is_nan());
    }

    #[test]
    fn count_and_percent() {
        let mut v = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(reduce(ReduceCode::Count, &mut v, 2, 5), 3.0);
        assert_eq!(reduce(ReduceCode::Percent, &mut v, 2, 5), 3.0 / 8.0 * 100.0);
    }

    #[test]
    fn first_last_and_nm_variants() {
        let mut v = vec![f64::NAN, f64::NAN, 3.0, 4.0, f64::NAN];
        assert!(reduce(ReduceCode::First, &mut v, 0, 5).is_nan());
        assert_eq!(reduce(ReduceCode::FirstNm, &mut v, 0, 5), 3.0);
        assert!(reduce(ReduceCode::Last, &mut v, 0, 5).is_nan());
        assert_eq!(reduce(ReduceCode::LastNm, &mut v, 0, 5), 4.0);
    }

    #[test]
    fn reduce_does_not_touch_outside_slice() {
        let mut v = vec![9.0, 5.0, 1.0, 3.0, 8.0, 2.0, 7.0];
        let before_outside = (v[0], v[6]);
        let _ = reduce(ReduceCode::Quantile(50.0), &mut v, 1, 6);
        assert_eq!((v[0], v[6]), before_outside);
    }
}
