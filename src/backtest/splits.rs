//! Rolling-origin split generation.

use crate::core::{Split, Window};
use crate::error::{BacktestError, Result};

/// Generate rolling-origin splits for a series of `series_len` observations.
///
/// Fixed-length test blocks of `horizon` observations are peeled from the
/// end of the series. Every training window starts at index 0 and ends
/// where its test block begins, so earlier splits train on strictly less
/// history. Splits are returned most recent first.
///
/// Peeling stops while at least `horizon` training observations remain,
/// which makes the split count `series_len / horizon - 1` (integer
/// division). When `series_len` is not a multiple of `horizon`, the
/// leftover oldest observations are never tested; they stay inside every
/// training window. A series shorter than two horizons yields an empty
/// vector, not an error.
///
/// # Arguments
/// * `series_len` - Number of observations in the series
/// * `horizon` - Test block length, also the forecast horizon
///
/// # Example
/// ```
/// use tscv::backtest::make_splits;
///
/// let splits = make_splits(10, 3).unwrap();
/// assert_eq!(splits.len(), 2);
/// // Most recent split first
/// assert_eq!(splits[0].test.start, 7);
/// assert_eq!(splits[0].test.end, 10);
/// ```
pub fn make_splits(series_len: usize, horizon: usize) -> Result<Vec<Split>> {
    if horizon == 0 || horizon >= series_len {
        return Err(BacktestError::InvalidHorizon {
            horizon,
            series_len,
        });
    }

    let mut splits = Vec::new();
    let mut end = series_len;
    while end >= 2 * horizon {
        splits.push(Split {
            train: Window::new(0, end - horizon),
            test: Window::new(end - horizon, end),
        });
        end -= horizon;
    }

    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_for_ten_by_three() {
        let splits = make_splits(10, 3).unwrap();
        assert_eq!(splits.len(), 2);

        assert_eq!(splits[0].train, Window::new(0, 7));
        assert_eq!(splits[0].test, Window::new(7, 10));

        assert_eq!(splits[1].train, Window::new(0, 4));
        assert_eq!(splits[1].test, Window::new(4, 7));
    }

    #[test]
    fn count_follows_floor_rule() {
        for (n, h) in [(10, 3), (12, 3), (9, 3), (20, 5), (6, 3), (7, 3), (100, 7)] {
            let splits = make_splits(n, h).unwrap();
            assert_eq!(splits.len(), n / h - 1, "n={} h={}", n, h);
        }
    }

    #[test]
    fn exact_double_horizon_gives_single_split() {
        let splits = make_splits(6, 3).unwrap();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].train, Window::new(0, 3));
        assert_eq!(splits[0].test, Window::new(3, 6));
    }

    #[test]
    fn short_series_gives_no_splits() {
        // 5 < 2 * 3, so no test block leaves a full training horizon behind
        let splits = make_splits(5, 3).unwrap();
        assert!(splits.is_empty());
    }

    #[test]
    fn rejects_zero_horizon() {
        let result = make_splits(10, 0);
        assert!(matches!(
            result,
            Err(BacktestError::InvalidHorizon {
                horizon: 0,
                series_len: 10
            })
        ));
    }

    #[test]
    fn rejects_horizon_equal_to_series_len() {
        let result = make_splits(8, 8);
        assert!(matches!(
            result,
            Err(BacktestError::InvalidHorizon {
                horizon: 8,
                series_len: 8
            })
        ));
    }

    #[test]
    fn rejects_horizon_beyond_series_len() {
        let result = make_splits(5, 9);
        assert!(matches!(result, Err(BacktestError::InvalidHorizon { .. })));
    }

    #[test]
    fn every_split_is_contiguous_and_anchored() {
        let splits = make_splits(23, 4).unwrap();
        assert!(!splits.is_empty());
        for split in &splits {
            assert_eq!(split.train.start, 0);
            assert!(split.is_contiguous());
            assert_eq!(split.test.len(), 4);
            assert!(split.train.len() >= 4);
        }
    }

    #[test]
    fn ordering_is_most_recent_first() {
        let splits = make_splits(20, 4).unwrap();
        assert_eq!(splits[0].test.end, 20);
        for pair in splits.windows(2) {
            assert_eq!(pair[0].test.start, pair[1].test.end);
        }
    }

    #[test]
    fn leftover_prefix_is_never_tested() {
        // 23 = 5 * 4 + 3; the three oldest observations stay in training
        let splits = make_splits(23, 4).unwrap();
        let oldest = splits.last().unwrap();
        assert_eq!(oldest.test.start, 3 + 4);
        assert_eq!(oldest.train.len(), 3 + 4);
    }
}
