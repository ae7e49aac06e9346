//! Trailing moving average over a series with gaps.

use super::error::{ServiceError, ServiceResult};

/// Window of the MA7 companion series.
pub const DEFAULT_WINDOW: usize = 7;

/// Causal moving average over the last `window` positions.
///
/// A missing value still occupies its slot and ages out after `window`
/// steps. Each output is the mean of the present values currently in the
/// window, or `None` when the window holds none. Non-finite inputs count as
/// missing. Runs in O(n): the running sum and count are updated with the
/// incoming value and the one leaving the window.
pub fn moving_average(values: &[Option<f64>], window: usize) -> ServiceResult<Vec<Option<f64>>> {
    if window == 0 {
        return Err(ServiceError::InvalidWindow { window });
    }

    let mut smoothed = Vec::with_capacity(values.len());
    let mut sum = 0.0_f64;
    let mut count = 0_usize;

    for (i, value) in values.iter().enumerate() {
        if let Some(v) = present(*value) {
            sum += v;
            count += 1;
        }
        if i >= window {
            if let Some(old) = present(values[i - window]) {
                sum -= old;
                count -= 1;
            }
        }

        if count == 0 {
            // drop accumulated rounding error once the window is empty
            sum = 0.0;
            smoothed.push(None);
        } else {
            smoothed.push(Some(sum / count as f64));
        }
    }

    Ok(smoothed)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
        (0..values.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(window);
                let present: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
                if present.is_empty() {
                    None
                } else {
                    Some(present.iter().sum::<f64>() / present.len() as f64)
                }
            })
            .collect()
    }

    #[test]
    fn test_gap_occupies_a_slot() {
        let out = moving_average(&[Some(10.0), None, Some(20.0)], 2).unwrap();
        assert_eq!(out, vec![Some(10.0), Some(10.0), Some(20.0)]);
    }

    #[test]
    fn test_oldest_value_leaves_window() {
        let values: Vec<Option<f64>> = (1..=8).map(|v| Some(v as f64)).collect();
        let out = moving_average(&values, DEFAULT_WINDOW).unwrap();
        assert_eq!(out[7], Some(5.0));
        assert_eq!(out[6], Some(4.0));
        assert_eq!(out[0], Some(1.0));
    }

    #[test]
    fn test_zero_window_is_invalid() {
        let err = moving_average(&[Some(1.0)], 0).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidWindow { window: 0 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(moving_average(&[], 7).unwrap().is_empty());
    }

    #[test]
    fn test_all_missing() {
        let out = moving_average(&[None, None, None], 7).unwrap();
        assert_eq!(out, vec![None, None, None]);
    }

    #[test]
    fn test_single_value_passes_through() {
        let out = moving_average(&[None, Some(42.0), None], 7).unwrap();
        assert_eq!(out, vec![None, Some(42.0), Some(42.0)]);
    }

    #[test]
    fn test_window_empties_after_gap_run() {
        let out = moving_average(&[Some(3.0), None, None, None], 2).unwrap();
        assert_eq!(out, vec![Some(3.0), Some(3.0), None, None]);
    }

    #[test]
    fn test_non_finite_counts_as_missing() {
        let out = moving_average(&[Some(f64::NAN), Some(4.0)], 2).unwrap();
        assert_eq!(out, vec![None, Some(4.0)]);
    }

    fn series() -> impl Strategy<Value = Vec<Option<f64>>> {
        prop::collection::vec(prop::option::of(-1.0e6..1.0e6_f64), 0..64)
    }

    proptest! {
        #[test]
        fn prop_length_is_preserved(values in series(), window in 1usize..20) {
            let out = moving_average(&values, window).unwrap();
            prop_assert_eq!(out.len(), values.len());
        }

        #[test]
        fn prop_matches_recomputed_window(values in series(), window in 1usize..20) {
            let fast = moving_average(&values, window).unwrap();
            let slow = naive(&values, window);
            for (a, b) in fast.iter().zip(slow.iter()) {
                match (a, b) {
                    (Some(x), Some(y)) => prop_assert!((x - y).abs() <= 1e-6 * y.abs().max(1.0)),
                    (None, None) => {}
                    _ => prop_assert!(false, "presence differs: {:?} vs {:?}", a, b),
                }
            }
        }

        #[test]
        fn prop_empty_window_gives_none(values in series(), window in 1usize..20) {
            let out = moving_average(&values, window).unwrap();
            for i in 0..values.len() {
                let start = (i + 1).saturating_sub(window);
                if values[start..=i].iter().all(Option::is_none) {
                    prop_assert_eq!(out[i], None);
                }
            }
        }

        #[test]
        fn prop_no_look_ahead(values in series(), window in 1usize..20, tail in series()) {
            let base = moving_average(&values, window).unwrap();
            let mut extended = values.clone();
            extended.extend(tail);
            let longer = moving_average(&extended, window).unwrap();
            prop_assert_eq!(&longer[..values.len()], &base[..]);
        }
    }
}
