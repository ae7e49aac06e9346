//! Pairing of a raw series with its smoothed companion for charting.

use crate::api::{ChartRecord, MetricPoint};

use super::error::{ServiceError, ServiceResult};
use super::normalize::values;
use super::smoothing::moving_average;

/// Zip raw points with smoothed values, position by position.
///
/// Order is preserved and absent values stay `None`; no position is
/// dropped, so both chart lines share the x-axis.
pub fn assemble(raw: &[MetricPoint], smoothed: &[Option<f64>]) -> ServiceResult<Vec<ChartRecord>> {
    if raw.len() != smoothed.len() {
        return Err(ServiceError::LengthMismatch {
            raw: raw.len(),
            smoothed: smoothed.len(),
        });
    }

    Ok(raw
        .iter()
        .zip(smoothed)
        .map(|(point, smoothed_value)| ChartRecord {
            label: point.label.clone(),
            raw_value: point.value,
            smoothed_value: *smoothed_value,
        })
        .collect())
}

/// Smooth `raw` with a trailing window and assemble the chart records.
pub fn smooth_and_assemble(raw: &[MetricPoint], window: usize) -> ServiceResult<Vec<ChartRecord>> {
    let smoothed = moving_average(&values(raw), window)?;
    assemble(raw, &smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequences() {
        assert!(assemble(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let raw = vec![MetricPoint::new("a", Some(1.0))];
        let err = assemble(&raw, &[]).unwrap_err();
        assert!(matches!(err, ServiceError::LengthMismatch { raw: 1, smoothed: 0 }));
    }

    #[test]
    fn test_absences_are_kept_in_place() {
        let raw = vec![
            MetricPoint::new("d1", Some(10.0)),
            MetricPoint::new("d2", None),
            MetricPoint::new("d3", Some(20.0)),
        ];
        let records = smooth_and_assemble(&raw, 2).unwrap();
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["d1", "d2", "d3"]);
        assert_eq!(records[1].raw_value, None);
        assert_eq!(records[1].smoothed_value, Some(10.0));
        assert_eq!(records[2].smoothed_value, Some(20.0));
    }

    #[test]
    fn test_smooth_and_assemble_rejects_zero_window() {
        let raw = vec![MetricPoint::new("d1", Some(1.0))];
        assert!(matches!(
            smooth_and_assemble(&raw, 0),
            Err(ServiceError::InvalidWindow { window: 0 })
        ));
    }
}
