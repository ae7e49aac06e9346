//! Mapping of heterogeneous upstream records onto a single numeric series.

use crate::api::{AvgMode, HistoryPoint, MetricPoint, MinutePoint, TrendItem};
use crate::services::format::time_label;

/// Resolve the value of one trend item.
///
/// Precedence:
/// 1. `amr`, when present;
/// 2. the break average named by `mode`;
/// 3. `avg_excl_breaks`;
/// 4. `avg_incl_breaks`;
/// 5. no value.
///
/// An including-breaks average never overrides a reported excluding-breaks
/// one, so `{amr: null, excl: 5, incl: 9}` resolves to 5 in either mode.
/// Non-finite numbers count as absent.
pub fn resolve_trend_value(item: &TrendItem, mode: AvgMode) -> Option<f64> {
    let amr = finite(item.amr);
    let excl = finite(item.avg_excl_breaks);
    let incl = finite(item.avg_incl_breaks);

    let preferred = match mode {
        AvgMode::ExcludingBreaks => excl,
        AvgMode::IncludingBreaks => incl.filter(|_| excl.is_none()),
    };

    amr.or(preferred).or(excl).or(incl)
}

/// Normalize a trend response into a dated series, keeping every day.
pub fn trend_points(items: &[TrendItem], mode: AvgMode) -> Vec<MetricPoint> {
    items
        .iter()
        .map(|item| MetricPoint::new(item.date.clone(), resolve_trend_value(item, mode)))
        .collect()
}

/// Broadcast history as a dated series.
pub fn history_points(series: &[HistoryPoint]) -> Vec<MetricPoint> {
    series
        .iter()
        .map(|p| MetricPoint::new(p.date.clone(), finite(p.amr)))
        .collect()
}

/// Intraday samples labelled `HH:MM`; unparseable timestamps keep their text.
pub fn minute_points(points: &[MinutePoint]) -> Vec<MetricPoint> {
    points
        .iter()
        .map(|p| {
            let label = time_label(&p.t).unwrap_or_else(|| p.t.clone());
            MetricPoint::new(label, finite(p.amr))
        })
        .collect()
}

/// Values of a series, in order.
pub fn values(points: &[MetricPoint]) -> Vec<Option<f64>> {
    points.iter().map(|p| p.value).collect()
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
