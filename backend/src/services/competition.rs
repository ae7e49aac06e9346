//! Competitor share table for one day.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::api::StationShare;
use crate::client::AudienceApi;

use super::error::{require_selector, ServiceResult};
use super::view_state::ViewData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRow {
    /// 1-based position after sorting.
    pub position: usize,
    pub name: String,
    pub shr_pct: Option<f64>,
    pub amr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionView {
    pub date: String,
    pub stations: Vec<StationRow>,
    /// Sum of the reported shares, `None` when no station reports one.
    pub total_share: Option<f64>,
    pub leader: Option<String>,
}

impl ViewData for CompetitionView {
    fn has_data(&self) -> bool {
        !self.stations.is_empty()
    }
}

pub async fn load_competition(api: &dyn AudienceApi, date: &str) -> ServiceResult<CompetitionView> {
    let date = require_selector("date", date)?;
    let response = api.competition(date).await?;

    let stations = rank_stations(response.channels);
    let shares: Vec<f64> = stations.iter().filter_map(|s| s.shr_pct).collect();
    let total_share = if shares.is_empty() {
        None
    } else {
        Some(shares.iter().sum())
    };
    let leader = stations
        .first()
        .filter(|s| s.shr_pct.is_some())
        .map(|s| s.name.clone());

    Ok(CompetitionView {
        date: response.date.unwrap_or_else(|| date.to_string()),
        stations,
        total_share,
        leader,
    })
}

/// Sort by share descending; stations without a share go last; ties by name.
pub fn rank_stations(mut stations: Vec<StationShare>) -> Vec<StationRow> {
    stations.sort_by(|a, b| {
        let by_share = match (a.shr_pct, b.shr_pct) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_share.then_with(|| a.name.cmp(&b.name))
    });

    stations
        .into_iter()
        .enumerate()
        .map(|(i, s)| StationRow {
            position: i + 1,
            name: s.name,
            shr_pct: s.shr_pct,
            amr: s.amr,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, shr: Option<f64>) -> StationShare {
        StationShare {
            name: name.to_string(),
            shr_pct: shr,
            amr: None,
        }
    }

    #[test]
    fn test_rank_by_share_missing_last() {
        let rows = rank_stations(vec![
            station("TVP2", Some(0.07)),
            station("Nowa", None),
            station("TVN", Some(0.14)),
            station("Polsat", Some(0.14)),
        ]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Polsat", "TVN", "TVP2", "Nowa"]);
        assert_eq!(rows[3].position, 4);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_stations(vec![]).is_empty());
    }
}
