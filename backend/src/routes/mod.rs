//! Wire types of the upstream analytics API, one module per endpoint.
//!
//! Each module carries the endpoint path constant and the serde schema of
//! its response. Responses that do not match these schemas are rejected at
//! the client boundary.

pub mod aggregates;
pub mod competition;
pub mod days;
pub mod history;
pub mod metrics;
mod numbers;
pub mod programs;
pub mod trends;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::days::LIST_DAYS, "/days");
        assert_eq!(super::days::LIST_DAYS_FALLBACK, "/");
        assert_eq!(super::aggregates::GET_AGGREGATES, "/aggregates");
        assert_eq!(super::metrics::GET_METRICS, "/metrics");
        assert_eq!(super::programs::GET_PROGRAMS, "/programs");
        assert_eq!(super::history::GET_PROGRAM_HISTORY, "/program-history");
        assert_eq!(super::trends::GET_PROGRAM_TREND, "/program-trend");
        assert_eq!(super::competition::GET_COMPETITION, "/competition");
        assert_eq!(super::competition::GET_COMPARE, "/compare");
    }
}
