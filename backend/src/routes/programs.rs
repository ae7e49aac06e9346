use serde::{Deserialize, Serialize};

// =========================================================
// Program line-up with merged-break metrics
// =========================================================

/// Path of the program line-up endpoint (`?date=`).
pub const GET_PROGRAMS: &str = "/programs";

/// Program record as reported after merging short breaks into the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub amr: Option<f64>,
    #[serde(default)]
    pub shr_pct: Option<f64>,
    #[serde(default, deserialize_with = "super::numbers::opt_u32_from_number")]
    pub rank_amr: Option<u32>,
    /// Audience lost across the merged breaks.
    #[serde(default)]
    pub break_penalty: Option<f64>,
    /// Minutes needed to get back to the pre-break audience.
    #[serde(default)]
    pub recovery_time: Option<f64>,
    #[serde(default)]
    pub lead_in_delta: Option<f64>,
    #[serde(default)]
    pub lead_out_delta: Option<f64>,
}

/// `GET /programs?date=` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramsResponse {
    #[serde(default)]
    pub programs: Vec<ProgramRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_record_break_metrics() {
        let json = r#"{"programs": [{
            "title": "Fakty", "slug": "fakty", "amr": 2100000,
            "break_penalty": -35000, "recovery_time": 4, "lead_in_delta": 12000
        }]}"#;
        let parsed: ProgramsResponse = serde_json::from_str(json).unwrap();
        let program = &parsed.programs[0];
        assert_eq!(program.break_penalty, Some(-35000.0));
        assert_eq!(program.recovery_time, Some(4.0));
        assert_eq!(program.lead_out_delta, None);
    }

    #[test]
    fn test_program_record_rank_written_as_float() {
        let json = r#"{"programs": [{"title": "Fakty", "slug": "fakty", "rank_amr": 3.0}]}"#;
        let parsed: ProgramsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.programs[0].rank_amr, Some(3));
    }
}
