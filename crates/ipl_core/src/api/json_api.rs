//! JSON API for dashboard queries
//!
//! String-in/string-out endpoints over a borrowed [`RecordStore`]. Every response
//! uses the same [`ApiResponse`] envelope; a request without a selection succeeds
//! with an explicitly empty payload.

use crate::catalog::Catalog;
use crate::filter::filter_matches;
use crate::models::{Match, Selection};
use crate::stats::{
    batting_summary, bowling_summary, head_to_head, BattingSummary, BowlingSummary, HeadToHeadRow,
};
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

/// Raw picker values; `"All"` anywhere in a list selects everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilterRequest {
    #[serde(default)]
    pub seasons: Option<Vec<String>>,
    #[serde(default)]
    pub teams: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchTableResponse<'a> {
    pub rows: Vec<&'a Match>,
    /// Empty when there is nothing to report.
    pub warning: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRequest {
    #[serde(default)]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRequest {
    #[serde(default)]
    pub team: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattingResponse {
    pub summary: Option<BattingSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BowlingResponse {
    pub summary: Option<BowlingSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadToHeadResponse {
    pub team: Option<String>,
    pub rows: Vec<HeadToHeadRow>,
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

fn parse_request<T: DeserializeOwned>(request_json: &str, kind: &str) -> Result<T, ApiError> {
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse {}: {}", kind, e);
        ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e))
    })
}

/// Blank names count as no selection.
fn selected_name(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn filter_matches_json(request_json: &str, store: &RecordStore) -> String {
    debug!("Processing match filter request");

    let request: MatchFilterRequest = match parse_request(request_json, "MatchFilterRequest") {
        Ok(req) => req,
        Err(error) => return to_json(&ApiResponse::<MatchTableResponse>::error(error)),
    };

    let seasons = request.seasons.map(Selection::from_values);
    let teams = request.teams.map(Selection::from_values);
    let result = filter_matches(store, seasons.as_ref(), teams.as_ref());

    info!("Match filter returned {} rows", result.rows.len());
    let response =
        MatchTableResponse { rows: result.rows, warning: result.warning.unwrap_or_default() };
    to_json(&ApiResponse::success(response))
}

pub fn batting_summary_json(request_json: &str, store: &RecordStore) -> String {
    debug!("Processing batting summary request");

    let request: PlayerRequest = match parse_request(request_json, "PlayerRequest") {
        Ok(req) => req,
        Err(error) => return to_json(&ApiResponse::<BattingResponse>::error(error)),
    };

    let summary = selected_name(request.player).map(|player| batting_summary(store, &player));
    to_json(&ApiResponse::success(BattingResponse { summary }))
}

pub fn bowling_summary_json(request_json: &str, store: &RecordStore) -> String {
    debug!("Processing bowling summary request");

    let request: PlayerRequest = match parse_request(request_json, "PlayerRequest") {
        Ok(req) => req,
        Err(error) => return to_json(&ApiResponse::<BowlingResponse>::error(error)),
    };

    let summary = selected_name(request.player).map(|player| bowling_summary(store, &player));
    to_json(&ApiResponse::success(BowlingResponse { summary }))
}

pub fn head_to_head_json(request_json: &str, store: &RecordStore) -> String {
    debug!("Processing head-to-head request");

    let request: TeamRequest = match parse_request(request_json, "TeamRequest") {
        Ok(req) => req,
        Err(error) => return to_json(&ApiResponse::<HeadToHeadResponse>::error(error)),
    };

    let team = selected_name(request.team);
    let rows = team.as_deref().map(|t| head_to_head(store, t)).unwrap_or_default();
    to_json(&ApiResponse::success(HeadToHeadResponse { team, rows }))
}

/// Picker options, with the wildcard entry on the multi-select lists.
pub fn catalog_json(store: &RecordStore) -> String {
    to_json(&ApiResponse::success(Catalog::from_store(store).with_wildcard()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DatasetBuilder;
    use serde_json::Value;

    fn store() -> RecordStore {
        DatasetBuilder::new()
            .fixture(1, "2021", "CSK", "MI", "Wankhede", Some("CSK"))
            .fixture(2, "2022", "CSK", "RCB", "Chepauk", None)
            .runs(1, 0, 1, "Dhoni", "Bumrah", 6)
            .wicket(1, 0, 2, "Dhoni", "Bumrah", "caught")
            .runs(2, 0, 1, "Kohli", "Jadeja", 4)
            .build()
    }

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("response should be valid JSON")
    }

    #[test]
    fn invalid_json_is_reported_in_envelope() {
        let response = parse(&filter_matches_json("{not json", &store()));

        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_JSON");
        assert_eq!(response["schema_version"], API_VERSION);
    }

    #[test]
    fn missing_selection_returns_empty_table() {
        let response = parse(&filter_matches_json(r#"{"seasons": ["All"]}"#, &store()));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["rows"].as_array().map(Vec::len), Some(0));
        assert_eq!(response["data"]["warning"], "");
    }

    #[test]
    fn filter_request_maps_wildcard_and_warning() {
        let store = store();

        let all = parse(&filter_matches_json(r#"{"seasons": ["All"], "teams": ["All"]}"#, &store));
        assert_eq!(all["data"]["rows"].as_array().map(Vec::len), Some(2));

        let warned = parse(&filter_matches_json(
            r#"{"seasons": ["2021"], "teams": ["RCB", "CSK"]}"#,
            &store,
        ));
        assert_eq!(warned["data"]["rows"].as_array().map(Vec::len), Some(1));
        assert_eq!(
            warned["data"]["warning"],
            "The following team(s) did not play in the selected season: RCB."
        );
    }

    #[test]
    fn batting_and_bowling_payloads() {
        let store = store();

        let batting = parse(&batting_summary_json(r#"{"player": "Dhoni"}"#, &store));
        let summary = &batting["data"]["summary"];
        assert_eq!(summary["all_seasons"]["scope"], "All Seasons");
        assert_eq!(summary["all_seasons"]["sixes"], 1);
        assert_eq!(summary["per_season"][1]["highest_innings_runs"], Value::Null);
        assert_eq!(summary["venue_breakdown"]["Wankhede"], 6);

        let bowling = parse(&bowling_summary_json(r#"{"player": "Bumrah"}"#, &store));
        let summary = &bowling["data"]["summary"];
        assert_eq!(summary["all_seasons"]["legal_overs"], "0.2");
        assert_eq!(summary["all_seasons"]["caught_count"], 1);

        let nobody = parse(&bowling_summary_json(r#"{"player": "  "}"#, &store));
        assert_eq!(nobody["success"], true);
        assert_eq!(nobody["data"]["summary"], Value::Null);
    }

    #[test]
    fn head_to_head_payload() {
        let response = parse(&head_to_head_json(r#"{"team": "CSK"}"#, &store()));

        let rows = response["data"]["rows"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["opponent"], "MI");
        assert_eq!(rows[0]["total_wins"], 1);
        assert_eq!(rows[1]["total_wins"], 0);

        let empty = parse(&head_to_head_json("{}", &store()));
        assert_eq!(empty["data"]["rows"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn catalog_payload_has_wildcards() {
        let response = parse(&catalog_json(&store()));

        assert_eq!(response["data"]["seasons"][0], "All");
        assert_eq!(response["data"]["teams"][0], "All");
        assert_eq!(response["data"]["bowlers"][0], "Bumrah");
    }
}
