pub mod json_api;

pub use json_api::{
    batting_summary_json, bowling_summary_json, catalog_json, filter_matches_json,
    head_to_head_json, ApiError, ApiResponse, BattingResponse, BowlingResponse,
    HeadToHeadResponse, MatchFilterRequest, MatchTableResponse, PlayerRequest, TeamRequest,
    API_VERSION,
};
