use axum::{
  extract::{Query, State},
  response::Json as JsonResponse,
  routing::get,
  Router,
};

use super::model::{MatchCandidate, MatchQuery};
use crate::state::{AppState, SharedAppState};

pub fn match_routes() -> Router<SharedAppState> {
  Router::new().route("/matches", get(find_matches_handler))
}

async fn find_matches_handler(
  State(state): State<SharedAppState>,
  Query(query): Query<MatchQuery>,
) -> JsonResponse<Vec<MatchCandidate>> {
  JsonResponse(state.find_matches(query.into()))
}
