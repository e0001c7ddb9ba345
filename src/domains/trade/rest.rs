use axum::{
  extract::{Query, State},
  response::Json as JsonResponse,
  routing::get,
  Router,
};

use super::model::{TradeRequest, TradeRequestQuery, TradeStatus};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn trade_routes() -> Router<SharedAppState> {
  Router::new().route("/trade-requests", get(list_trade_requests_handler))
}

async fn list_trade_requests_handler(
  State(state): State<SharedAppState>,
  Query(query): Query<TradeRequestQuery>,
) -> Result<JsonResponse<Vec<TradeRequest>>, AppError> {
  let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
    Some(raw) => Some(raw.parse::<TradeStatus>().map_err(AppError::bad_request)?),
    None => None,
  };

  Ok(JsonResponse(state.list_trade_requests(status)))
}
