use axum::{response::Json as JsonResponse, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
  domains::{
    card::rest::card_routes, matching::rest::match_routes, trade::rest::trade_routes, user::rest::user_routes,
  },
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  let api = user_routes()
    .merge(card_routes())
    .merge(match_routes())
    .merge(trade_routes());

  Router::new()
    .route("/health", get(health_handler))
    .nest("/api", api)
    .with_state(state)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

pub async fn health_handler() -> JsonResponse<Value> {
  JsonResponse(json!({ "status": "ok" }))
}
