use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{get, put},
  Router,
};

use super::{
  model::{Card, CardRequest, CardSearchQuery, InventoryResponse},
  service::CardServiceError,
};
use crate::{
  middleware::auth::AuthUser,
  state::{AppState, SharedAppState},
  utils::{json::ValidatedJson, path::ValidPath},
  AppError,
};

pub fn card_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/cards", get(search_cards_handler).post(add_card_handler))
    .route("/cards/{card_id}", put(update_card_handler).delete(delete_card_handler))
    .route("/inventory", get(get_inventory_handler))
}

pub async fn search_cards_handler(
  State(state): State<SharedAppState>,
  Query(query): Query<CardSearchQuery>,
) -> Result<JsonResponse<Vec<Card>>, AppError> {
  state.search_cards(query.search).await.map(JsonResponse).map_err(|e| match e {
    CardServiceError::InternalServerError(msg) => {
      tracing::error!("Card search failed: {}", msg);
      AppError::internal_server_error("Failed to fetch cards")
    }
    other => other.into(),
  })
}

pub async fn get_inventory_handler(
  State(state): State<SharedAppState>,
  AuthUser(claims): AuthUser,
) -> Result<JsonResponse<InventoryResponse>, AppError> {
  state
    .get_inventory(claims.user_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn add_card_handler(
  State(state): State<SharedAppState>,
  AuthUser(claims): AuthUser,
  ValidatedJson(payload): ValidatedJson<CardRequest>,
) -> Result<(StatusCode, JsonResponse<Card>), AppError> {
  let card = state.add_card(claims.user_id, payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(card)))
}

pub async fn update_card_handler(
  State(state): State<SharedAppState>,
  AuthUser(claims): AuthUser,
  ValidPath(card_id): ValidPath<i32>,
  ValidatedJson(payload): ValidatedJson<CardRequest>,
) -> Result<JsonResponse<Card>, AppError> {
  state
    .update_card(claims.user_id, card_id, payload)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn delete_card_handler(
  State(state): State<SharedAppState>,
  AuthUser(claims): AuthUser,
  ValidPath(card_id): ValidPath<i32>,
) -> Result<StatusCode, AppError> {
  state.delete_card(claims.user_id, card_id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
  use super::super::model::{Card, CardList, InventoryResponse};
  use crate::test_support::{delete, get, login, post_json, put_json, register, test_app};
  use axum::http::StatusCode;
  use serde_json::json;

  async fn signed_in(app: &crate::test_support::TestApp, email: &str) -> String {
    register(&app.router, email, "password1").await;
    login(&app.router, email, "password1").await
  }

  #[tokio::test]
  async fn search_on_empty_catalog_returns_empty_list() {
    let app = test_app();
    let (status, body) = get(app.router, "/api/cards?search=foo", None).await;
    assert_eq!(status, StatusCode::OK);

    let cards: Vec<Card> = serde_json::from_slice(&body).unwrap();
    assert!(cards.is_empty());
  }

  #[tokio::test]
  async fn search_matches_title_case_insensitively() {
    let app = test_app();
    app.cards.seed_catalog(&["Charizard", "Dark Charizard", "Blastoise"]);

    let (status, body) = get(app.router.clone(), "/api/cards?search=CHARIZ", None).await;
    assert_eq!(status, StatusCode::OK);
    let cards: Vec<Card> = serde_json::from_slice(&body).unwrap();
    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Charizard", "Dark Charizard"]);

    let (_, body) = get(app.router, "/api/cards", None).await;
    let cards: Vec<Card> = serde_json::from_slice(&body).unwrap();
    assert_eq!(cards.len(), 3);
  }

  #[tokio::test]
  async fn empty_search_returns_everything() {
    let app = test_app();
    app.cards.seed_catalog(&["Charizard", "Blastoise"]);

    let (status, body) = get(app.router, "/api/cards?search=", None).await;
    assert_eq!(status, StatusCode::OK);
    let cards: Vec<Card> = serde_json::from_slice(&body).unwrap();
    assert_eq!(cards.len(), 2);
  }

  #[tokio::test]
  async fn search_store_failure_returns_generic_error() {
    let app = test_app();
    app.cards.fail_next_search();

    let (status, body) = get(app.router, "/api/cards", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Failed to fetch cards");
  }

  #[tokio::test]
  async fn inventory_requires_token() {
    let app = test_app();
    let (status, _) = get(app.router, "/api/inventory", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn add_cards_and_list_inventory() {
    let app = test_app();
    let token = signed_in(&app, "collector@example.com").await;

    let (status, body) = post_json(
      app.router.clone(),
      "/api/cards",
      &json!({ "title": "Black Lotus", "set": "Alpha", "condition": "Good", "type": "trade" }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Card = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.list, Some(CardList::Trade));
    assert_eq!(created.quantity, 1);

    let (status, _) = post_json(
      app.router.clone(),
      "/api/cards",
      &json!({ "title": "Mox Ruby", "type": "wanted", "quantity": 2 }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(app.router, "/api/inventory", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let inventory: InventoryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(inventory.trade.len(), 1);
    assert_eq!(inventory.trade[0].title, "Black Lotus");
    assert_eq!(inventory.wanted.len(), 1);
    assert_eq!(inventory.wanted[0].quantity, 2);
  }

  #[tokio::test]
  async fn add_card_rejects_invalid_body() {
    let app = test_app();
    let token = signed_in(&app, "collector@example.com").await;

    let (status, _) = post_json(
      app.router.clone(),
      "/api/cards",
      &json!({ "title": "Black Lotus", "type": "trade", "quantity": 0 }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
      app.router,
      "/api/cards",
      &json!({ "title": "Black Lotus", "type": "trade", "price_min": 50.0, "price_max": 10.0 }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn update_and_delete_own_card() {
    let app = test_app();
    let token = signed_in(&app, "collector@example.com").await;

    let (_, body) = post_json(
      app.router.clone(),
      "/api/cards",
      &json!({ "title": "Charizard", "type": "trade" }),
      Some(&token),
    )
    .await;
    let card: Card = serde_json::from_slice(&body).unwrap();

    let (status, body) = put_json(
      app.router.clone(),
      &format!("/api/cards/{}", card.id),
      &json!({ "title": "Charizard", "condition": "Mint", "quantity": 3, "type": "wanted" }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Card = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.list, Some(CardList::Wanted));

    let (status, _) = delete(app.router.clone(), &format!("/api/cards/{}", card.id), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(app.router, &format!("/api/cards/{}", card.id), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn malformed_card_id_is_json_bad_request() {
    let app = test_app();
    let token = signed_in(&app, "collector@example.com").await;

    let (status, body) = put_json(
      app.router.clone(),
      "/api/cards/abc",
      &json!({ "title": "Charizard", "type": "trade" }),
      Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status_code"], 400);
    assert!(body["error"].as_str().unwrap().contains("abc"));

    let (status, body) = delete(app.router, "/api/cards/abc", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status_code"], 400);
  }

  #[tokio::test]
  async fn cannot_touch_another_users_card() {
    let app = test_app();
    let owner = signed_in(&app, "owner@example.com").await;
    let intruder = signed_in(&app, "intruder@example.com").await;

    let (_, body) = post_json(
      app.router.clone(),
      "/api/cards",
      &json!({ "title": "Blue-Eyes White Dragon", "type": "trade" }),
      Some(&owner),
    )
    .await;
    let card: Card = serde_json::from_slice(&body).unwrap();

    let (status, _) = put_json(
      app.router.clone(),
      &format!("/api/cards/{}", card.id),
      &json!({ "title": "Stolen", "type": "trade" }),
      Some(&intruder),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(app.router, &format!("/api/cards/{}", card.id), Some(&intruder)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }
}
