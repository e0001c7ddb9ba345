use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tower::ServiceExt;

use crate::{
  app::create_app,
  db::RepositoryError,
  domains::{
    card::{
      model::{Card, CardRequest},
      repository::CardRepository,
      service::CardServiceImpl,
    },
    matching::fixtures::default_candidates,
    trade::fixtures::default_trade_requests,
    user::{
      model::{ProfileUpdateRequest, User},
      repository::UserRepository,
      service::UserServiceImpl,
    },
  },
  state::SharedAppState,
  utils::jwt::JwtConfig,
};

const TEST_BCRYPT_COST: u32 = 4;

#[derive(Clone, Default)]
pub struct InMemoryUsers {
  users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
  pub fn find(&self, email: &str) -> Option<User> {
    self.users.lock().unwrap().iter().find(|u| u.email == email).cloned()
  }

  pub fn count_by_email(&self, email: &str) -> usize {
    self.users.lock().unwrap().iter().filter(|u| u.email == email).count()
  }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
  async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
    let mut users = self.users.lock().unwrap();
    if users.iter().any(|u| u.email == email) {
      return Err(RepositoryError::Conflict(
        "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
      ));
    }

    let user = User {
      id: users.len() as i32 + 1,
      name: name.to_string(),
      email: email.to_string(),
      password: password_hash.to_string(),
      avatar: None,
      created_at: Some(Utc::now()),
    };
    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
    Ok(self.find(email))
  }

  async fn update_profile(&self, email: &str, changes: &ProfileUpdateRequest) -> Result<Option<User>, RepositoryError> {
    let mut users = self.users.lock().unwrap();
    Ok(users.iter_mut().find(|u| u.email == email).map(|user| {
      if let Some(name) = &changes.name {
        user.name = name.clone();
      }
      if let Some(avatar) = &changes.avatar {
        user.avatar = Some(avatar.clone()).filter(|a| !a.is_empty());
      }
      user.clone()
    }))
  }
}

#[derive(Default)]
struct CardStore {
  cards: Vec<Card>,
  next_id: i32,
  fail_next_search: bool,
}

impl CardStore {
  fn insert(&mut self, owner_id: Option<i32>, req: &CardRequest) -> Card {
    self.next_id += 1;
    let card = card_from_request(self.next_id, owner_id, req);
    self.cards.push(card.clone());
    card
  }
}

fn card_from_request(id: i32, owner_id: Option<i32>, req: &CardRequest) -> Card {
  Card {
    id,
    owner_id,
    title: req.title.clone(),
    description: req.description.clone(),
    image_url: req.image_url.clone(),
    set_name: req.set_name.clone(),
    condition: req.condition.clone(),
    rarity: req.rarity.clone(),
    game: req.game.clone(),
    quantity: req.quantity,
    price_min: req.price_min,
    price_max: req.price_max,
    list: Some(req.list),
    created_at: Some(Utc::now()),
  }
}

#[derive(Clone, Default)]
pub struct InMemoryCards {
  store: Arc<Mutex<CardStore>>,
}

impl InMemoryCards {
  /// Adds unowned catalog cards with the given titles.
  pub fn seed_catalog(&self, titles: &[&str]) {
    let mut store = self.store.lock().unwrap();
    for title in titles {
      let req: CardRequest =
        serde_json::from_value(json!({ "title": title, "type": "trade" })).expect("catalog card request");
      store.insert(None, &req);
      if let Some(card) = store.cards.last_mut() {
        card.list = None;
      }
    }
  }

  pub fn fail_next_search(&self) {
    self.store.lock().unwrap().fail_next_search = true;
  }
}

#[async_trait]
impl CardRepository for InMemoryCards {
  async fn search(&self, title: Option<&str>) -> Result<Vec<Card>, RepositoryError> {
    let mut store = self.store.lock().unwrap();
    if std::mem::take(&mut store.fail_next_search) {
      return Err(RepositoryError::DatabaseError("connection refused".to_string()));
    }

    let needle = title.map(str::to_lowercase);
    Ok(
      store
        .cards
        .iter()
        .filter(|card| needle.as_ref().is_none_or(|n| card.title.to_lowercase().contains(n.as_str())))
        .cloned()
        .collect(),
    )
  }

  async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Card>, RepositoryError> {
    let store = self.store.lock().unwrap();
    Ok(store.cards.iter().filter(|c| c.owner_id == Some(owner_id)).cloned().collect())
  }

  async fn create(&self, owner_id: i32, card: &CardRequest) -> Result<Card, RepositoryError> {
    Ok(self.store.lock().unwrap().insert(Some(owner_id), card))
  }

  async fn update(&self, owner_id: i32, card_id: i32, card: &CardRequest) -> Result<Option<Card>, RepositoryError> {
    let mut store = self.store.lock().unwrap();
    Ok(
      store
        .cards
        .iter_mut()
        .find(|c| c.id == card_id && c.owner_id == Some(owner_id))
        .map(|existing| {
          *existing = Card {
            created_at: existing.created_at,
            ..card_from_request(card_id, Some(owner_id), card)
          };
          existing.clone()
        }),
    )
  }

  async fn delete(&self, owner_id: i32, card_id: i32) -> Result<bool, RepositoryError> {
    let mut store = self.store.lock().unwrap();
    let before = store.cards.len();
    store.cards.retain(|c| !(c.id == card_id && c.owner_id == Some(owner_id)));
    Ok(store.cards.len() < before)
  }
}

pub struct TestApp {
  pub router: Router,
  pub users: InMemoryUsers,
  pub cards: InMemoryCards,
  pub jwt: JwtConfig,
}

impl TestApp {
  pub fn token_for(&self, user_id: i32, email: &str) -> String {
    self.jwt.issue(user_id, email).expect("issue token")
  }
}

pub fn test_app() -> TestApp {
  let users = InMemoryUsers::default();
  let cards = InMemoryCards::default();
  let jwt = JwtConfig::new("test-secret", 1);

  let state = SharedAppState::from_parts(
    Arc::new(UserServiceImpl::new(users.clone(), jwt.clone(), TEST_BCRYPT_COST)),
    Arc::new(CardServiceImpl::new(cards.clone())),
    default_candidates(),
    default_trade_requests(),
    jwt.clone(),
  );

  TestApp {
    router: create_app(state),
    users,
    cards,
    jwt,
  }
}

pub async fn send(
  app: Router,
  method: Method,
  uri: &str,
  body: Option<Vec<u8>>,
  token: Option<&str>,
) -> (StatusCode, Bytes) {
  let mut builder = Request::builder().method(method).uri(uri);
  if body.is_some() {
    builder = builder.header("content-type", "application/json");
  }
  if let Some(token) = token {
    builder = builder.header("authorization", format!("Bearer {}", token));
  }
  let request = builder
    .body(body.map(Body::from).unwrap_or_else(Body::empty))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T, token: Option<&str>) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, Method::POST, uri, Some(body), token).await
}

pub async fn put_json<T: Serialize>(app: Router, uri: &str, body: &T, token: Option<&str>) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, Method::PUT, uri, Some(body), token).await
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Bytes) {
  send(app, Method::GET, uri, None, token).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Bytes) {
  send(app, Method::DELETE, uri, None, token).await
}

pub async fn register(app: &Router, email: &str, password: &str) {
  let local = email.split('@').next().unwrap_or(email);
  let mut chars = local.chars();
  let name: String = chars
    .next()
    .map(|first| first.to_uppercase().chain(chars).collect())
    .unwrap_or_default();
  let (status, body) = post_json(
    app.clone(),
    "/api/register",
    &json!({ "name": name, "email": email, "password": password }),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "register failed: {:?}", body);
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
  let (status, body) = post_json(
    app.clone(),
    "/api/login",
    &json!({ "email": email, "password": password }),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK, "login failed: {:?}", body);

  let body: serde_json::Value = serde_json::from_slice(&body).expect("deserialize login response");
  body["token"].as_str().expect("token in login response").to_string()
}
