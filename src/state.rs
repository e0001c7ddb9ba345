use std::sync::Arc;

use sqlx::PgPool;

use crate::{
  config::AppConfig,
  domains::{
    card::{
      model::{Card, CardRequest, InventoryResponse},
      repository::SqlxCardRepository,
      service::{CardService, CardServiceError, CardServiceImpl},
    },
    matching::{
      model::{MatchCandidate, MatchFilter},
      service::MatchService,
    },
    trade::{
      fixtures::default_trade_requests,
      model::{TradeRequest, TradeStatus},
      service::TradeRequestService,
    },
    user::{
      model::{LoginRequest, LoginResponse, ProfileUpdateRequest, RegisterRequest, User},
      repository::SqlxUserRepository,
      service::{UserService, UserServiceError, UserServiceImpl},
    },
  },
  utils::jwt::{Claims, JwtConfig},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn register(&self, req: RegisterRequest) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn login(
    &self,
    req: LoginRequest,
  ) -> impl std::future::Future<Output = Result<LoginResponse, UserServiceError>> + Send;
  fn update_profile(
    &self,
    claims: Claims,
    req: ProfileUpdateRequest,
  ) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn search_cards(
    &self,
    search: Option<String>,
  ) -> impl std::future::Future<Output = Result<Vec<Card>, CardServiceError>> + Send;
  fn get_inventory(
    &self,
    owner_id: i32,
  ) -> impl std::future::Future<Output = Result<InventoryResponse, CardServiceError>> + Send;
  fn add_card(
    &self,
    owner_id: i32,
    req: CardRequest,
  ) -> impl std::future::Future<Output = Result<Card, CardServiceError>> + Send;
  fn update_card(
    &self,
    owner_id: i32,
    card_id: i32,
    req: CardRequest,
  ) -> impl std::future::Future<Output = Result<Card, CardServiceError>> + Send;
  fn delete_card(
    &self,
    owner_id: i32,
    card_id: i32,
  ) -> impl std::future::Future<Output = Result<(), CardServiceError>> + Send;
  fn find_matches(&self, filter: MatchFilter) -> Vec<MatchCandidate>;
  fn list_trade_requests(&self, status: Option<TradeStatus>) -> Vec<TradeRequest>;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<dyn UserService>,
  pub card_service: Arc<dyn CardService>,
  pub match_service: Arc<MatchService>,
  pub trade_service: Arc<TradeRequestService>,
  pub jwt: JwtConfig,
}

impl SharedAppState {
  pub fn new(pool: PgPool, config: &AppConfig, candidates: Vec<MatchCandidate>) -> Self {
    let jwt = JwtConfig::new(config.jwt_secret.clone(), config.jwt_ttl_hours);
    let user_service = Arc::new(UserServiceImpl::new(
      SqlxUserRepository::new(pool.clone()),
      jwt.clone(),
      config.bcrypt_cost,
    ));
    let card_service = Arc::new(CardServiceImpl::new(SqlxCardRepository::new(pool)));

    Self::from_parts(user_service, card_service, candidates, default_trade_requests(), jwt)
  }

  pub fn from_parts(
    user_service: Arc<dyn UserService>,
    card_service: Arc<dyn CardService>,
    candidates: Vec<MatchCandidate>,
    trade_requests: Vec<TradeRequest>,
    jwt: JwtConfig,
  ) -> Self {
    Self {
      user_service,
      card_service,
      match_service: Arc::new(MatchService::new(candidates)),
      trade_service: Arc::new(TradeRequestService::new(trade_requests)),
      jwt,
    }
  }
}

impl AppState for SharedAppState {
  async fn register(&self, req: RegisterRequest) -> Result<User, UserServiceError> {
    self.user_service.register(req).await
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError> {
    self.user_service.login(req).await
  }

  async fn update_profile(&self, claims: Claims, req: ProfileUpdateRequest) -> Result<User, UserServiceError> {
    self.user_service.update_profile(&claims, req).await
  }

  async fn search_cards(&self, search: Option<String>) -> Result<Vec<Card>, CardServiceError> {
    self.card_service.search_cards(search).await
  }

  async fn get_inventory(&self, owner_id: i32) -> Result<InventoryResponse, CardServiceError> {
    self.card_service.get_inventory(owner_id).await
  }

  async fn add_card(&self, owner_id: i32, req: CardRequest) -> Result<Card, CardServiceError> {
    self.card_service.add_card(owner_id, req).await
  }

  async fn update_card(&self, owner_id: i32, card_id: i32, req: CardRequest) -> Result<Card, CardServiceError> {
    self.card_service.update_card(owner_id, card_id, req).await
  }

  async fn delete_card(&self, owner_id: i32, card_id: i32) -> Result<(), CardServiceError> {
    self.card_service.delete_card(owner_id, card_id).await
  }

  fn find_matches(&self, filter: MatchFilter) -> Vec<MatchCandidate> {
    self.match_service.find_matches(&filter)
  }

  fn list_trade_requests(&self, status: Option<TradeStatus>) -> Vec<TradeRequest> {
    self.trade_service.list(status)
  }
}
