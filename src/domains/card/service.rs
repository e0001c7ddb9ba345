use async_trait::async_trait;
use validator::Validate;

use super::{
  model::{Card, CardRequest, InventoryResponse},
  repository::CardRepository,
};
use crate::impl_service_error_conversions;

#[derive(Debug, thiserror::Error)]
pub enum CardServiceError {
  #[error("Bad Request: {0}")]
  BadRequest(String),
  #[error("Not Found: {0}")]
  NotFound(String),
  #[error("Internal Server Error: {0}")]
  InternalServerError(String),
}

impl_service_error_conversions!(CardServiceError, InternalServerError, NotFound, BadRequest);

#[async_trait]
pub trait CardService: Send + Sync {
  async fn search_cards(&self, search: Option<String>) -> Result<Vec<Card>, CardServiceError>;
  async fn get_inventory(&self, owner_id: i32) -> Result<InventoryResponse, CardServiceError>;
  async fn add_card(&self, owner_id: i32, req: CardRequest) -> Result<Card, CardServiceError>;
  async fn update_card(&self, owner_id: i32, card_id: i32, req: CardRequest) -> Result<Card, CardServiceError>;
  async fn delete_card(&self, owner_id: i32, card_id: i32) -> Result<(), CardServiceError>;
}

pub struct CardServiceImpl<R> {
  card_repository: R,
}

impl<R> CardServiceImpl<R>
where
  R: CardRepository,
{
  pub fn new(card_repository: R) -> Self {
    Self { card_repository }
  }
}

fn card_not_found(card_id: i32) -> CardServiceError {
  CardServiceError::NotFound(format!("Card {} not found", card_id))
}

#[async_trait]
impl<R> CardService for CardServiceImpl<R>
where
  R: CardRepository,
{
  async fn search_cards(&self, search: Option<String>) -> Result<Vec<Card>, CardServiceError> {
    let term = search.as_deref().filter(|s| !s.is_empty());
    Ok(self.card_repository.search(term).await?)
  }

  async fn get_inventory(&self, owner_id: i32) -> Result<InventoryResponse, CardServiceError> {
    let cards = self.card_repository.find_by_owner(owner_id).await?;
    Ok(InventoryResponse::from_cards(cards))
  }

  async fn add_card(&self, owner_id: i32, req: CardRequest) -> Result<Card, CardServiceError> {
    req
      .validate()
      .map_err(|e| CardServiceError::BadRequest(format!("Validation failed: {}", e)))?;

    let card = self.card_repository.create(owner_id, &req).await?;
    tracing::info!("User {} added card {} to {} list", owner_id, card.id, req.list.as_str());
    Ok(card)
  }

  async fn update_card(&self, owner_id: i32, card_id: i32, req: CardRequest) -> Result<Card, CardServiceError> {
    req
      .validate()
      .map_err(|e| CardServiceError::BadRequest(format!("Validation failed: {}", e)))?;

    self
      .card_repository
      .update(owner_id, card_id, &req)
      .await?
      .ok_or_else(|| card_not_found(card_id))
  }

  async fn delete_card(&self, owner_id: i32, card_id: i32) -> Result<(), CardServiceError> {
    if self.card_repository.delete(owner_id, card_id).await? {
      tracing::info!("User {} removed card {}", owner_id, card_id);
      Ok(())
    } else {
      Err(card_not_found(card_id))
    }
  }
}
