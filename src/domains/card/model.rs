use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Which of the owner's lists a card sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardList {
  Trade,
  Wanted,
}

impl CardList {
  pub fn as_str(&self) -> &'static str {
    match self {
      CardList::Trade => "trade",
      CardList::Wanted => "wanted",
    }
  }
}

impl std::str::FromStr for CardList {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "trade" => Ok(CardList::Trade),
      "wanted" => Ok(CardList::Wanted),
      other => Err(format!("unknown card list '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Card {
  pub id: i32,
  pub owner_id: Option<i32>,
  pub title: String,
  pub description: Option<String>,
  pub image_url: Option<String>,
  #[serde(rename = "set")]
  pub set_name: Option<String>,
  pub condition: Option<String>,
  pub rarity: Option<String>,
  pub game: Option<String>,
  pub quantity: i32,
  pub price_min: Option<f64>,
  pub price_max: Option<f64>,
  #[serde(rename = "type")]
  pub list: Option<CardList>,
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CardRow {
  pub id: i32,
  pub owner_id: Option<i32>,
  pub title: String,
  pub description: Option<String>,
  pub image_url: Option<String>,
  pub set_name: Option<String>,
  pub condition: Option<String>,
  pub rarity: Option<String>,
  pub game: Option<String>,
  pub quantity: i32,
  pub price_min: Option<f64>,
  pub price_max: Option<f64>,
  pub list_type: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

impl From<CardRow> for Card {
  fn from(row: CardRow) -> Self {
    let list = row.list_type.as_deref().and_then(|raw| match raw.parse() {
      Ok(list) => Some(list),
      Err(e) => {
        tracing::warn!("Card {} has {}", row.id, e);
        None
      }
    });

    Self {
      id: row.id,
      owner_id: row.owner_id,
      title: row.title,
      description: row.description,
      image_url: row.image_url,
      set_name: row.set_name,
      condition: row.condition,
      rarity: row.rarity,
      game: row.game,
      quantity: row.quantity,
      price_min: row.price_min,
      price_max: row.price_max,
      list,
      created_at: row.created_at,
    }
  }
}

fn default_quantity() -> i32 {
  1
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_price_range"))]
pub struct CardRequest {
  #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
  pub title: String,
  pub description: Option<String>,
  #[validate(url(message = "Image must be a valid URL"))]
  pub image_url: Option<String>,
  #[serde(rename = "set")]
  pub set_name: Option<String>,
  pub condition: Option<String>,
  pub rarity: Option<String>,
  pub game: Option<String>,
  #[serde(default = "default_quantity")]
  #[validate(range(min = 1, message = "Quantity must be at least 1"))]
  pub quantity: i32,
  #[validate(range(min = 0.0, message = "Prices cannot be negative"))]
  pub price_min: Option<f64>,
  #[validate(range(min = 0.0, message = "Prices cannot be negative"))]
  pub price_max: Option<f64>,
  #[serde(rename = "type")]
  pub list: CardList,
}

fn validate_price_range(req: &CardRequest) -> Result<(), ValidationError> {
  if let (Some(min), Some(max)) = (req.price_min, req.price_max) {
    if min > max {
      let mut err = ValidationError::new("price_range");
      err.message = Some("price_min cannot exceed price_max".into());
      return Err(err);
    }
  }
  Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardSearchQuery {
  pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InventoryResponse {
  pub trade: Vec<Card>,
  pub wanted: Vec<Card>,
}

impl InventoryResponse {
  pub fn from_cards(cards: Vec<Card>) -> Self {
    let (trade, wanted) = cards
      .into_iter()
      .filter(|card| card.list.is_some())
      .partition(|card| card.list == Some(CardList::Trade));
    Self { trade, wanted }
  }
}
