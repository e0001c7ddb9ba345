use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
  Pending,
  Accepted,
}

impl std::str::FromStr for TradeStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "pending" => Ok(TradeStatus::Pending),
      "accepted" => Ok(TradeStatus::Accepted),
      other => Err(format!("Unknown trade status '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeRequest {
  pub id: i32,
  pub user: String,
  pub avatar: String,
  pub offering: Vec<String>,
  pub requesting: Vec<String>,
  pub status: TradeStatus,
  pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeRequestQuery {
  pub status: Option<String>,
}
