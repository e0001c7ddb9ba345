use chrono::NaiveDate;

use super::model::{TradeRequest, TradeStatus};

fn names(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

pub fn default_trade_requests() -> Vec<TradeRequest> {
  vec![
    TradeRequest {
      id: 1,
      user: "Alice".to_string(),
      avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=alice".to_string(),
      offering: names(&["Black Lotus", "Mox Ruby"]),
      requesting: names(&["Time Walk", "Ancestral Recall"]),
      status: TradeStatus::Pending,
      date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or_default(),
    },
    TradeRequest {
      id: 2,
      user: "Bob".to_string(),
      avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=bob".to_string(),
      offering: names(&["Charizard Holo", "Blastoise Holo"]),
      requesting: names(&["Venusaur Holo", "Pikachu Illustrator"]),
      status: TradeStatus::Accepted,
      date: NaiveDate::from_ymd_opt(2023, 6, 14).unwrap_or_default(),
    },
  ]
}
