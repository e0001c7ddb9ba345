use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeCard {
  pub id: String,
  pub name: String,
  pub set: String,
  pub condition: String,
  pub quantity: u32,
  pub image: String,
  pub rarity: String,
  pub game: String,
}

/// Another trader whose lists can be matched against.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
  pub id: String,
  pub name: String,
  pub avatar: String,
  pub rating: f64,
  pub cards_offered: Vec<TradeCard>,
  pub cards_requested: Vec<TradeCard>,
}

impl MatchCandidate {
  pub fn all_cards(&self) -> impl Iterator<Item = &TradeCard> {
    self.cards_offered.iter().chain(self.cards_requested.iter())
  }
}

/// One facet of the filter: either everything or a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
  #[default]
  All,
  Only(String),
}

impl Facet {
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      None | Some("") => Facet::All,
      Some(value) if value.eq_ignore_ascii_case("all") => Facet::All,
      Some(value) => Facet::Only(value.to_string()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
  pub game: Facet,
  pub rarity: Facet,
  pub condition: Facet,
  pub search: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQuery {
  pub game: Option<String>,
  pub rarity: Option<String>,
  pub condition: Option<String>,
  pub search: Option<String>,
}

impl From<MatchQuery> for MatchFilter {
  fn from(query: MatchQuery) -> Self {
    Self {
      game: Facet::parse(query.game.as_deref()),
      rarity: Facet::parse(query.rarity.as_deref()),
      condition: Facet::parse(query.condition.as_deref()),
      search: query.search.unwrap_or_default(),
    }
  }
}
