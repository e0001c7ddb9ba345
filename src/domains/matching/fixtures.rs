use std::path::Path;

use anyhow::Context;

use super::model::{MatchCandidate, TradeCard};

/// Reads candidates from a JSON array, or falls back to [`default_candidates`].
pub fn load_candidates(path: Option<&str>) -> anyhow::Result<Vec<MatchCandidate>> {
  match path {
    Some(path) => {
      let raw = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read match fixtures from {}", path))?;
      let candidates: Vec<MatchCandidate> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid match fixtures in {}", path))?;
      tracing::info!("Loaded {} match candidates from {}", candidates.len(), path);
      Ok(candidates)
    }
    None => Ok(default_candidates()),
  }
}

#[allow(clippy::too_many_arguments)]
fn card(id: &str, name: &str, set: &str, condition: &str, quantity: u32, image: &str, rarity: &str, game: &str) -> TradeCard {
  TradeCard {
    id: id.to_string(),
    name: name.to_string(),
    set: set.to_string(),
    condition: condition.to_string(),
    quantity,
    image: image.to_string(),
    rarity: rarity.to_string(),
    game: game.to_string(),
  }
}

pub fn default_candidates() -> Vec<MatchCandidate> {
  vec![
    MatchCandidate {
      id: "1".to_string(),
      name: "Alex Thompson".to_string(),
      avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex".to_string(),
      rating: 4.8,
      cards_offered: vec![
        card(
          "o1",
          "Charizard",
          "Base Set",
          "Near Mint",
          1,
          "https://images.unsplash.com/photo-1628968434441-d9c1c66dcde7?w=200&q=80",
          "rare",
          "pokemon",
        ),
        card(
          "o2",
          "Blastoise",
          "Base Set",
          "Good",
          1,
          "https://images.unsplash.com/photo-1627856013091-fed6e4e30025?w=200&q=80",
          "rare",
          "pokemon",
        ),
      ],
      cards_requested: vec![card(
        "r1",
        "Venusaur",
        "Base Set",
        "Near Mint",
        1,
        "https://images.unsplash.com/photo-1614935151651-0bea6508db6b?w=200&q=80",
        "rare",
        "pokemon",
      )],
    },
    MatchCandidate {
      id: "2".to_string(),
      name: "Jamie Rodriguez".to_string(),
      avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Jamie".to_string(),
      rating: 4.5,
      cards_offered: vec![card(
        "o3",
        "Black Lotus",
        "Alpha",
        "Good",
        1,
        "https://images.unsplash.com/photo-1529154691717-3306083d869e?w=200&q=80",
        "ultra-rare",
        "magic",
      )],
      cards_requested: vec![
        card(
          "r2",
          "Mox Ruby",
          "Beta",
          "Played",
          1,
          "https://images.unsplash.com/photo-1559480671-5c369f8c438b?w=200&q=80",
          "ultra-rare",
          "magic",
        ),
        card(
          "r3",
          "Time Walk",
          "Unlimited",
          "Good",
          1,
          "https://images.unsplash.com/photo-1563941402830-07a3d90e44f6?w=200&q=80",
          "rare",
          "magic",
        ),
      ],
    },
    MatchCandidate {
      id: "3".to_string(),
      name: "Morgan Lee".to_string(),
      avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Morgan".to_string(),
      rating: 4.2,
      cards_offered: vec![
        card(
          "o4",
          "Blue-Eyes White Dragon",
          "Legend of Blue Eyes",
          "Mint",
          2,
          "https://images.unsplash.com/photo-1607736703467-37da98175754?w=200&q=80",
          "ultra-rare",
          "yugioh",
        ),
        card(
          "o5",
          "Dark Magician",
          "Legend of Blue Eyes",
          "Near Mint",
          1,
          "https://images.unsplash.com/photo-1614935152064-04c974d8d168?w=200&q=80",
          "rare",
          "yugioh",
        ),
      ],
      cards_requested: vec![card(
        "r4",
        "Exodia the Forbidden One",
        "Legend of Blue Eyes",
        "Good",
        1,
        "https://images.unsplash.com/photo-1607736703467-37da98175754?w=200&q=80",
        "ultra-rare",
        "yugioh",
      )],
    },
  ]
}
