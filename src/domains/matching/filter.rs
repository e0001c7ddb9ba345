//! Narrowing of match candidates by game, rarity, condition and free text.
//!
//! A facet passes when it is [`Facet::All`] or when any card in either the
//! offered or the requested list carries the value. The free-text search looks
//! at the trader's name and every card name, and an empty search passes
//! everything. All four predicates must hold. Output keeps input order.

use super::model::{Facet, MatchCandidate, MatchFilter, TradeCard};

pub fn filter_matches<'a>(candidates: &'a [MatchCandidate], filter: &MatchFilter) -> Vec<&'a MatchCandidate> {
  let game = facet_slug(&filter.game);
  let rarity = facet_slug(&filter.rarity);
  let condition = facet_slug(&filter.condition);
  let search = filter.search.to_lowercase();

  candidates
    .iter()
    .filter(|candidate| {
      facet_matches(candidate, game.as_deref(), |card| &card.game)
        && facet_matches(candidate, rarity.as_deref(), |card| &card.rarity)
        && facet_matches(candidate, condition.as_deref(), |card| &card.condition)
        && search_matches(candidate, &search)
    })
    .collect()
}

/// Lowercase with whitespace runs collapsed to `-`, so `Near Mint` == `near-mint`.
pub fn slug(value: &str) -> String {
  value.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

fn facet_slug(facet: &Facet) -> Option<String> {
  match facet {
    Facet::All => None,
    Facet::Only(value) => Some(slug(value)),
  }
}

fn facet_matches<F>(candidate: &MatchCandidate, target: Option<&str>, field: F) -> bool
where
  F: Fn(&TradeCard) -> &String,
{
  match target {
    None => true,
    Some(target) => candidate.all_cards().any(|card| slug(field(card)) == target),
  }
}

fn search_matches(candidate: &MatchCandidate, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }

  candidate.name.to_lowercase().contains(needle)
    || candidate
      .all_cards()
      .any(|card| card.name.to_lowercase().contains(needle))
}
