use std::sync::Arc;

use super::{
  filter::filter_matches,
  model::{MatchCandidate, MatchFilter},
};

/// Serves match discovery over a fixed, read-only candidate set.
pub struct MatchService {
  candidates: Arc<[MatchCandidate]>,
}

impl MatchService {
  pub fn new(candidates: Vec<MatchCandidate>) -> Self {
    Self {
      candidates: candidates.into(),
    }
  }

  pub fn find_matches(&self, filter: &MatchFilter) -> Vec<MatchCandidate> {
    filter_matches(&self.candidates, filter).into_iter().cloned().collect()
  }
}
