use std::sync::Arc;

use super::model::{TradeRequest, TradeStatus};

pub struct TradeRequestService {
  requests: Arc<[TradeRequest]>,
}

impl TradeRequestService {
  pub fn new(requests: Vec<TradeRequest>) -> Self {
    Self {
      requests: requests.into(),
    }
  }

  /// Newest first; `status` narrows the list when given.
  pub fn list(&self, status: Option<TradeStatus>) -> Vec<TradeRequest> {
    let mut requests: Vec<TradeRequest> = self
      .requests
      .iter()
      .filter(|request| status.is_none_or(|status| request.status == status))
      .cloned()
      .collect();
    requests.sort_by(|a, b| b.date.cmp(&a.date));
    requests
  }
}
