//! Logging decorator for bid services.

use std::time::Instant;

use crate::bidding::types::{Bid, BidError, BidService, PlacementId};

/// Decorator that records the outcome and elapsed time of every call.
///
/// Wraps any [`BidService`] without altering its result, so it composes
/// with other implementations in any order.
pub struct LoggingService<S> {
    inner: S,
}

impl<S: BidService> LoggingService<S> {
    /// Wrap a bid service with logging.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: BidService> BidService for LoggingService<S> {
    fn bid(&self, placement: PlacementId) -> Result<Bid, BidError> {
        let start = Instant::now();
        let result = self.inner.bid(placement);

        match &result {
            Ok(bid) => tracing::info!(
                bid_id = %bid.id,
                bid_price = bid.price,
                elapsed = ?start.elapsed(),
                "bid request"
            ),
            Err(err) => tracing::info!(
                error = %err,
                elapsed = ?start.elapsed(),
                "bid request"
            ),
        }

        result
    }
}
