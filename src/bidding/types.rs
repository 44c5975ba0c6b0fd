//! Bid types and the capability interface.

use thiserror::Error;
use uuid::Uuid;

/// Identifier of the ad placement a bid refers to.
pub type PlacementId = Uuid;

/// A generated bid: fresh identifier plus offered price.
///
/// Bids are not persisted or reused; every value lives for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bid {
    /// Unique identifier for this bid, generated per call.
    pub id: Uuid,

    /// Offered price. No currency semantics attached.
    pub price: f64,
}

/// Error returned by a bid service implementation.
#[derive(Debug, Error)]
pub enum BidError {
    /// Internal failure while computing a bid.
    #[error("bid computation failed: {0}")]
    Internal(String),
}

/// Capability interface for computing bids.
///
/// Implementations hold no per-request state and must be safe to share
/// across concurrently executing requests.
pub trait BidService: Send + Sync {
    /// Compute a bid for the given placement.
    fn bid(&self, placement: PlacementId) -> Result<Bid, BidError>;
}
