//! Core logic for pricing bids.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use uuid::Uuid;

use crate::bidding::types::{Bid, BidError, BidService, PlacementId};

/// Engine for generating priced bids.
///
/// The price is the configured base plus a uniform offset in `[0, 1)`.
/// In a real system, this would consult campaign budgets or a pricing
/// model; the placement id is accepted but not yet used.
pub struct PricingEngine {
    base_price: f64,
    rng: Mutex<StdRng>,
}

impl PricingEngine {
    /// Create an engine seeded from OS entropy.
    pub fn new(base_price: f64) -> Self {
        Self {
            base_price,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create an engine with a fixed seed, for reproducible output.
    pub fn with_seed(base_price: f64, seed: u64) -> Self {
        Self {
            base_price,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl BidService for PricingEngine {
    fn bid(&self, _placement: PlacementId) -> Result<Bid, BidError> {
        let offset: f64 = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            rng.gen_range(0.0..1.0)
        };

        Ok(Bid {
            id: Uuid::new_v4(),
            price: self.base_price + offset,
        })
    }
}
