//! Bid generation subsystem.
//!
//! # Data Flow
//! ```text
//! placement id
//!     → logging.rs (decorator: record outcome + elapsed time)
//!     → engine.rs (fresh bid id, price = base + uniform(0, 1))
//!     → Bid { id, price }
//! ```
//!
//! # Design Decisions
//! - [`BidService`] is the capability seam: the pricing engine and the
//!   logging decorator both implement it, so wrappers compose in any order
//! - Randomness is injected through the engine constructor, never global

pub mod engine;
pub mod logging;
pub mod types;

pub use engine::PricingEngine;
pub use logging::LoggingService;
pub use types::{Bid, BidError, BidService, PlacementId};
