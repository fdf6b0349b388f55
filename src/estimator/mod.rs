//! Estimate calculation engine
//!
//! `aggregate` turns room and exterior specs into area, hours and add-on
//! dollars; `synthesize` prices those quantities against a `PricingConfig`
//! and derives the displayed range. Both are pure.

pub mod aggregate;
pub mod pricing;
pub mod synthesize;

pub use aggregate::{aggregate, Quantities};
pub use pricing::{PricingConfig, PricingError};
pub use synthesize::{estimate, evaluate, round_to_increment, synthesize, CostBreakdown};
