//! Application services: wizard session storage, estimate evaluation and
//! debounced recalculation.

pub mod estimator_client;
pub mod evaluator;
pub mod recalc;
pub mod sessions;

pub use estimator_client::EstimatorClient;
pub use evaluator::Evaluator;
pub use recalc::{RecalcOutcome, Recalculator};
pub use sessions::SessionStore;
