//! # Engine Crate
//!
//! The recommendation engine: given sanitized criteria, it queries the
//! catalog for eligible candidates, drops those still in their repeat
//! cooldown, scores the rest against history, weighted-randomly selects
//! one, and attaches a compatible warmup and cooldown.
//!
//! ## Components
//!
//! - **criteria**: request criteria, permissive sanitization, catalog
//!   filter translation
//! - **cooldown**: repeat-cooldown cutoff computation
//! - **scoring**: the linear desirability score
//! - **selection**: weighted random selection from the top pool
//! - **companions**: warmup/cooldown pairing
//! - **engine**: the orchestrator tying the stages together
//! - **traits**: collaborator seams over storage (implemented for
//!   `CatalogStore` in `store_impl`, fakeable in tests)
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{RecommendationEngine, RecommendCriteria};
//! use rand::SeedableRng;
//!
//! let engine = RecommendationEngine::new(store);
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//! let rec = engine.recommend(&criteria, today, &mut rng).await?;
//! println!("{} (+warmup: {})", rec.workout.title, rec.warmup.is_some());
//! ```

pub mod companions;
pub mod cooldown;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod selection;
mod store_impl;
pub mod traits;

// Re-export main types
pub use companions::CompanionPair;
pub use criteria::{RawRecommendQuery, RecommendCriteria};
pub use engine::{Recommendation, RecommendationEngine, Stage};
pub use error::{RecommendError, Result};
pub use scoring::{score_workout, ScoredCandidate};
pub use selection::{pick_weighted, pool_size};
pub use traits::{SessionHistory, WorkoutCatalog};
