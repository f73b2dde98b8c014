//! Error types for the recommendation engine.

use catalog::CatalogError;
use thiserror::Error;

/// Errors a recommendation request can end in.
///
/// An empty candidate set is terminal for the request: the engine never
/// retries or silently relaxes filters. The caller may re-invoke with
/// different criteria.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Filter and cooldown intersection came up empty. The message
    /// distinguishes yoga mode from a regular request.
    #[error("{}", no_candidates_message(.yoga))]
    NoCandidates { yoga: bool },

    /// The catalog or history store failed; no partial recommendation is
    /// returned.
    #[error("store unavailable: {0}")]
    Store(#[from] CatalogError),
}

fn no_candidates_message(yoga: &bool) -> &'static str {
    if *yoga {
        "no yoga workouts found matching your criteria; try adjusting duration filters"
    } else {
        "no workouts match the criteria; try adjusting your filters"
    }
}

/// Convenience alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_message_is_mode_specific() {
        let yoga = RecommendError::NoCandidates { yoga: true };
        assert!(yoga.to_string().contains("yoga"));

        let plain = RecommendError::NoCandidates { yoga: false };
        assert!(!plain.to_string().contains("yoga"));
    }
}
