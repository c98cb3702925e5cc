use serde::{Deserialize, Serialize};

/// What a delete call actually did.
///
/// Every variant is a success from the caller's point of view: delete is
/// idempotent and a provider may absorb failures instead of surfacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum DeleteOutcome {
    /// The stored file existed and was removed.
    Removed,
    /// Nothing was stored under the id.
    Missing,
    /// Removal failed and the provider swallowed the error.
    Recovered { reason: String },
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        true
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, DeleteOutcome::Recovered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_outcomes_succeed() {
        assert!(DeleteOutcome::Removed.is_success());
        assert!(DeleteOutcome::Missing.is_success());
        let recovered = DeleteOutcome::Recovered {
            reason: "permission denied".to_string(),
        };
        assert!(recovered.is_success());
        assert!(recovered.is_recovered());
        assert!(!DeleteOutcome::Missing.is_recovered());
    }
}
