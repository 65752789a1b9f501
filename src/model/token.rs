//! HelixToken — a potential or materialized point in the manifold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ManifoldPath, Value};

/// The two states a manifold node can be in.
///
/// The payload lives inside the `Materialized` variant, so the type
/// system forbids payload access on a node that has not been invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum TokenState {
    /// Conceptually present, never constructed.
    Potential,
    /// Constructed exactly once; the payload is the cached result.
    Materialized { payload: Value },
}

/// A record in the substrate's node table: one point of the manifold,
/// keyed by its path.
///
/// Lifecycle: created `Potential` when first referenced, transitions to
/// `Materialized` at most once, never reverts. Eviction is not a core
/// concern; the table grows monotonically within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelixToken {
    pub path: ManifoldPath,
    pub state: TokenState,
    /// When the token transitioned to materialized, if it has.
    pub materialized_at: Option<DateTime<Utc>>,
}

impl HelixToken {
    /// A token in the potential state — referenced but never invoked.
    pub fn potential(path: ManifoldPath) -> Self {
        Self {
            path,
            state: TokenState::Potential,
            materialized_at: None,
        }
    }

    /// A materialized token carrying its generated payload, stamped now.
    pub fn materialized(path: ManifoldPath, payload: Value) -> Self {
        Self {
            path,
            state: TokenState::Materialized { payload },
            materialized_at: Some(Utc::now()),
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.state, TokenState::Materialized { .. })
    }

    /// The cached payload, or `None` while the token is still potential.
    pub fn payload(&self) -> Option<&Value> {
        match &self.state {
            TokenState::Potential => None,
            TokenState::Materialized { payload } => Some(payload),
        }
    }

    /// Consume the token, yielding the payload if materialized.
    pub fn into_payload(self) -> Option<Value> {
        match self.state {
            TokenState::Potential => None,
            TokenState::Materialized { payload } => Some(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potential_has_no_payload() {
        let token = HelixToken::potential(ManifoldPath::new(["car"]));
        assert!(!token.is_materialized());
        assert_eq!(token.payload(), None);
        assert_eq!(token.materialized_at, None);
    }

    #[test]
    fn test_materialized_carries_payload() {
        let token = HelixToken::materialized(
            ManifoldPath::new(["car", "engine"]),
            Value::from("V8"),
        );
        assert!(token.is_materialized());
        assert_eq!(token.payload(), Some(&Value::from("V8")));
        assert!(token.materialized_at.is_some());
        assert_eq!(token.into_payload(), Some(Value::from("V8")));
    }
}
