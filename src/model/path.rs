//! ManifoldPath — the lookup key into the substrate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// An ordered sequence of string segments identifying a node's location
/// in the manifold, e.g. `car.transmission`.
///
/// Equality and hashing are structural (segment by segment). Paths are
/// typically shallow, so segments are stored inline up to four deep.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifoldPath {
    segments: SmallVec<[String; 4]>,
}

impl ManifoldPath {
    /// Build a path from pre-validated segments. The caller vouches for
    /// the segments; use [`ManifoldPath::parse`] for untrusted input.
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a dotted path expression (`"car.transmission"`).
    ///
    /// Fails with [`Error::PathSyntax`] on empty input or empty segments
    /// (`"car..gearbox"`, `".car"`).
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.is_empty() {
            return Err(Error::PathSyntax("empty path expression".into()));
        }
        let mut segments = SmallVec::new();
        for segment in expr.split('.') {
            if segment.is_empty() {
                return Err(Error::PathSyntax(format!("empty segment in '{expr}'")));
            }
            segments.push(segment.to_string());
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path extended by one segment: `car` → `car.transmission`.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl std::fmt::Display for ManifoldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for ManifoldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_expression() {
        let path = ManifoldPath::parse("car.transmission.gearbox").unwrap();
        assert_eq!(path.segments(), &["car", "transmission", "gearbox"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ManifoldPath::parse("").is_err());
        assert!(ManifoldPath::parse("car..gearbox").is_err());
        assert!(ManifoldPath::parse(".car").is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = ManifoldPath::parse("car.engine").unwrap();
        let b = ManifoldPath::new(["car", "engine"]);
        assert_eq!(a, b);
        assert_ne!(a, ManifoldPath::new(["car", "wheels"]));
    }

    #[test]
    fn test_child_and_display() {
        let car = ManifoldPath::new(["car"]);
        let transmission = car.child("transmission");
        assert_eq!(transmission.to_string(), "car.transmission");
        // Parent is untouched
        assert_eq!(car.len(), 1);
    }
}
