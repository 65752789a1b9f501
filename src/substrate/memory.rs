//! In-memory substrate backend.
//!
//! This is the reference implementation of `SubstrateBackend`: a single
//! token table behind an RwLock. Tokens are applied immediately and the
//! table grows monotonically — no eviction, matching the core contract.
//!
//! Use this backend for:
//! - Testing manifold and kernel behavior
//! - Embedding the manifold in applications that don't need persistence
//! - Validating correctness before plugging in a durable backend

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use super::SubstrateBackend;
use crate::model::{HelixToken, ManifoldPath};
use crate::Result;

/// In-memory token storage.
///
/// Cloning is cheap and shares the same table, so a backend handle can
/// be handed to several owners.
#[derive(Clone)]
pub struct MemoryBackend {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    tokens: RwLock<HashMap<ManifoldPath, HelixToken>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                tokens: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Number of recorded tokens (potential and materialized).
    pub fn token_count(&self) -> usize {
        self.inner.tokens.read().len()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstrateBackend for MemoryBackend {
    fn load(&self, path: &ManifoldPath) -> Result<Option<HelixToken>> {
        Ok(self.inner.tokens.read().get(path).cloned())
    }

    fn save(&self, path: &ManifoldPath, token: HelixToken) -> Result<()> {
        self.inner.tokens.write().insert(path.clone(), token);
        Ok(())
    }

    fn all_tokens(&self) -> Result<Vec<HelixToken>> {
        Ok(self.inner.tokens.read().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_load_absent_path() {
        let backend = MemoryBackend::new();
        let path = ManifoldPath::new(["car"]);
        assert_eq!(backend.load(&path).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let backend = MemoryBackend::new();
        let path = ManifoldPath::new(["car", "engine"]);

        backend
            .save(&path, HelixToken::materialized(path.clone(), Value::from("V8")))
            .unwrap();

        let token = backend.load(&path).unwrap().unwrap();
        assert_eq!(token.payload(), Some(&Value::from("V8")));
        assert_eq!(backend.token_count(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let backend = MemoryBackend::new();
        let path = ManifoldPath::new(["car"]);

        backend.save(&path, HelixToken::potential(path.clone())).unwrap();
        backend
            .save(&path, HelixToken::materialized(path.clone(), Value::Int(1)))
            .unwrap();

        assert!(backend.load(&path).unwrap().unwrap().is_materialized());
        assert_eq!(backend.token_count(), 1);
    }

    #[test]
    fn test_clone_shares_table() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();
        let path = ManifoldPath::new(["shared"]);

        backend.save(&path, HelixToken::potential(path.clone())).unwrap();
        assert!(handle.load(&path).unwrap().is_some());
    }

    #[test]
    fn test_all_tokens() {
        let backend = MemoryBackend::new();
        for name in ["a", "b", "c"] {
            let path = ManifoldPath::new([name]);
            backend.save(&path, HelixToken::potential(path.clone())).unwrap();
        }
        assert_eq!(backend.all_tokens().unwrap().len(), 3);
    }
}
