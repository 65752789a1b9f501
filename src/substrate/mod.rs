//! # Substrate — token storage behind the manifold
//!
//! `SubstrateBackend` is THE contract between the manifold and any store.
//! A backend only has to load and save tokens by path; everything about
//! materialization policy stays out of this layer.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |-----------------|----------|--------------------------------------|
//! | `MemoryBackend` | `memory` | In-memory for testing/embedding |
//!
//! Durable backends (filesystem, key-value stores, graph stores) live
//! outside this crate and plug in through the same two operations.

pub mod memory;

pub use memory::MemoryBackend;

use crate::model::{HelixToken, ManifoldPath};
use crate::{Error, Result};

// ============================================================================
// SubstrateBackend trait
// ============================================================================

/// The universal token storage contract.
///
/// All operations are synchronous: the core never suspends or blocks on
/// a backend, and a token is either fully recorded or not recorded at
/// all. A backend that cannot reach its store reports
/// [`Error::Substrate`].
pub trait SubstrateBackend: Send + Sync + 'static {
    /// Load the token recorded for a path, if the path has ever been
    /// referenced.
    fn load(&self, path: &ManifoldPath) -> Result<Option<HelixToken>>;

    /// Insert or overwrite the token record for a path.
    fn save(&self, path: &ManifoldPath, token: HelixToken) -> Result<()>;

    /// Enumerate every recorded token.
    ///
    /// Default returns "not supported" — the manifold never needs it;
    /// only dump/export tooling does. Backends that can enumerate
    /// cheaply should override.
    fn all_tokens(&self) -> Result<Vec<HelixToken>> {
        Err(Error::Substrate("token enumeration not supported".into()))
    }
}

// ============================================================================
// ManifoldSubstrate
// ============================================================================

/// The substrate proper: a thin, policy-free front over a backend, and
/// the single source of truth for "has this path been materialized".
///
/// No generator logic lives here. The substrate stores and answers;
/// the [`GenerativeManifold`](crate::manifold::GenerativeManifold)
/// decides when construction happens.
pub struct ManifoldSubstrate<B: SubstrateBackend> {
    backend: B,
}

impl<B: SubstrateBackend> ManifoldSubstrate<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The node record for a path: materialized, still potential, or
    /// `None` if the path has never been referenced.
    pub fn get(&self, path: &ManifoldPath) -> Result<Option<HelixToken>> {
        self.backend.load(path)
    }

    /// Insert or overwrite the record for a path.
    pub fn put(&self, path: &ManifoldPath, token: HelixToken) -> Result<()> {
        self.backend.save(path, token)
    }

    /// `false` for absent and potential-only records alike.
    pub fn is_materialized(&self, path: &ManifoldPath) -> Result<bool> {
        Ok(self
            .get(path)?
            .map(|token| token.is_materialized())
            .unwrap_or(false))
    }

    /// Every recorded token, where the backend supports enumeration.
    pub fn all_tokens(&self) -> Result<Vec<HelixToken>> {
        self.backend.all_tokens()
    }

    /// Access the underlying backend (for advanced use).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl ManifoldSubstrate<MemoryBackend> {
    /// An in-memory substrate for testing and embedding.
    pub fn open_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}
