//! # GenerativeManifold — lazy materialization over the substrate
//!
//! "All exists. Nothing manifests. Invoke only what you need."
//!
//! The manifold resolves a path to a payload, constructing it at most
//! once. A resolution either hits a cached materialized token or calls
//! the supplied generator for exactly the requested path — sibling and
//! descendant paths are never walked or constructed.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::model::{HelixToken, ManifoldPath, Value};
use crate::substrate::{ManifoldSubstrate, MemoryBackend, SubstrateBackend};
use crate::Result;

/// The lazy graph built atop the substrate.
///
/// Concurrency: invocations for the same path are serialized on a
/// per-path lock, which is what upholds the at-most-once construction
/// guarantee when the manifold is shared across threads. Invocations
/// for different paths proceed independently.
pub struct GenerativeManifold<B: SubstrateBackend> {
    substrate: ManifoldSubstrate<B>,
    /// One mutex per path ever invoked. Grows with the substrate;
    /// entries are never removed, matching the no-eviction contract.
    locks: Mutex<HashMap<ManifoldPath, Arc<Mutex<()>>>>,
}

impl<B: SubstrateBackend> GenerativeManifold<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_substrate(ManifoldSubstrate::with_backend(backend))
    }

    pub fn with_substrate(substrate: ManifoldSubstrate<B>) -> Self {
        Self {
            substrate,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a path to its payload, materializing on first invoke.
    ///
    /// - Cache hit: the stored payload is returned and the generator is
    ///   not called.
    /// - Miss (absent or still potential): `generator(path)` runs, the
    ///   result is recorded as a materialized token, and the payload is
    ///   returned. The generator sees only the path being resolved.
    /// - Generator failure: the error propagates and the substrate is
    ///   left exactly as it was, so a later invoke retries generation
    ///   instead of returning a poisoned cached failure.
    ///
    /// The generator runs under the path's lock; it must not invoke the
    /// same path recursively.
    pub fn invoke<G>(&self, path: &ManifoldPath, generator: G) -> Result<Value>
    where
        G: FnOnce(&ManifoldPath) -> Result<Value>,
    {
        let lock = self.path_lock(path);
        let _guard = lock.lock();

        if let Some(token) = self.substrate.get(path)? {
            if let Some(payload) = token.payload() {
                trace!(%path, "cache hit");
                return Ok(payload.clone());
            }
        }

        let payload = generator(path).inspect_err(|err| {
            warn!(%path, %err, "generation failed, path left unmaterialized");
        })?;

        self.substrate
            .put(path, HelixToken::materialized(path.clone(), payload.clone()))?;
        debug!(%path, "materialized");

        Ok(payload)
    }

    /// Record that a path exists as pure potential, without invoking it.
    ///
    /// No-op if the path already has a record (potential or
    /// materialized) — referencing never downgrades a token.
    pub fn reference(&self, path: &ManifoldPath) -> Result<()> {
        let lock = self.path_lock(path);
        let _guard = lock.lock();

        if self.substrate.get(path)?.is_none() {
            self.substrate.put(path, HelixToken::potential(path.clone()))?;
            trace!(%path, "referenced as potential");
        }
        Ok(())
    }

    /// The node record for a path, if any.
    pub fn get(&self, path: &ManifoldPath) -> Result<Option<HelixToken>> {
        self.substrate.get(path)
    }

    /// Whether a path has been materialized. `false` for absent and
    /// potential-only records.
    pub fn is_materialized(&self, path: &ManifoldPath) -> Result<bool> {
        self.substrate.is_materialized(path)
    }

    /// Access the substrate (for export and introspection).
    pub fn substrate(&self) -> &ManifoldSubstrate<B> {
        &self.substrate
    }

    fn path_lock(&self, path: &ManifoldPath) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry(path.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl GenerativeManifold<MemoryBackend> {
    /// An in-memory manifold for testing and embedding.
    pub fn open_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_invoke_materializes_once() {
        let manifold = GenerativeManifold::open_memory();
        let path = ManifoldPath::parse("car.transmission").unwrap();

        let payload = manifold
            .invoke(&path, |_| Ok(Value::from("6-speed")))
            .unwrap();

        assert_eq!(payload, Value::from("6-speed"));
        assert!(manifold.is_materialized(&path).unwrap());
    }

    #[test]
    fn test_cache_hit_skips_generator() {
        let manifold = GenerativeManifold::open_memory();
        let path = ManifoldPath::parse("car.engine").unwrap();

        manifold.invoke(&path, |_| Ok(Value::from("V8"))).unwrap();

        // Second generator would produce a different payload; it must
        // never run.
        let payload = manifold
            .invoke(&path, |_| {
                panic!("generator called for an already-materialized path")
            })
            .unwrap();
        assert_eq!(payload, Value::from("V8"));
    }

    #[test]
    fn test_failed_generation_records_nothing() {
        let manifold = GenerativeManifold::open_memory();
        let path = ManifoldPath::parse("car.gearbox").unwrap();

        let result = manifold.invoke(&path, |p| {
            Err(Error::Generation {
                path: p.to_string(),
                message: "supplier outage".into(),
            })
        });

        assert!(result.is_err());
        assert_eq!(manifold.get(&path).unwrap(), None);
        assert!(!manifold.is_materialized(&path).unwrap());
    }

    #[test]
    fn test_reference_then_invoke_upgrades() {
        let manifold = GenerativeManifold::open_memory();
        let path = ManifoldPath::parse("car.wheels").unwrap();

        manifold.reference(&path).unwrap();
        let token = manifold.get(&path).unwrap().unwrap();
        assert!(!token.is_materialized());

        manifold.invoke(&path, |_| Ok(Value::Int(4))).unwrap();
        assert!(manifold.is_materialized(&path).unwrap());

        // Referencing again never downgrades.
        manifold.reference(&path).unwrap();
        assert!(manifold.is_materialized(&path).unwrap());
    }

    #[test]
    fn test_sibling_paths_stay_potential() {
        let manifold = GenerativeManifold::open_memory();
        let transmission = ManifoldPath::parse("car.transmission").unwrap();
        let engine = ManifoldPath::parse("car.engine").unwrap();

        manifold
            .invoke(&transmission, |_| Ok(Value::from("CVT")))
            .unwrap();

        // Only the invoked dimension manifests.
        assert_eq!(manifold.get(&engine).unwrap(), None);
        assert_eq!(manifold.substrate().backend().token_count(), 1);
    }
}
