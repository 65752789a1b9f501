//! # butterflyfx — Dimensional Helix Kernel
//!
//! A clean Rust implementation of the ButterflyFX dimensional model:
//! a cyclic 7-level position tracker paired with a lazily-materialized
//! graph whose nodes are constructed only when explicitly invoked.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `SubstrateBackend` is the contract between the
//!    manifold and any token store
//! 2. **Clean DTOs**: `HelixLevel`, `ManifoldPath`, `HelixToken`,
//!    `Value` cross all boundaries
//! 3. **Owned state, no singletons**: every `HelixKernel` is a plain
//!    value; independent trackers are independent kernels
//! 4. **Typed laziness**: `TokenState` makes payload access on an
//!    unmaterialized node a compile error, not a runtime surprise
//!
//! ## Quick Start
//!
//! ```rust
//! use butterflyfx::{GenerativeManifold, HelixKernel, HelixLevel, ManifoldPath, Value};
//!
//! # fn example() -> butterflyfx::Result<()> {
//! // Position tracking: jump straight to a level, no iteration.
//! let mut kernel = HelixKernel::new();
//! kernel.invoke(4)?;
//! assert_eq!(kernel.level(), HelixLevel::Plane);
//! kernel.spiral_up(); // the Whole becomes the next spiral's Potential
//! assert_eq!(kernel.state(), (1, HelixLevel::Potential));
//!
//! // Lazy resolution: only the invoked dimension manifests.
//! let manifold = GenerativeManifold::open_memory();
//! let path = ManifoldPath::parse("car.transmission")?;
//! let payload = manifold.invoke(&path, |_| Ok(Value::from("6-speed")))?;
//! assert_eq!(payload, Value::from("6-speed"));
//! // car.engine and car.wheels remain pure potential.
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Substrate Backends
//!
//! | Backend | Description |
//! |---------|-------------|
//! | Memory | In-memory token table for testing/embedding |
//! | (yours) | Anything implementing `SubstrateBackend::load`/`save` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod kernel;
pub mod substrate;
pub mod manifold;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{HelixLevel, HelixToken, ManifoldPath, TokenState, Value};

// ============================================================================
// Re-exports: Kernel
// ============================================================================

pub use kernel::HelixKernel;

// ============================================================================
// Re-exports: Substrate & Manifold
// ============================================================================

pub use substrate::{ManifoldSubstrate, MemoryBackend, SubstrateBackend};
pub use manifold::GenerativeManifold;
pub use export::export_manifest;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level outside the dimensional range `0..=6` was invoked.
    #[error("level {0} outside dimensional range 0..=6")]
    OutOfRange(i64),

    /// A path expression could not be parsed.
    #[error("invalid manifold path: {0}")]
    PathSyntax(String),

    /// A generator failed for the given path. Nothing was recorded;
    /// a later invoke retries generation.
    #[error("generation failed for path '{path}': {message}")]
    Generation { path: String, message: String },

    /// The backing token store is unreachable or refused the operation.
    #[error("substrate unavailable: {0}")]
    Substrate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
