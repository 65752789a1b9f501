//! # Dimensional Model
//!
//! Clean DTOs shared by the kernel, substrate, and manifold.
//! These types cross every boundary: kernel ↔ substrate ↔ manifold ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no locks, no state
//! beyond what the types themselves carry.

pub mod level;
pub mod path;
pub mod token;
pub mod value;

pub use level::HelixLevel;
pub use path::ManifoldPath;
pub use token::{HelixToken, TokenState};
pub use value::Value;
