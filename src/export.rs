//! Manifest export — serialize substrate contents as JSON lines.
//!
//! Produces one JSON object per recorded token (path, state, payload,
//! materialization timestamp). The output can be inspected with jq,
//! diffed between sessions, or replayed into another substrate by a
//! loader on the other side.
//!
//! ```text
//! substrate → export_manifest() → {"path":["car","engine"],...}\n...
//! ```

use std::io::Write;

use crate::substrate::{ManifoldSubstrate, SubstrateBackend};
use crate::Result;

/// Write every token in the substrate as a line of JSON.
///
/// Requires a backend that supports enumeration (`all_tokens`); backends
/// without it report [`crate::Error::Substrate`]. Tokens are sorted by
/// path so the manifest is stable across runs.
pub fn export_manifest<B: SubstrateBackend>(
    substrate: &ManifoldSubstrate<B>,
    writer: &mut dyn Write,
) -> Result<()> {
    let mut tokens = substrate.all_tokens()?;
    tokens.sort_by(|a, b| a.path.segments().cmp(b.path.segments()));

    for token in &tokens {
        serde_json::to_writer(&mut *writer, token)
            .map_err(|e| crate::Error::Substrate(format!("manifest encoding failed: {e}")))?;
        writeln!(writer)?;
    }
    Ok(())
}
