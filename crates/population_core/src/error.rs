//! Decode failures for the population wire format.

use thiserror::Error;

/// Everything that can go wrong while decoding a section.
///
/// Missing files are not represented here: absence is a degraded-but-valid
/// outcome handled by the loader, not a codec failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A section declares more data than the source holds. No partial data
    /// is returned; the whole decode of that file is abandoned.
    #[error("truncated file: section `{section}` needs {need} bytes, {have} available")]
    Truncated {
        section: &'static str,
        need: usize,
        have: usize,
    },
    /// Exactly one of the two counts sizing the temporal section is zero.
    /// A recording with agents but no timesteps (or the reverse) has no
    /// representable temporal layout.
    #[error("inconsistent counts: {timesteps} timesteps vs {agents} agents")]
    InconsistentCounts { timesteps: u32, agents: u32 },
}
