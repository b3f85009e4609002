//! `population_core`: wire types + binary codec for population recordings.
//!
//! Scope
//! - Owned value types for a recorded pedestrian population: fixed per-agent
//!   attributes plus a per-timestep series of positions, velocities, and
//!   wish directions.
//! - Encode/decode for the two on-disk sections (constant and temporal),
//!   including the agent-major to frame-major transposition of the temporal
//!   vector blocks.
//! - No filesystem access here; callers hand in byte slices. File handling
//!   and path derivation live in `population_data`.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod codec;
pub mod constant;
pub mod error;
pub mod temporal;

pub use codec::{SectionDecode, SectionEncode};
pub use constant::PopulationConstant;
pub use error::DecodeError;
pub use temporal::{PopulationTemporal, TemporalFrame};
