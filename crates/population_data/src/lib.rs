//! `population_data`: files and paths for population recordings.
//!
//! Scope
//! - Derive the two companion file paths from a caller-supplied base path.
//! - Tolerant dataset loading: a missing constant file means "no dataset",
//!   a missing temporal file means a dataset without the motion series.
//!   Malformed bytes are hard errors, never silently truncated output.
//! - The matching writer, so producers and round-trip tests share one wire
//!   contract with the reader.

pub mod dataset;
pub mod paths;

pub use dataset::{load_dataset, write_dataset, PopulationDataset};
pub use paths::DatasetPaths;
