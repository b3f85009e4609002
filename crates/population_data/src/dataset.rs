//! Dataset assembly: read the two companion files and decode them.

use anyhow::{Context, Result};
use population_core::{PopulationConstant, PopulationTemporal, SectionDecode, SectionEncode};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::paths::DatasetPaths;

/// A fully decoded recording: fixed attributes plus, when the temporal file
/// was present, the per-timestep motion series.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationDataset {
    pub constant: PopulationConstant,
    pub temporal: Option<PopulationTemporal>,
}

/// Load the recording stored under `base`.
///
/// Returns `Ok(None)` when the constant file is missing or unreadable: there
/// is no dataset, and the temporal file is never consulted since its layout
/// cannot be interpreted without the counts. A missing temporal file alone
/// degrades to `temporal: None`. Malformed bytes abort with an error carrying
/// the offending path.
pub fn load_dataset(base: impl AsRef<OsStr>) -> Result<Option<PopulationDataset>> {
    let paths = DatasetPaths::derive(&base);
    log::debug!("population: constant file {}", paths.constant.display());
    log::debug!("population: temporal file {}", paths.temporal.display());

    let Some(constant_bytes) = read_opt(&paths.constant) else {
        log::info!(
            "population: no constant file at {}, dataset absent",
            paths.constant.display()
        );
        return Ok(None);
    };
    let mut inp: &[u8] = &constant_bytes;
    let constant = PopulationConstant::decode(&mut inp)
        .with_context(|| format!("decode constant data: {}", paths.constant.display()))?;

    let temporal = match read_opt(&paths.temporal) {
        Some(bytes) => {
            let mut inp: &[u8] = &bytes;
            let series = PopulationTemporal::decode(
                &mut inp,
                constant.timestep_count,
                constant.agent_count,
            )
            .with_context(|| format!("decode temporal data: {}", paths.temporal.display()))?;
            Some(series)
        }
        None => None,
    };
    Ok(Some(PopulationDataset { constant, temporal }))
}

/// Write `dataset` under `base` with the same wire contract the loader
/// expects. The temporal file is written only when the series is present.
pub fn write_dataset(base: impl AsRef<OsStr>, dataset: &PopulationDataset) -> Result<DatasetPaths> {
    let paths = DatasetPaths::derive(&base);
    let mut buf = Vec::new();
    dataset.constant.encode(&mut buf);
    fs::write(&paths.constant, &buf)
        .with_context(|| format!("write {}", paths.constant.display()))?;
    if let Some(temporal) = &dataset.temporal {
        let mut buf = Vec::new();
        temporal.encode(&mut buf);
        fs::write(&paths.temporal, &buf)
            .with_context(|| format!("write {}", paths.temporal.display()))?;
    }
    Ok(paths)
}

fn read_opt(path: &Path) -> Option<Vec<u8>> {
    if path.exists() {
        match fs::read(path) {
            Ok(b) => Some(b),
            Err(e) => {
                log::warn!("population: failed to read {:?}: {}", path, e);
                None
            }
        }
    } else {
        None
    }
}
