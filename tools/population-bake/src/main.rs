//! population-bake: write a synthetic population recording under `<base>`.
//!
//! Usage:
//!   cargo run -p population-bake -- <base> [agents] [timesteps]
//! Example:
//!   cargo run -p population-bake -- sample/population 24 600

use anyhow::Result;
use population_bake::api::{bake_dataset, BakeInputs};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample/population".to_string());
    let agents = arg_u32(2).unwrap_or(24);
    let timesteps = arg_u32(3).unwrap_or(600);

    let inputs = BakeInputs {
        base: PathBuf::from(base),
        agents,
        timesteps,
        dt: 0.05,
        seed: 7_297_351,
    };
    let paths = bake_dataset(&inputs)?;
    log::info!(
        "wrote {} and {} (agents={}, timesteps={})",
        paths.constant.display(),
        paths.temporal.display(),
        inputs.agents,
        inputs.timesteps
    );
    Ok(())
}

fn arg_u32(n: usize) -> Option<u32> {
    std::env::args().nth(n).and_then(|s| s.parse().ok())
}
