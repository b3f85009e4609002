//! population-dump: load a recording by base path and log a summary.
//!
//! Usage:
//!   cargo run -p population-dump -- <base>
//! Example:
//!   cargo run -p population-dump -- sample/population

use anyhow::{bail, Result};

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let Some(base) = std::env::args().nth(1) else {
        bail!("usage: population-dump <base-path>");
    };

    let Some(dataset) = population_data::load_dataset(&base)? else {
        log::warn!("no dataset under '{}'", base);
        return Ok(());
    };

    let c = &dataset.constant;
    log::info!(
        "dataset '{}': agents={}, timesteps={}",
        base,
        c.agent_count,
        c.timestep_count
    );
    if let Some(p) = c.masses.iter().zip(&c.radiuses).next() {
        log::info!("agent 0: mass={:.1} kg, radius={:.2} m", p.0, p.1);
    }

    match &dataset.temporal {
        Some(t) => {
            if let (Some(first), Some(last)) = (t.frames.first(), t.frames.last()) {
                log::info!(
                    "time range {:.3}..{:.3} s over {} frames",
                    first.time,
                    last.time,
                    t.frames.len()
                );
                for (p, pos) in first.positions.iter().enumerate().take(4) {
                    log::info!("agent {}: start=({:.2}, {:.2})", p, pos[0], pos[1]);
                }
            } else {
                log::info!("temporal series is empty");
            }
        }
        None => log::info!("temporal series absent"),
    }
    Ok(())
}
