pub mod api {
    use anyhow::{Context, Result};
    use population_core::{PopulationConstant, PopulationTemporal, TemporalFrame};
    use population_data::{write_dataset, DatasetPaths, PopulationDataset};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use serde::Serialize;
    use std::collections::hash_map::DefaultHasher;
    use std::fs;
    use std::hash::{Hash, Hasher};
    use std::path::PathBuf;

    #[derive(Debug)]
    pub struct BakeInputs {
        pub base: PathBuf,
        pub agents: u32,
        pub timesteps: u32,
        pub dt: f32,
        pub seed: u64,
    }

    #[derive(Serialize)]
    struct DatasetMeta<'a> {
        schema: &'a str,
        agents: u32,
        timesteps: u32,
        dt: f32,
        seed: u64,
        fingerprint: u64,
    }

    /// Generate a synthetic recording and write the companion files plus a
    /// human-readable `<base>.meta.json` sidecar.
    pub fn bake_dataset(inputs: &BakeInputs) -> Result<DatasetPaths> {
        if let Some(parent) = inputs.base.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("mkdir {}", parent.display()))?;
            }
        }
        let dataset = synthesize(inputs);
        let paths = write_dataset(&inputs.base, &dataset)?;

        let meta = DatasetMeta {
            schema: "population.v1",
            agents: inputs.agents,
            timesteps: inputs.timesteps,
            dt: inputs.dt,
            seed: inputs.seed,
            fingerprint: fingerprint(&dataset),
        };
        let mut meta_path = inputs.base.clone().into_os_string();
        meta_path.push(".meta.json");
        let txt = serde_json::to_string_pretty(&meta)?;
        fs::write(PathBuf::from(meta_path), txt)?;
        Ok(paths)
    }

    /// Seeded straight-line walkers: each agent heads from a random start
    /// toward a random goal at its will speed. Deterministic per seed.
    fn synthesize(inputs: &BakeInputs) -> PopulationDataset {
        let mut rng = ChaCha8Rng::seed_from_u64(inputs.seed);
        let np = inputs.agents as usize;
        let nt = inputs.timesteps as usize;

        let mut masses = Vec::with_capacity(np);
        let mut radiuses = Vec::with_capacity(np);
        let mut wills = Vec::with_capacity(np);
        let mut fatigues = Vec::with_capacity(np);
        let mut starts: Vec<[f32; 2]> = Vec::with_capacity(np);
        let mut dirs: Vec<[f32; 2]> = Vec::with_capacity(np);

        for _ in 0..np {
            masses.push(rng.gen_range(55.0f32..95.0));
            radiuses.push(rng.gen_range(0.25f32..0.35));
            wills.push(rng.gen_range(0.8f32..1.6));
            fatigues.push(rng.gen_range(0.0f32..0.5));
            let start = [rng.gen_range(0.0f32..20.0), rng.gen_range(0.0f32..20.0)];
            let goal = [rng.gen_range(0.0f32..20.0), rng.gen_range(0.0f32..20.0)];
            let (dx, dy) = (goal[0] - start[0], goal[1] - start[1]);
            let len = (dx * dx + dy * dy).sqrt();
            let dir = if len > 1e-6 { [dx / len, dy / len] } else { [1.0, 0.0] };
            starts.push(start);
            dirs.push(dir);
        }

        let frames: Vec<TemporalFrame> = (0..nt)
            .map(|k| {
                let time = k as f32 * inputs.dt;
                let mut positions = Vec::with_capacity(np);
                let mut velocities = Vec::with_capacity(np);
                let mut wishes = Vec::with_capacity(np);
                for p in 0..np {
                    let speed = wills[p];
                    positions.push([
                        starts[p][0] + dirs[p][0] * speed * time,
                        starts[p][1] + dirs[p][1] * speed * time,
                    ]);
                    velocities.push([dirs[p][0] * speed, dirs[p][1] * speed]);
                    wishes.push(dirs[p]);
                }
                TemporalFrame {
                    time,
                    positions,
                    velocities,
                    wishes,
                }
            })
            .collect();

        // A zero-timestep recording of live agents has no representable
        // temporal layout; leave the file out instead.
        let temporal = if nt == 0 && np > 0 {
            None
        } else {
            Some(PopulationTemporal { frames })
        };

        PopulationDataset {
            constant: PopulationConstant {
                timestep_count: inputs.timesteps,
                agent_count: inputs.agents,
                masses,
                radiuses,
                wills,
                fatigues,
            },
            temporal,
        }
    }

    fn fingerprint(dataset: &PopulationDataset) -> u64 {
        let mut hasher = DefaultHasher::new();
        let c = &dataset.constant;
        c.timestep_count.hash(&mut hasher);
        c.agent_count.hash(&mut hasher);
        for run in [&c.masses, &c.radiuses, &c.wills, &c.fatigues] {
            for v in run {
                v.to_bits().hash(&mut hasher);
            }
        }
        if let Some(t) = &dataset.temporal {
            for frame in &t.frames {
                frame.time.to_bits().hash(&mut hasher);
                for series in [&frame.positions, &frame.velocities, &frame.wishes] {
                    for [x, y] in series.iter() {
                        x.to_bits().hash(&mut hasher);
                        y.to_bits().hash(&mut hasher);
                    }
                }
            }
        }
        hasher.finish()
    }
}
