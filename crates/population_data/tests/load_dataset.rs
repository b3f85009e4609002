use population_core::{DecodeError, PopulationConstant, PopulationTemporal, TemporalFrame};
use population_data::{load_dataset, write_dataset, DatasetPaths, PopulationDataset};
use std::fs;
use std::path::{Path, PathBuf};

fn base_in(tmp: &tempfile::TempDir) -> PathBuf {
    tmp.path().join("population")
}

fn write_constant_file(base: &Path, timesteps: u32, agents: u32, attrs: &[f32]) {
    let paths = DatasetPaths::derive(base);
    let mut buf = Vec::new();
    buf.extend_from_slice(&timesteps.to_le_bytes());
    buf.extend_from_slice(&agents.to_le_bytes());
    for v in attrs {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    fs::write(paths.constant, &buf).unwrap();
}

#[test]
fn missing_temporal_file_degrades_to_constant_only() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    write_constant_file(&base, 2, 1, &[70.0, 0.3, 1.0, 0.0]);

    let ds = load_dataset(&base).expect("load").expect("dataset present");
    assert_eq!(ds.constant.timestep_count, 2);
    assert_eq!(ds.constant.agent_count, 1);
    assert_eq!(ds.constant.masses, vec![70.0]);
    assert_eq!(ds.constant.radiuses, vec![0.3]);
    assert_eq!(ds.constant.wills, vec![1.0]);
    assert_eq!(ds.constant.fatigues, vec![0.0]);
    assert!(ds.temporal.is_none());
}

#[test]
fn missing_constant_file_means_no_dataset_even_with_temporal_present() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    // a temporal file alone is never interpreted
    let paths = DatasetPaths::derive(&base);
    fs::write(paths.temporal, 0.5f32.to_le_bytes()).unwrap();

    let got = load_dataset(&base).expect("load");
    assert!(got.is_none());
}

#[test]
fn full_pair_decodes_end_to_end() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    // agents=2, timesteps=1
    write_constant_file(
        &base,
        1,
        2,
        &[70.0, 80.0, 0.3, 0.35, 1.0, 1.2, 0.0, 0.0],
    );
    let paths = DatasetPaths::derive(&base);
    let mut buf = Vec::new();
    for v in [0.5f32, 1.0, 2.0, 3.0, 4.0] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    // velocities and wishes: 2 agents x 1 timestep of (0,0)
    buf.extend_from_slice(&[0u8; 2 * 8 * 2]);
    fs::write(paths.temporal, &buf).unwrap();

    let ds = load_dataset(&base).expect("load").expect("dataset present");
    let temporal = ds.temporal.expect("temporal present");
    assert_eq!(temporal.frames.len(), 1);
    let frame = &temporal.frames[0];
    assert!((frame.time - 0.5).abs() < 1e-6);
    assert_eq!(frame.positions, vec![[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(frame.velocities, vec![[0.0, 0.0], [0.0, 0.0]]);
    assert_eq!(frame.wishes, vec![[0.0, 0.0], [0.0, 0.0]]);
}

#[test]
fn truncated_constant_file_is_a_hard_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    let paths = DatasetPaths::derive(&base);
    fs::write(paths.constant, [0u8; 6]).unwrap();

    let err = load_dataset(&base).unwrap_err();
    let decode = err
        .downcast_ref::<DecodeError>()
        .expect("decode error kind preserved");
    assert!(matches!(decode, DecodeError::Truncated { .. }));
}

#[test]
fn inconsistent_counts_abort_the_load() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    // 3 timesteps but zero agents, with a temporal file present
    write_constant_file(&base, 3, 0, &[]);
    let paths = DatasetPaths::derive(&base);
    let mut buf = Vec::new();
    for v in [0.0f32, 0.1, 0.2] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    fs::write(paths.temporal, &buf).unwrap();

    let err = load_dataset(&base).unwrap_err();
    let decode = err.downcast_ref::<DecodeError>().expect("decode error kind");
    assert_eq!(
        *decode,
        DecodeError::InconsistentCounts {
            timesteps: 3,
            agents: 0
        }
    );
}

#[test]
fn empty_recording_loads_as_empty_sequences() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    write_constant_file(&base, 0, 0, &[]);
    let paths = DatasetPaths::derive(&base);
    fs::write(paths.temporal, b"").unwrap();

    let ds = load_dataset(&base).expect("load").expect("dataset present");
    assert_eq!(ds.constant.agent_count, 0);
    assert!(ds.constant.masses.is_empty());
    let temporal = ds.temporal.expect("temporal present");
    assert!(temporal.frames.is_empty());
}

#[test]
fn write_then_load_roundtrips_bit_for_bit() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = base_in(&tmp);
    let dataset = PopulationDataset {
        constant: PopulationConstant {
            timestep_count: 2,
            agent_count: 2,
            masses: vec![70.0, f32::from_bits(0x7fc0_0dad)],
            radiuses: vec![0.3, 0.28],
            wills: vec![1.0, 1.4],
            fatigues: vec![-0.0, 0.2],
        },
        temporal: Some(PopulationTemporal {
            frames: vec![
                TemporalFrame {
                    time: 0.0,
                    positions: vec![[0.0, 0.0], [5.0, 5.0]],
                    velocities: vec![[1.0, 0.0], [0.0, -1.0]],
                    wishes: vec![[1.0, 0.0], [0.0, -1.0]],
                },
                TemporalFrame {
                    time: 0.05,
                    positions: vec![[0.05, 0.0], [5.0, 4.95]],
                    velocities: vec![[1.0, 0.0], [0.0, -1.0]],
                    wishes: vec![[1.0, 0.0], [0.0, -1.0]],
                },
            ],
        }),
    };

    let paths = write_dataset(&base, &dataset).expect("write");
    assert!(paths.constant.exists());
    assert!(paths.temporal.exists());

    let loaded = load_dataset(&base).expect("load").expect("dataset present");
    assert_eq!(
        loaded.constant.masses[1].to_bits(),
        dataset.constant.masses[1].to_bits()
    );
    assert_eq!(
        loaded.constant.fatigues[0].to_bits(),
        (-0.0f32).to_bits()
    );
    assert_eq!(loaded, dataset);
}
