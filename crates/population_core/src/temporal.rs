//! Temporal section: the per-timestep motion series.
//!
//! On disk the three vector blocks are agent-major/time-minor: each agent's
//! whole trajectory is one contiguous run of (x, y) pairs, and the runs
//! repeat per agent. In memory the series is frame-major. The decoder
//! scatters on-disk pair `p * timestep_count + nt` into `frames[nt]` slot
//! `p`; the encoder gathers it back into the same order.

use crate::codec::{self, SectionEncode};
use crate::error::DecodeError;

/// One simulation timestep: a time stamp plus per-agent motion vectors.
///
/// Within a frame, index `p` in each vector refers to the same agent as
/// index `p` in [`crate::PopulationConstant`]'s attribute runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalFrame {
    pub time: f32,
    pub positions: Vec<[f32; 2]>,
    pub velocities: Vec<[f32; 2]>,
    pub wishes: Vec<[f32; 2]>,
}

/// The full time series, one frame per recorded timestep, in stored
/// (chronological) order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopulationTemporal {
    pub frames: Vec<TemporalFrame>,
}

impl PopulationTemporal {
    /// Decode a `<base>.temporal.data` payload.
    ///
    /// The temporal file carries no counts of its own; both come from the
    /// already-decoded constant section. A zero/zero pair is a legitimate
    /// empty recording; a zero on one side only has no representable layout
    /// and is rejected.
    pub fn decode(
        inp: &mut &[u8],
        timestep_count: u32,
        agent_count: u32,
    ) -> Result<Self, DecodeError> {
        if (timestep_count == 0) != (agent_count == 0) {
            return Err(DecodeError::InconsistentCounts {
                timesteps: timestep_count,
                agents: agent_count,
            });
        }
        let nt = timestep_count as usize;
        let np = agent_count as usize;

        let times = codec::read_f32_run(inp, nt, "times")?;
        let mut frames: Vec<TemporalFrame> = times
            .into_iter()
            .map(|time| TemporalFrame {
                time,
                positions: vec![[0.0, 0.0]; np],
                velocities: vec![[0.0, 0.0]; np],
                wishes: vec![[0.0, 0.0]; np],
            })
            .collect();

        scatter(inp, &mut frames, np, nt, "positions", |f| &mut f.positions)?;
        scatter(inp, &mut frames, np, nt, "velocities", |f| &mut f.velocities)?;
        scatter(inp, &mut frames, np, nt, "wishes", |f| &mut f.wishes)?;
        Ok(Self { frames })
    }
}

/// Read one agent-major block and transpose it into frame-major storage.
fn scatter(
    inp: &mut &[u8],
    frames: &mut [TemporalFrame],
    np: usize,
    nt: usize,
    section: &'static str,
    select: impl Fn(&mut TemporalFrame) -> &mut Vec<[f32; 2]>,
) -> Result<(), DecodeError> {
    let pairs = codec::read_vec2_run(inp, np * nt, section)?;
    for p in 0..np {
        for (t, frame) in frames.iter_mut().enumerate() {
            select(frame)[p] = pairs[p * nt + t];
        }
    }
    Ok(())
}

/// Write one frame-major series back out in agent-major order.
fn gather(out: &mut Vec<u8>, frames: &[TemporalFrame], select: impl Fn(&TemporalFrame) -> &[[f32; 2]]) {
    let np = frames.first().map_or(0, |f| select(f).len());
    for p in 0..np {
        for frame in frames {
            let [x, y] = select(frame)[p];
            out.extend_from_slice(&x.to_le_bytes());
            out.extend_from_slice(&y.to_le_bytes());
        }
    }
}

impl SectionEncode for PopulationTemporal {
    fn encode(&self, out: &mut Vec<u8>) {
        for frame in &self.frames {
            out.extend_from_slice(&frame.time.to_le_bytes());
        }
        gather(out, &self.frames, |f| &f.positions);
        gather(out, &self.frames, |f| &f.velocities);
        gather(out, &self.frames, |f| &f.wishes);
    }
}
