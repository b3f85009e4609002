//! Constant section: per-agent attributes fixed for the whole recording.

use crate::codec::{self, SectionDecode, SectionEncode};
use crate::error::DecodeError;

/// The `<base>.constant.data` payload: the two counts that size the rest of
/// the dataset, then one contiguous float run per attribute.
///
/// All four attribute vectors have length exactly `agent_count`, and index
/// `p` denotes the same agent in each of them (and in every temporal frame).
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationConstant {
    pub timestep_count: u32,
    pub agent_count: u32,
    pub masses: Vec<f32>,
    pub radiuses: Vec<f32>,
    pub wills: Vec<f32>,
    pub fatigues: Vec<f32>,
}

impl SectionEncode for PopulationConstant {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.timestep_count.to_le_bytes());
        out.extend_from_slice(&self.agent_count.to_le_bytes());
        codec::put_f32_run(out, &self.masses);
        codec::put_f32_run(out, &self.radiuses);
        codec::put_f32_run(out, &self.wills);
        codec::put_f32_run(out, &self.fatigues);
    }
}

impl SectionDecode for PopulationConstant {
    fn decode(inp: &mut &[u8]) -> Result<Self, DecodeError> {
        let timestep_count = codec::read_u32(inp, "header")?;
        let agent_count = codec::read_u32(inp, "header")?;
        let n = agent_count as usize;
        // Each run is read fully before the next begins; no interleaving.
        let masses = codec::read_f32_run(inp, n, "masses")?;
        let radiuses = codec::read_f32_run(inp, n, "radiuses")?;
        let wills = codec::read_f32_run(inp, n, "wills")?;
        let fatigues = codec::read_f32_run(inp, n, "fatigues")?;
        Ok(Self {
            timestep_count,
            agent_count,
            masses,
            radiuses,
            wills,
            fatigues,
        })
    }
}
