//! Byte-level primitives for the population wire format.
//!
//! Format (little-endian, pinned): every multi-byte field in both files is
//! little-endian, independent of host byte order. `u32` counts are 4 bytes,
//! scalars are IEEE-754 `f32`, 2-D vectors are an `x` float followed by a
//! `y` float. Values are copied bit-for-bit; the codec applies no numeric
//! transformation. Trailing bytes after the last section are ignored.

use crate::error::DecodeError;

/// Sections that can write themselves into a byte buffer.
pub trait SectionEncode {
    fn encode(&self, out: &mut Vec<u8>);
}

/// Sections that reconstruct themselves from a byte slice, advancing it.
pub trait SectionDecode: Sized {
    fn decode(inp: &mut &[u8]) -> Result<Self, DecodeError>;
}

/// Split `N` bytes off the front of `inp`, or report how short it fell.
pub(crate) fn take<const N: usize>(
    inp: &mut &[u8],
    section: &'static str,
) -> Result<[u8; N], DecodeError> {
    if inp.len() < N {
        return Err(DecodeError::Truncated {
            section,
            need: N,
            have: inp.len(),
        });
    }
    let (a, b) = inp.split_at(N);
    *inp = b;
    let mut buf = [0u8; N];
    buf.copy_from_slice(a);
    Ok(buf)
}

pub(crate) fn read_u32(inp: &mut &[u8], section: &'static str) -> Result<u32, DecodeError> {
    Ok(u32::from_le_bytes(take::<4>(inp, section)?))
}

/// Read a contiguous run of `count` floats. The length check happens before
/// any allocation, so a corrupt count cannot force a huge buffer.
pub(crate) fn read_f32_run(
    inp: &mut &[u8],
    count: usize,
    section: &'static str,
) -> Result<Vec<f32>, DecodeError> {
    let need = count * 4;
    if inp.len() < need {
        return Err(DecodeError::Truncated {
            section,
            need,
            have: inp.len(),
        });
    }
    let (run, rest) = inp.split_at(need);
    *inp = rest;
    Ok(run
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Read a contiguous run of `count` (x, y) float pairs.
pub(crate) fn read_vec2_run(
    inp: &mut &[u8],
    count: usize,
    section: &'static str,
) -> Result<Vec<[f32; 2]>, DecodeError> {
    let need = count * 8;
    if inp.len() < need {
        return Err(DecodeError::Truncated {
            section,
            need,
            have: inp.len(),
        });
    }
    let (run, rest) = inp.split_at(need);
    *inp = rest;
    Ok(run
        .chunks_exact(8)
        .map(|b| {
            [
                f32::from_le_bytes([b[0], b[1], b[2], b[3]]),
                f32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            ]
        })
        .collect())
}

pub(crate) fn put_f32_run(out: &mut Vec<u8>, run: &[f32]) {
    for v in run {
        out.extend_from_slice(&v.to_le_bytes());
    }
}
