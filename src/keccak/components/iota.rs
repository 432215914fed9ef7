use super::super::{LaneArray, ROUND_CONSTANTS};

/// Breaks round self-similarity by XORing a round-dependent constant into
/// lane (0, 0).
pub fn iota(lanes: LaneArray, round: usize) -> LaneArray {
	let mut out = lanes;

	out[0][0] ^= ROUND_CONSTANTS[round];

	out
}
