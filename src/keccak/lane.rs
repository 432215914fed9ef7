//! Reindexing between the flat state and the 5x5 lane grid.
//!
//! Lane (x, y) occupies flat bit positions 64 * (5y + x) up to but not
//! including 64 * (5y + x) + 64. Flat bit 0 is the leading bit of the
//! byte stream, so flat bit b lives at bit 7 - (b mod 8) of byte b / 8
//! and flat bit z of a lane becomes bit z of its `u64`. These two
//! functions are exact inverses and perform no computation.

use super::{LaneArray, State};

pub fn to_lanes(state: &State) -> LaneArray {
	let mut lanes = [[0; 5]; 5];

	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let start = 8 * (5 * y + x);
			let bytes = state[start .. start + 8].try_into().unwrap();
			lanes[x][y] = u64::from_be_bytes(bytes).reverse_bits();
		}
	}

	lanes
}

pub fn from_lanes(lanes: LaneArray, state: &mut State) {
	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let start = 8 * (5 * y + x);
			let bytes = lanes[x][y].reverse_bits().to_be_bytes();
			state[start .. start + 8].copy_from_slice(&bytes);
		}
	}
}

#[test]
fn round_trips_bit_for_bit() {
	let mut state = [0; super::STATE_BYTES];

	for (i, byte) in state.iter_mut().enumerate() {
		*byte = (i as u8).wrapping_mul(0x9d) ^ 0x5a;
	}

	let original = state;
	let lanes = to_lanes(&state);
	from_lanes(lanes, &mut state);

	assert_eq!(state, original);
}

#[test]
fn lane_placement_matches_flat_layout() {
	let mut state = [0; super::STATE_BYTES];

	// lane (3, 2) starts at flat bit 64 * (5 * 2 + 3), byte 8 * 13;
	// 0x41 has its leading bit at z = 1 and its trailing bit at z = 7
	state[8 * 13] = 0x41;

	let lanes = to_lanes(&state);

	assert_eq!(lanes[3][2], 0x82);
	assert_eq!(lanes[0][0], 0);
}
