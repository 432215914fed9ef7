//! The Keccak-f[1600] permutation and the sponge construction built on it.

mod lane;
mod round_constants;

use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sponge;

/// Width of the permutation state in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Rate of the sponge in bytes (1088 bits).
pub const RATE_BYTES: usize = 136;

/// Capacity of the sponge in bytes (512 bits).
pub const CAPACITY_BYTES: usize = STATE_BYTES - RATE_BYTES;

/// Digest length in bytes (256 bits).
pub const DIGEST_BYTES: usize = 32;

/// Round count for 64-bit lanes: 12 + 2 * log2(64).
pub const NUM_ROUNDS: usize = 24;

/// The flat 1600-bit permutation state.
pub type State = [u8; STATE_BYTES];

/// The state viewed as a 5x5 grid of 64-bit lanes, indexed `[x][y]`.
/// Only exists for the duration of one permutation call.
pub type LaneArray = [[u64; 5]; 5];

/// Applies the 24-round Keccak-f[1600] permutation to `state` in place.
pub fn keccak_f(state: &mut State) {
	let mut lanes = lane::to_lanes(state);

	for round in 0 .. NUM_ROUNDS {
		lanes = theta(lanes);
		lanes = rho(lanes);
		lanes = pi(lanes);
		lanes = chi(lanes);
		lanes = iota(lanes, round);
	}

	lane::from_lanes(lanes, state);
}

#[test]
fn permutation_of_zero_state() {
	let mut state = [0; STATE_BYTES];
	keccak_f(&mut state);

	// first eight bytes of the permuted all-zero state, holding lane (0, 0)
	assert_eq!(state[.. 8], [0xe1, 0x6a, 0x54, 0x04, 0x1c, 0x31, 0xc3, 0xf5][..]);
}

#[test]
fn permutation_is_injective_on_samples() {
	use rand::Rng;

	let mut rng = rand::thread_rng();
	let mut outputs = Vec::new();

	for _ in 0 .. 64 {
		let mut state = [0; STATE_BYTES];
		rng.fill(&mut state[..]);
		keccak_f(&mut state);
		outputs.push(state);
	}

	for i in 0 .. outputs.len() {
		for j in i + 1 .. outputs.len() {
			assert_ne!(outputs[i], outputs[j]);
		}
	}
}
