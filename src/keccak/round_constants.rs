//! Round constants derived from a degree-8 LFSR.

/// Output bit of the LFSR for the feedback polynomial
/// x^8 + x^6 + x^5 + x^4 + 1, seeded with 1. For t not a multiple of 255
/// the register is stepped t % 255 - 1 times; at multiples of 255 the
/// output is 1 without stepping.
const fn rc(t: usize) -> bool {
	let steps = t % 255;

	if steps == 0 {
		return true;
	}

	let mut register: u16 = 1;

	let mut i = 1;

	while i < steps {
		register <<= 1;

		if register & 0x100 != 0 {
			// taps at bits 0, 4, 5, 6 plus the shifted-out bit 8
			register ^= 0x171;
		}

		i += 1;
	}

	register & 1 != 0
}

const fn compute_round_constants() -> [u64; 24] {
	let mut out = [0; 24];

	let mut round = 0;

	while round < 24 {
		// only bits at positions 2^j - 1 for j below 6 are ever set
		let mut j = 0;

		while j < 6 {
			if rc(j + 7 * round) {
				out[round] |= 1 << ((1 << j) - 1);
			}

			j += 1;
		}

		round += 1;
	}

	out
}

pub const ROUND_CONSTANTS: [u64; 24] = compute_round_constants();

#[test]
fn lfsr_low_order_bits() {
	assert!(rc(0));
	assert!(rc(255));
	assert!(rc(1));
	assert!(!rc(2));
}

#[test]
fn first_round_constant() {
	// rc(0) = rc(1) = 1 land at positions 2^0 - 1 and 2^1 - 1;
	// rc(2 ..= 5) are all zero
	assert_eq!(ROUND_CONSTANTS[0], 0x3);
}

#[test]
fn only_six_bit_positions_ever_set() {
	let mask: u64 = (1 << 0) | (1 << 1) | (1 << 3) | (1 << 7) | (1 << 15) | (1 << 31);

	for constant in ROUND_CONSTANTS {
		assert_eq!(constant & !mask, 0);
	}
}

#[test]
fn full_table() {
	let expected = [
		0x0000000000000003,
		0x0000000080008008,
		0x0000000080008088,
		0x0000000080000001,
		0x000000008000808b,
		0x0000000000000002,
		0x0000000080008002,
		0x0000000080000083,
		0x0000000000008089,
		0x0000000000008080,
		0x0000000080000082,
		0x0000000000000088,
		0x000000008000808a,
		0x000000000000808a,
		0x0000000080008083,
		0x000000008000000b,
		0x0000000080000009,
		0x0000000000008001,
		0x0000000080000089,
		0x0000000000000088,
		0x0000000080008003,
		0x0000000080008001,
		0x0000000000000003,
		0x0000000080000080,
	];

	assert_eq!(ROUND_CONSTANTS, expected);
}
