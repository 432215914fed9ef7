use super::super::LaneArray;

/// Diffusion step: every bit is XORed with the parity of the column to its
/// left and the parity of the column to its right rotated by one bit.
pub fn theta(lanes: LaneArray) -> LaneArray {
	let mut parities = [0; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= lanes[x][y];
		}
	}

	let mut out = lanes;

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			out[x][y] ^= crossed;
		}
	}

	out
}
