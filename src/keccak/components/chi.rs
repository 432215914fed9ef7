use super::super::LaneArray;

/// The only nonlinear step: each bit is XORed with a function of the two
/// lanes to its right in the same row.
pub fn chi(lanes: LaneArray) -> LaneArray {
	let mut out = lanes;

	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			out[x][y] ^= !lanes[xp1][y] & lanes[xp2][y];
		}
	}

	out
}
