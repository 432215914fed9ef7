use super::super::LaneArray;

/// Inter-lane bit diffusion: rotates each lane by a triangular-number
/// offset (t + 1)(t + 2) / 2, walking the lanes in the order given by
/// (x, y) <- (y, (2x + 3y) mod 5) starting from (1, 0). The walk visits
/// every lane except (0, 0), which stays unrotated.
pub fn rho(lanes: LaneArray) -> LaneArray {
	let mut out = lanes;

	let mut offset = 0;

	let mut x = 1;
	let mut y = 0;

	for t in 0 .. 24 {
		offset += t + 1;

		out[x][y] = lanes[x][y].rotate_left(offset);

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;
	}

	out
}
