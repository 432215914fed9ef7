use super::super::LaneArray;

/// Pure relabeling of lane positions: new lane (x, y) is old lane
/// ((x + 3y) mod 5, x). Lane contents are untouched.
pub fn pi(lanes: LaneArray) -> LaneArray {
	let mut out = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			out[x][y] = lanes[(x + 3 * y) % 5][x];
		}
	}

	out
}
