//! The sponge construction: multi-rate padding, absorb, and squeeze.

use core::cmp;

use super::{keccak_f, DIGEST_BYTES, RATE_BYTES, STATE_BYTES};

/// Iterator over the padded input, one rate-sized block at a time.
///
/// Padding follows the pad10*1 rule applied at the leading edge of the
/// message: a `1` bit, a run of `0`s, and a second `1` bit immediately
/// before the first message bit. The message is byte-aligned, so the pad
/// is a whole number of bytes, `0x80` first and `0x01` last, the two
/// sharing one `0x81` byte when a single byte of padding suffices. When
/// the message is already a whole number of blocks, a full block of
/// padding precedes it, so every message yields at least one block.
struct Blocks<'a> {
	bytes: &'a [u8],
	first: bool,
}

impl<'a> Blocks<'a> {
	fn new(bytes: &'a [u8]) -> Self {
		Self {bytes, first: true}
	}
}

impl<'a> Iterator for Blocks<'a> {
	type Item = [u8; RATE_BYTES];

	fn next(&mut self) -> Option<Self::Item> {
		let mut block = [0; RATE_BYTES];

		if self.first {
			self.first = false;

			// the pad fills the first block down to a whole number of
			// trailing message bytes, leaving the rest of the message
			// block-aligned
			let pad_len = RATE_BYTES - self.bytes.len() % RATE_BYTES;

			block[0] |= 0x80;
			block[pad_len - 1] |= 0x01;

			block[pad_len ..].copy_from_slice(&self.bytes[.. RATE_BYTES - pad_len]);
			self.bytes = &self.bytes[RATE_BYTES - pad_len ..];

			return Some(block);
		}

		if self.bytes.is_empty() {
			return None;
		}

		block.copy_from_slice(&self.bytes[.. RATE_BYTES]);
		self.bytes = &self.bytes[RATE_BYTES ..];

		Some(block)
	}
}

/// Returns the 256-bit sponge digest of the byte slice passed to it.
///
/// Absorbs the padded input into an all-zero 1600-bit state one rate-sized
/// block at a time, permuting after each block, then squeezes the first 32
/// bytes of the final state.
pub fn keccak256(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
	let mut state = [0; STATE_BYTES];

	for block in Blocks::new(bytes) {
		for (state_byte, block_byte) in state.iter_mut().zip(block) {
			*state_byte ^= block_byte;
		}

		keccak_f(&mut state);
	}

	let mut out = [0; DIGEST_BYTES];
	let mut filled = 0;

	while filled < DIGEST_BYTES {
		let take = cmp::min(RATE_BYTES, DIGEST_BYTES - filled);
		out[filled .. filled + take].copy_from_slice(&state[.. take]);
		filled += take;

		if filled < DIGEST_BYTES {
			keccak_f(&mut state);
		}
	}

	out
}

#[test]
fn padding_block_counts() {
	let input = [0; 4 * RATE_BYTES];

	// one extra whole block of padding at exact rate multiples
	assert_eq!(Blocks::new(&[]).count(), 1);
	assert_eq!(Blocks::new(&input[.. RATE_BYTES - 1]).count(), 1);
	assert_eq!(Blocks::new(&input[.. RATE_BYTES]).count(), 2);
	assert_eq!(Blocks::new(&input[.. RATE_BYTES + 1]).count(), 2);
	assert_eq!(Blocks::new(&input[..]).count(), 5);
}

#[test]
fn padding_of_empty_input() {
	let mut blocks = Blocks::new(&[]);
	let block = blocks.next().unwrap();

	assert_eq!(block[0], 0x80);
	assert_eq!(block[RATE_BYTES - 1], 0x01);
	assert!(block[1 .. RATE_BYTES - 1].iter().all(|&byte| byte == 0));
	assert!(blocks.next().is_none());
}

#[test]
fn padding_precedes_message() {
	let mut blocks = Blocks::new(&[0xab]);
	let block = blocks.next().unwrap();

	assert_eq!(block[0], 0x80);
	assert_eq!(block[RATE_BYTES - 2], 0x01);
	assert_eq!(block[RATE_BYTES - 1], 0xab);
	assert!(blocks.next().is_none());
}

#[test]
fn padding_bits_share_leading_byte() {
	let input = [0xff; RATE_BYTES - 1];
	let block = Blocks::new(&input).next().unwrap();

	assert_eq!(block[0], 0x81);
	assert_eq!(block[1], 0xff);
}

#[test]
fn known_digests() {
	assert_eq!(
		hex::encode(keccak256(b"")),
		"cc02b5de8fa56eb3f560a1163c9538952c713b6992ee239afa8958b71dd9ba00",
	);

	assert_eq!(
		hex::encode(keccak256(&[0x00])),
		"3aed8c8168ec20f8b6ce8c2cc2221422f045d9d565de952c77cd05222ec9643d",
	);

	assert_eq!(
		hex::encode(keccak256(b"abc")),
		"63d984835dcbdb29476fea9973580e829bd68002a0a19e24a137dd0f0ff6f355",
	);

	assert_eq!(
		hex::encode(keccak256(b"The quick brown fox jumps over the lazy dog")),
		"f0ed95cfa166a96a99a8cb868c201d44eaa0126402feaf90d394e8ac02940c01",
	);
}

#[test]
fn digests_across_block_boundaries() {
	let input = [0xa5; 3 * RATE_BYTES];
	let mut digests = Vec::new();

	for len in [0, 1, RATE_BYTES - 1, RATE_BYTES, RATE_BYTES + 1, 3 * RATE_BYTES] {
		let digest = keccak256(&input[.. len]);
		assert_eq!(digest.len(), DIGEST_BYTES);
		digests.push(digest);
	}

	for i in 0 .. digests.len() {
		for j in i + 1 .. digests.len() {
			assert_ne!(digests[i], digests[j]);
		}
	}
}

#[test]
fn digest_is_deterministic() {
	let input: Vec<u8> = (0 .. 1000).map(|i| i as u8).collect();

	assert_eq!(keccak256(&input), keccak256(&input));
}

#[test]
fn rate_sized_input_absorbs_two_blocks() {
	let input = [0x55; RATE_BYTES];

	let mut blocks = Blocks::new(&input);
	let pad_block = blocks.next().unwrap();

	// the first block is pure padding; the message fills the second
	assert_eq!(pad_block[0], 0x80);
	assert_eq!(pad_block[RATE_BYTES - 1], 0x01);
	assert_eq!(blocks.next().unwrap(), input);
	assert!(blocks.next().is_none());

	assert_eq!(
		hex::encode(keccak256(&input)),
		"d5720de64ecf6b86eb419e192d58678b0475c3b91d427b377e459f46d6dd67d1",
	);
}

#[test]
fn avalanche_on_single_bit_flips() {
	use rand::Rng;

	let mut rng = rand::thread_rng();
	let mut flipped_bits: u32 = 0;
	let samples: usize = 50;

	for _ in 0 .. samples {
		let mut input = [0; 64];
		rng.fill(&mut input[..]);

		let before = keccak256(&input);

		let bit = rng.gen_range(0 .. input.len() * 8);
		input[bit / 8] ^= 1 << (bit % 8);

		let after = keccak256(&input);

		for (a, b) in before.iter().zip(after.iter()) {
			flipped_bits += (a ^ b).count_ones();
		}
	}

	let total_bits = (samples * 8 * DIGEST_BYTES) as f64;
	let ratio = flipped_bits as f64 / total_bits;

	assert!(ratio > 0.40 && ratio < 0.60, "avalanche ratio {}", ratio);
}
