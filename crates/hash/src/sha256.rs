// Copyright 2025 Irreducible Inc.

use digest::{
	FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update,
	consts::{U32, U64},
	core_api::BlockSizeUser,
};

use crate::{
	compress::compress_block,
	consts::{BLOCK_BYTES, DIGEST_BYTES, IV},
	error::HashError,
};

/// Marks the end of the message in the padding, a single 1 bit.
const PADDING_START: u8 = 0x80;

/// Streaming SHA-256 hasher.
///
/// Holds the running 8-word state, a partial-block buffer, and the message
/// bit count. The state after each block is a pure function of the previous
/// state and that block, so the digest depends only on the concatenation of
/// all [`Update::update`] calls, never on chunk boundaries.
///
/// A hasher is exclusively owned by one computation; hashing distinct
/// messages concurrently just means one hasher per thread.
#[derive(Clone)]
pub struct Sha256 {
	state: [u32; 8],
	buffer: [u8; BLOCK_BYTES],
	filled_bytes: usize,
	// Tracked wider than the 64-bit length field so that overflow is
	// detected at finalization instead of silently truncating.
	message_bits: u128,
}

impl Default for Sha256 {
	fn default() -> Self {
		Self {
			state: IV,
			buffer: [0; BLOCK_BYTES],
			filled_bytes: 0,
			message_bits: 0,
		}
	}
}

impl Sha256 {
	pub fn new() -> Self {
		Self::default()
	}

	/// Consumes the hasher and returns the 32-byte big-endian digest.
	///
	/// Fails with [`HashError::LengthOverflow`] if more than 2^64 - 1 bits
	/// were hashed, since the padding cannot encode such a length.
	pub fn try_finalize(mut self) -> Result<[u8; DIGEST_BYTES], HashError> {
		let mut digest = [0u8; DIGEST_BYTES];
		self.try_finalize_into(&mut digest)?;
		Ok(digest)
	}

	/// Pads the buffered tail, compresses the closing block(s), and writes
	/// the final state big-endian into `out`, FIPS 180-4 §5.1.1 and §6.2.2.
	fn try_finalize_into(&mut self, out: &mut [u8; DIGEST_BYTES]) -> Result<(), HashError> {
		let message_bits =
			u64::try_from(self.message_bits).map_err(|_| HashError::LengthOverflow)?;

		self.buffer[self.filled_bytes] = PADDING_START;
		self.buffer[self.filled_bytes + 1..].fill(0);

		// The 8-byte length field does not fit after the marker: close this
		// block and pad a second one.
		if self.filled_bytes + 9 > BLOCK_BYTES {
			compress_block(&mut self.state, &self.buffer);
			self.buffer.fill(0);
		}

		self.buffer[BLOCK_BYTES - 8..].copy_from_slice(&message_bits.to_be_bytes());
		compress_block(&mut self.state, &self.buffer);

		for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		Ok(())
	}
}

impl HashMarker for Sha256 {}

impl Update for Sha256 {
	fn update(&mut self, mut data: &[u8]) {
		self.message_bits += (data.len() as u128) * 8;

		if self.filled_bytes != 0 {
			let to_copy = data.len().min(BLOCK_BYTES - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_BYTES {
				compress_block(&mut self.state, &self.buffer);
				self.filled_bytes = 0;
			} else {
				return;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_BYTES);
		for chunk in &mut chunks {
			compress_block(&mut self.state, chunk.try_into().expect("chunk is 64 bytes"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}
}

impl OutputSizeUser for Sha256 {
	type OutputSize = U32;
}

impl BlockSizeUser for Sha256 {
	type BlockSize = U64;
}

impl FixedOutput for Sha256 {
	/// Panics if more than 2^64 - 1 bits were hashed; use
	/// [`Sha256::try_finalize`] to observe that condition as an error.
	fn finalize_into(mut self, out: &mut digest::Output<Self>) {
		let mut digest = [0u8; DIGEST_BYTES];
		self.try_finalize_into(&mut digest)
			.expect("message length exceeds 2^64 - 1 bits");
		out.copy_from_slice(&digest);
	}
}

impl Reset for Sha256 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl FixedOutputReset for Sha256 {
	fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
		let mut digest = [0u8; DIGEST_BYTES];
		self.try_finalize_into(&mut digest)
			.expect("message length exceeds 2^64 - 1 bits");
		out.copy_from_slice(&digest);
		Reset::reset(self);
	}
}

/// Computes the SHA-256 digest of `data` in one shot.
pub fn sha256(data: impl AsRef<[u8]>) -> Result<[u8; DIGEST_BYTES], HashError> {
	let mut hasher = Sha256::new();
	Update::update(&mut hasher, data.as_ref());
	hasher.try_finalize()
}
