// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("message length exceeds 2^64 - 1 bits and cannot be encoded in the length field")]
	LengthOverflow,
}
