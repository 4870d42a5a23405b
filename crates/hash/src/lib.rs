// Copyright 2025 Irreducible Inc.

//! SHA-256 as specified in FIPS 180-4.
//!
//! The crate exposes the one-shot [`sha256`] function, the streaming
//! [`Sha256`] hasher (which also implements [`digest::Digest`]), and the
//! block-level [`compress256`] compression function.

pub mod compress;
pub mod consts;
pub mod error;
pub mod sha256;

pub use compress::compress256;
pub use error::*;
pub use sha256::*;
