// Copyright 2025 Irreducible Inc.

use cinder_hash::{Sha256, compress256, consts::IV};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use digest::Digest;
use rand::{RngCore, thread_rng};

fn bench_sha256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("Sha256", |bench| bench.iter(|| <Sha256 as Digest>::digest(&data)));

	group.bench_function("Sha256-RustCrypto", |bench| {
		bench.iter(|| <sha2::Sha256 as sha2::Digest>::digest(&data))
	});

	group.finish()
}

fn bench_compress256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256 compression");

	let mut rng = thread_rng();

	const N_BLOCKS: usize = 1 << 10;
	let mut blocks = vec![[0u8; 64]; N_BLOCKS];
	for block in &mut blocks {
		rng.fill_bytes(block);
	}

	group.throughput(Throughput::Bytes((N_BLOCKS * 64) as u64));
	group.bench_function("compress256", |bench| {
		bench.iter(|| {
			let mut state = IV;
			compress256(&mut state, &blocks);
			state
		})
	});

	group.finish()
}

criterion_group!(hash, bench_sha256, bench_compress256);
criterion_main!(hash);
