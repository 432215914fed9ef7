//! Throughput benchmarks for the sponge over a few input sizes.

use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use libkeccak::keccak256;

fn bench_keccak256(c: &mut Criterion) {
	let mut group = c.benchmark_group("keccak256");

	for size in [0, 32, 136, 1024, 16 * 1024] {
		let input: Vec<u8> = (0 .. size).map(|i| i as u8).collect();

		group.throughput(Throughput::Bytes(size as u64));
		group.bench_function(format!("{size} bytes"), |b| {
			b.iter(|| black_box(keccak256(black_box(&input))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_keccak256);
criterion_main!(benches);
