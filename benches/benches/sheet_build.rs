//! Benchmark suite for sprite sheet slicing and frame extraction
//!
//! This benchmark measures the pure tiling arithmetic and the frame copy
//! path separately from texture decoding, plus the full in-memory load
//! chain.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pixatlas_benches::{encode_png, generate_test_atlas, generate_test_descriptor};
use pixatlas_types::sheet::{FrameStore, SpriteSheet, slicer};
use std::hint::black_box;

/// Benchmark the pure slicer over growing grids
fn bench_slice(c: &mut Criterion) {
	let mut group = c.benchmark_group("atlas_slice");

	for (cols, rows) in [(4u32, 1u32), (16, 16), (64, 64)] {
		let capacity = u64::from(cols * rows);
		group.throughput(Throughput::Elements(capacity));
		group.bench_with_input(
			BenchmarkId::new("auto", format!("{cols}x{rows}")),
			&(cols, rows),
			|b, &(cols, rows)| {
				b.iter(|| {
					let offsets =
						slicer::slice(black_box(cols * 16), black_box(rows * 16), 16, 16, 0);
					black_box(offsets)
				});
			},
		);
	}

	group.finish();
}

/// Benchmark frame extraction from a decoded texture
fn bench_store_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("frame_store_build");

	for (cols, rows) in [(4u32, 1u32), (8, 8), (16, 16)] {
		let texture = generate_test_atlas(32, 32, cols, rows);
		let offsets = slicer::slice(texture.width(), texture.height(), 32, 32, 0)
			.expect("valid geometry");

		let bytes = u64::from(cols * rows) * 32 * 32 * 4;
		group.throughput(Throughput::Bytes(bytes));
		group.bench_with_input(
			BenchmarkId::new("copy", format!("{cols}x{rows}")),
			&(texture, offsets),
			|b, (texture, offsets)| {
				b.iter(|| {
					let store = FrameStore::build(black_box(texture), offsets, 32, 32);
					black_box(store)
				});
			},
		);
	}

	group.finish();
}

/// Benchmark the full load chain including PNG decode
fn bench_full_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_load");
	group.sample_size(20);

	let png = encode_png(&generate_test_atlas(16, 16, 16, 4));
	let descriptor = generate_test_descriptor(16, 16, 8);

	group.bench_function("load_from_bytes", |b| {
		b.iter(|| {
			let mut sheet = SpriteSheet::new();
			sheet
				.load_from_bytes(black_box(&descriptor), black_box(&png))
				.expect("load");
			black_box(sheet)
		});
	});

	group.finish();
}

criterion_group!(benches, bench_slice, bench_store_build, bench_full_load);
criterion_main!(benches);
