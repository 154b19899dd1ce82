//! Benchmark helper utilities for pixatlas-rs
//!
//! This module provides utilities for generating synthetic atlas textures
//! and descriptor documents for the benchmark suite. The generated atlases
//! mimic real sprite sheet workloads: a gap-free grid of equally sized
//! frames, each tile filled with a distinct color so decode and copy paths
//! cannot be trivially optimized away.

use image::{Rgba, RgbaImage};

/// Generates a synthetic atlas texture with the given grid geometry.
///
/// Each tile is filled with a color derived from its grid position.
pub fn generate_test_atlas(
	frame_width: u32,
	frame_height: u32,
	cols: u32,
	rows: u32,
) -> RgbaImage {
	RgbaImage::from_fn(frame_width * cols, frame_height * rows, |x, y| {
		let col = x / frame_width;
		let row = y / frame_height;
		let tile = row * cols + col;
		Rgba([
			(tile % 251) as u8,
			(x % 256) as u8,
			(y % 256) as u8,
			255,
		])
	})
}

/// Generates the JSON descriptor document matching [`generate_test_atlas`].
pub fn generate_test_descriptor(frame_width: u32, frame_height: u32, fps: u8) -> Vec<u8> {
	format!(
		r#"{{"texture": {{"frame": {{"width": {frame_width}, "height": {frame_height}}}, "frames": 0, "fps": {fps}}}}}"#
	)
	.into_bytes()
}

/// Encodes an atlas to PNG bytes, the on-disk form a sheet load consumes.
pub fn encode_png(texture: &RgbaImage) -> Vec<u8> {
	let mut cursor = std::io::Cursor::new(Vec::new());
	texture
		.write_to(&mut cursor, image::ImageFormat::Png)
		.expect("in-memory PNG encode");
	cursor.into_inner()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pixatlas_types::prelude::*;

	#[test]
	fn test_generated_atlas_loads() {
		let atlas = generate_test_atlas(16, 16, 8, 4);
		let png = encode_png(&atlas);
		let descriptor = generate_test_descriptor(16, 16, 8);

		let mut sheet = SpriteSheet::new();
		sheet.load_from_bytes(&descriptor, &png).unwrap();
		assert_eq!(sheet.frame_count(), 32);
	}
}
