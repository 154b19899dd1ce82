//! Sprite sheet player demo.
//!
//! Loads a sprite sheet from a descriptor + texture pair and steps the
//! playback cursor for one full cycle, printing each frame:
//!
//! ```text
//! cargo run --example player -- anim.sprite anim.png
//! ```

use anyhow::{Context, Result};
use log::info;
use pixatlas_rs::prelude::*;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let mut args = std::env::args().skip(1);
	let descriptor_path = args.next().context("usage: player <descriptor> <texture>")?;
	let texture_path = args.next().context("usage: player <descriptor> <texture>")?;

	let mut sheet = SpriteSheet::new();
	sheet
		.load(&descriptor_path, &texture_path)
		.with_context(|| format!("loading sprite sheet from {descriptor_path}"))?;

	info!(
		"loaded {} frames of {}x{} @ {} fps",
		sheet.frame_count(),
		sheet.frames().frame_width(),
		sheet.frames().frame_height(),
		sheet.fps()
	);

	// One full playback cycle.
	for _ in 0..sheet.frame_count() {
		if let Some(frame) = sheet.current_frame() {
			println!("frame {:3}: {}", sheet.cursor(), frame);
		}
		sheet.advance();
	}

	Ok(())
}
