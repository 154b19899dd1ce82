//! Pure tiling arithmetic over a sprite sheet texture.
//!
//! The slicer computes where each animation frame sits inside the texture.
//! Frames are assumed to be packed in a gap-free grid starting at the top
//! left corner; partial tiles at the right or bottom edge are ignored.
//!
//! # Enumeration Order
//!
//! Offsets are produced in row-major order: increasing column within a row,
//! then increasing row. For a 64x16 texture with 16x16 frames:
//!
//! ```text
//! (0,0) (16,0) (32,0) (48,0)
//! ```

use log::warn;

use super::SheetError;

/// Top-left corner of one frame inside the source texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameOffset {
	/// Horizontal offset in texture coordinates
	pub x: u32,
	/// Vertical offset in texture coordinates
	pub y: u32,
}

/// Computes the ordered frame offsets for a texture grid.
///
/// A `requested_count` of 0 requests automatic derivation: the frame count
/// becomes the full grid capacity `(source_width / frame_width) *
/// (source_height / frame_height)`. A non-zero request that exceeds the grid
/// capacity is truncated to the capacity; this mirrors the gap-free packing
/// assumption and is deliberately not an error.
///
/// # Arguments
///
/// * `source_width` - Texture width in pixels
/// * `source_height` - Texture height in pixels
/// * `frame_width` - Frame width in pixels
/// * `frame_height` - Frame height in pixels
/// * `requested_count` - Explicit frame count, or 0 for auto
///
/// # Errors
///
/// Returns [`SheetError::InvalidGeometry`] if either frame dimension is zero
/// or larger than the corresponding texture dimension.
///
/// # Examples
///
/// ```
/// use pixatlas_types::sheet::slicer;
///
/// let offsets = slicer::slice(64, 16, 16, 16, 0).unwrap();
/// assert_eq!(offsets.len(), 4);
/// assert_eq!((offsets[1].x, offsets[1].y), (16, 0));
/// ```
pub fn slice(
	source_width: u32,
	source_height: u32,
	frame_width: u16,
	frame_height: u16,
	requested_count: u32,
) -> Result<Vec<FrameOffset>, SheetError> {
	// The frame size must be given and must not exceed the texture size,
	// otherwise the texture cannot be cut into frames.
	if frame_width == 0
		|| frame_height == 0
		|| u32::from(frame_width) > source_width
		|| u32::from(frame_height) > source_height
	{
		return Err(SheetError::invalid_geometry(
			frame_width,
			frame_height,
			source_width,
			source_height,
		));
	}

	let grid_cols = source_width / u32::from(frame_width);
	let grid_rows = source_height / u32::from(frame_height);
	// A 1x1 frame over a 65536x65536 texture already exceeds u32 capacity.
	let capacity = u64::from(grid_cols) * u64::from(grid_rows);

	let count = if requested_count == 0 {
		capacity
	} else {
		let requested = u64::from(requested_count);
		if requested > capacity {
			warn!(
				"requested {requested_count} frames but the {grid_cols}x{grid_rows} grid holds only {capacity}, truncating"
			);
		}
		requested.min(capacity)
	};

	let mut offsets = Vec::with_capacity(count as usize);
	'rows: for row in 0..grid_rows {
		for col in 0..grid_cols {
			if offsets.len() as u64 >= count {
				break 'rows;
			}
			offsets.push(FrameOffset {
				x: col * u32::from(frame_width),
				y: row * u32::from(frame_height),
			});
		}
	}

	Ok(offsets)
}
