//! Frame storage for a loaded sprite sheet.

use image::RgbaImage;

use super::frame::{BYTES_PER_PIXEL, FrameBuffer};
use super::slicer::FrameOffset;
use super::SheetError;

/// Ordered sequence of frames cut out of one texture.
///
/// Every frame in the store shares the same dimensions. The store owns its
/// frames exclusively; cloning duplicates every pixel buffer, so two live
/// stores never share backing storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStore {
	/// Frame width in pixels, 0 while the store is empty
	frame_width: u16,

	/// Frame height in pixels, 0 while the store is empty
	frame_height: u16,

	/// Extracted frames, in slicing order
	frames: Vec<FrameBuffer>,
}

impl FrameStore {
	/// Creates an empty frame store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store by copying one frame per offset out of the texture.
	///
	/// The texture is only read during this call; the caller may release it
	/// once `build` returns.
	///
	/// # Arguments
	///
	/// * `texture` - Decoded source texture
	/// * `offsets` - Top-left frame corners, as produced by the slicer
	/// * `frame_width` - Frame width in pixels
	/// * `frame_height` - Frame height in pixels
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidGeometry`] if an offset rectangle reaches
	/// outside the texture, or [`SheetError::AllocationFailed`] if a buffer
	/// allocation is refused.
	pub fn build(
		texture: &RgbaImage,
		offsets: &[FrameOffset],
		frame_width: u16,
		frame_height: u16,
	) -> Result<Self, SheetError> {
		let bytes_per_frame =
			frame_width as usize * frame_height as usize * BYTES_PER_PIXEL;

		let mut frames = Vec::new();
		frames
			.try_reserve_exact(offsets.len())
			.map_err(|_| SheetError::AllocationFailed {
				frames: offsets.len(),
				bytes_per_frame,
			})?;

		for offset in offsets {
			frames.push(FrameBuffer::extract(
				texture,
				offset.x,
				offset.y,
				frame_width,
				frame_height,
			)?);
		}

		Ok(Self {
			frame_width,
			frame_height,
			frames,
		})
	}

	/// Returns the number of frames in the store.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when the store holds no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns the frame width shared by all frames, in pixels.
	pub fn frame_width(&self) -> u16 {
		self.frame_width
	}

	/// Returns the frame height shared by all frames, in pixels.
	pub fn frame_height(&self) -> u16 {
		self.frame_height
	}

	/// Returns the frame at `index`, or `None` if out of range.
	pub fn get(&self, index: usize) -> Option<&FrameBuffer> {
		self.frames.get(index)
	}

	/// Returns the frame at `index` mutably, or `None` if out of range.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut FrameBuffer> {
		self.frames.get_mut(index)
	}

	/// Returns an iterator over the frames in slicing order.
	pub fn iter(&self) -> std::slice::Iter<'_, FrameBuffer> {
		self.frames.iter()
	}
}

impl std::ops::Index<usize> for FrameStore {
	type Output = FrameBuffer;

	fn index(&self, index: usize) -> &Self::Output {
		&self.frames[index]
	}
}

impl<'a> IntoIterator for &'a FrameStore {
	type Item = &'a FrameBuffer;
	type IntoIter = std::slice::Iter<'a, FrameBuffer>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}
