//! Owned frame buffers cut out of a sprite sheet texture.
//!
//! A [`FrameBuffer`] is one still image of an animation: a fixed-size
//! rectangle of RGBA pixels copied out of the larger texture at load time.
//! After construction it holds no reference to the texture it came from, so
//! the texture can be dropped as soon as slicing is done.

use image::RgbaImage;

use super::SheetError;

/// Number of bytes per pixel in a frame buffer (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned rectangular RGBA pixel buffer of fixed size.
///
/// Dimensions are immutable once constructed and the pixel data is
/// exclusively owned; cloning yields a byte-for-byte independent duplicate.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use pixatlas_types::sheet::FrameBuffer;
///
/// # fn main() -> Result<(), pixatlas_types::sheet::SheetError> {
/// let texture = RgbaImage::from_pixel(32, 32, image::Rgba([7, 7, 7, 255]));
/// let frame = FrameBuffer::extract(&texture, 16, 0, 16, 16)?;
///
/// assert_eq!(frame.width(), 16);
/// assert_eq!(frame.get_pixel(0, 0), Some([7, 7, 7, 255]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
	/// Frame width in pixels
	width: u16,

	/// Frame height in pixels
	height: u16,

	/// Owned pixel data, `width * height * BYTES_PER_PIXEL` bytes, row-major
	pixels: Vec<u8>,
}

impl FrameBuffer {
	/// Extracts a frame by copying a sub-rectangle out of a decoded texture.
	///
	/// The rectangle `[x, x + width) x [y, y + height)` is copied row by row;
	/// the texture is not referenced after this returns.
	///
	/// # Arguments
	///
	/// * `texture` - Decoded source texture
	/// * `x` - Left edge of the sub-rectangle in texture coordinates
	/// * `y` - Top edge of the sub-rectangle in texture coordinates
	/// * `width` - Frame width in pixels
	/// * `height` - Frame height in pixels
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidGeometry`] if the rectangle is empty or
	/// reaches outside the texture, and [`SheetError::AllocationFailed`] if
	/// the pixel buffer cannot be allocated.
	pub fn extract(
		texture: &RgbaImage,
		x: u32,
		y: u32,
		width: u16,
		height: u16,
	) -> Result<Self, SheetError> {
		let texture_width = texture.width();
		let texture_height = texture.height();

		// Checked arithmetic: offsets come from the slicer on the load path,
		// but this is also reachable with arbitrary caller-supplied offsets
		// through `FrameStore::build`.
		let in_bounds = x
			.checked_add(u32::from(width))
			.is_some_and(|right| right <= texture_width)
			&& y
				.checked_add(u32::from(height))
				.is_some_and(|bottom| bottom <= texture_height);

		if width == 0 || height == 0 || !in_bounds {
			return Err(SheetError::invalid_geometry(
				width,
				height,
				texture_width,
				texture_height,
			));
		}

		let row_len = width as usize * BYTES_PER_PIXEL;
		let byte_len = row_len * height as usize;

		let mut pixels = Vec::new();
		pixels
			.try_reserve_exact(byte_len)
			.map_err(|_| SheetError::AllocationFailed {
				frames: 1,
				bytes_per_frame: byte_len,
			})?;

		let source = texture.as_raw();
		let source_stride = texture_width as usize * BYTES_PER_PIXEL;

		for row in 0..height as usize {
			let start = (y as usize + row) * source_stride + x as usize * BYTES_PER_PIXEL;
			pixels.extend_from_slice(&source[start..start + row_len]);
		}

		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	/// Returns the frame width in pixels.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the frame height in pixels.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the total number of pixels in this frame.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.width as usize * self.height as usize
	}

	/// Returns a reference to the raw RGBA pixel data.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Returns a mutable reference to the raw RGBA pixel data.
	pub fn pixels_mut(&mut self) -> &mut [u8] {
		&mut self.pixels
	}

	/// Gets the RGBA pixel value at (x, y).
	///
	/// Returns `None` if the coordinates are out of bounds.
	pub fn get_pixel(&self, x: u16, y: u16) -> Option<[u8; BYTES_PER_PIXEL]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
		let bytes = self.pixels.get(index..index + BYTES_PER_PIXEL)?;
		let mut pixel = [0u8; BYTES_PER_PIXEL];
		pixel.copy_from_slice(bytes);
		Some(pixel)
	}

	/// Returns an iterator over the RGBA scanlines of the frame.
	pub fn rows(&self) -> FrameRows<'_> {
		FrameRows {
			frame: self,
			current_row: 0,
		}
	}
}

impl std::fmt::Display for FrameBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{} frame", self.width, self.height)
	}
}

/// Iterator over frame scanlines.
#[derive(Debug, Clone)]
pub struct FrameRows<'a> {
	frame: &'a FrameBuffer,
	current_row: u16,
}

impl<'a> Iterator for FrameRows<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		if self.current_row >= self.frame.height {
			return None;
		}

		let row_len = self.frame.width as usize * BYTES_PER_PIXEL;
		let start = self.current_row as usize * row_len;

		self.current_row += 1;
		Some(&self.frame.pixels[start..start + row_len])
	}
}
