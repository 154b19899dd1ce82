//! Error types for sprite sheet loading and slicing.

use thiserror::Error;

/// Errors that can occur when loading or slicing a sprite sheet.
///
/// Every failure is reported synchronously from the operation that hit it;
/// nothing is retried internally. A failed [`SpriteSheet::load`] leaves the
/// sheet in its prior state, so callers may fall back to a default visual or
/// simply skip rendering.
///
/// [`SpriteSheet::load`]: crate::sheet::SpriteSheet::load
#[derive(Debug, Error)]
pub enum SheetError {
	/// The requested frame size cannot tile the texture
	#[error(
		"invalid frame geometry: {frame_width}x{frame_height} frame does not fit a {texture_width}x{texture_height} texture"
	)]
	InvalidGeometry {
		/// Requested frame width in pixels
		frame_width: u16,
		/// Requested frame height in pixels
		frame_height: u16,
		/// Source texture width in pixels
		texture_width: u32,
		/// Source texture height in pixels
		texture_height: u32,
	},

	/// A mandatory descriptor field is absent
	#[error("missing mandatory descriptor field `{0}`")]
	MissingField(&'static str),

	/// A descriptor field holds a value outside its valid range
	#[error("descriptor field `{field}` has an invalid value: {reason}")]
	InvalidValue {
		/// Dotted path of the offending field
		field: &'static str,
		/// What was wrong with the value
		reason: String,
	},

	/// The descriptor document is not well-formed JSON
	#[error("malformed descriptor document: {0}")]
	MalformedDescriptor(#[from] serde_json::Error),

	/// The texture could not be opened or decoded
	#[error("texture decode failed: {0}")]
	TextureDecode(#[from] image::ImageError),

	/// A frame buffer allocation was refused by the allocator
	#[error("frame allocation failed: {frames} frames of {bytes_per_frame} bytes each")]
	AllocationFailed {
		/// Number of frames that were being allocated
		frames: usize,
		/// Size of a single frame buffer in bytes
		bytes_per_frame: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl SheetError {
	/// Creates a [`SheetError::InvalidGeometry`] error.
	pub fn invalid_geometry(
		frame_width: u16,
		frame_height: u16,
		texture_width: u32,
		texture_height: u32,
	) -> Self {
		Self::InvalidGeometry {
			frame_width,
			frame_height,
			texture_width,
			texture_height,
		}
	}

	/// Creates a [`SheetError::InvalidValue`] error.
	pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidValue {
			field,
			reason: reason.into(),
		}
	}
}
