//! Sprite sheet descriptor parsing and validation.
//!
//! The descriptor is a small JSON document shipped next to the texture:
//!
//! ```json
//! {
//!     "texture": {
//!         "frame": {
//!             "width": 16,
//!             "height": 16
//!         },
//!         "frames": 0,
//!         "fps": 8
//!     }
//! }
//! ```
//!
//! `texture.frame.width`, `texture.frame.height` and `texture.fps` are
//! mandatory. `texture.frames` is optional; absent or 0 both request
//! automatic frame count derivation from the texture geometry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::SheetError;

/// Validated sprite sheet configuration.
///
/// Immutable once constructed; validation happens exactly once, in
/// [`Descriptor::new`] or [`Descriptor::from_json_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
	/// Frame width in pixels, greater than zero
	frame_width: u16,

	/// Frame height in pixels, greater than zero
	frame_height: u16,

	/// Explicit frame count, 0 requests auto derivation
	frame_count: u8,

	/// Playback rate in frames per second, greater than zero
	fps: u8,
}

impl Descriptor {
	/// Creates a descriptor from already known values.
	///
	/// # Errors
	///
	/// Returns [`SheetError::InvalidValue`] when `frame_width`,
	/// `frame_height` or `fps` is zero.
	pub fn new(
		frame_width: u16,
		frame_height: u16,
		frame_count: u8,
		fps: u8,
	) -> Result<Self, SheetError> {
		if frame_width == 0 {
			return Err(SheetError::invalid_value(
				"texture.frame.width",
				"must be greater than zero",
			));
		}
		if frame_height == 0 {
			return Err(SheetError::invalid_value(
				"texture.frame.height",
				"must be greater than zero",
			));
		}
		if fps == 0 {
			return Err(SheetError::invalid_value(
				"texture.fps",
				"must be greater than zero",
			));
		}

		Ok(Self {
			frame_width,
			frame_height,
			frame_count,
			fps,
		})
	}

	/// Parses and validates a descriptor from raw JSON bytes.
	///
	/// # Errors
	///
	/// - [`SheetError::MalformedDescriptor`] when the bytes are not JSON
	/// - [`SheetError::MissingField`] when a mandatory field is absent
	/// - [`SheetError::InvalidValue`] when a field is non-numeric, out of
	///   range or zero where zero is not allowed
	pub fn from_json_bytes(data: &[u8]) -> Result<Self, SheetError> {
		let doc: Value = serde_json::from_slice(data)?;

		let frame_width = required_field(&doc, "/texture/frame/width", "texture.frame.width")?;
		let frame_height = required_field(&doc, "/texture/frame/height", "texture.frame.height")?;
		let fps = required_field(&doc, "/texture/fps", "texture.fps")?;
		let frame_count = optional_field(&doc, "/texture/frames", "texture.frames")?;

		let frame_width = in_range::<u16>(frame_width, "texture.frame.width")?;
		let frame_height = in_range::<u16>(frame_height, "texture.frame.height")?;
		let fps = in_range::<u8>(fps, "texture.fps")?;
		let frame_count = in_range::<u8>(frame_count, "texture.frames")?;

		Self::new(frame_width, frame_height, frame_count, fps)
	}

	/// Returns the frame width in pixels.
	#[inline]
	pub fn frame_width(&self) -> u16 {
		self.frame_width
	}

	/// Returns the frame height in pixels.
	#[inline]
	pub fn frame_height(&self) -> u16 {
		self.frame_height
	}

	/// Returns the explicit frame count, 0 meaning auto derivation.
	#[inline]
	pub fn frame_count(&self) -> u8 {
		self.frame_count
	}

	/// Returns `true` when the frame count is auto-derived.
	#[inline]
	pub fn is_auto_count(&self) -> bool {
		self.frame_count == 0
	}

	/// Returns the playback rate in frames per second.
	#[inline]
	pub fn fps(&self) -> u8 {
		self.fps
	}

	/// Renders the descriptor back into its canonical document shape.
	pub fn to_json(&self) -> Value {
		json!({
			"texture": {
				"frame": {
					"width": self.frame_width,
					"height": self.frame_height,
				},
				"frames": self.frame_count,
				"fps": self.fps,
			}
		})
	}
}

impl std::fmt::Display for Descriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}x{} frames (count: {}) @ {} fps",
			self.frame_width,
			self.frame_height,
			if self.frame_count == 0 {
				"auto".to_string()
			} else {
				self.frame_count.to_string()
			},
			self.fps
		)
	}
}

/// Reads a mandatory unsigned number at `pointer`.
fn required_field(doc: &Value, pointer: &str, field: &'static str) -> Result<u64, SheetError> {
	let value = doc
		.pointer(pointer)
		.ok_or(SheetError::MissingField(field))?;
	as_unsigned(value, field)
}

/// Reads an optional unsigned number at `pointer`, absent meaning 0.
fn optional_field(doc: &Value, pointer: &str, field: &'static str) -> Result<u64, SheetError> {
	match doc.pointer(pointer) {
		Some(value) => as_unsigned(value, field),
		None => Ok(0),
	}
}

fn as_unsigned(value: &Value, field: &'static str) -> Result<u64, SheetError> {
	value.as_u64().ok_or_else(|| {
		SheetError::invalid_value(field, format!("expected an unsigned integer, got {value}"))
	})
}

fn in_range<T: TryFrom<u64>>(value: u64, field: &'static str) -> Result<T, SheetError> {
	T::try_from(value)
		.map_err(|_| SheetError::invalid_value(field, format!("{value} is out of range")))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_complete_document() {
		let doc = br#"{"texture": {"frame": {"width": 16, "height": 16}, "frames": 4, "fps": 8}}"#;
		let descriptor = Descriptor::from_json_bytes(doc).unwrap();

		assert_eq!(descriptor.frame_width(), 16);
		assert_eq!(descriptor.frame_height(), 16);
		assert_eq!(descriptor.frame_count(), 4);
		assert_eq!(descriptor.fps(), 8);
		assert!(!descriptor.is_auto_count());
	}

	#[test]
	fn test_absent_frames_means_auto() {
		let doc = br#"{"texture": {"frame": {"width": 16, "height": 16}, "fps": 8}}"#;
		let descriptor = Descriptor::from_json_bytes(doc).unwrap();
		assert!(descriptor.is_auto_count());
	}

	#[test]
	fn test_missing_fps_reported_by_path() {
		let doc = br#"{"texture": {"frame": {"width": 16, "height": 16}}}"#;
		let err = Descriptor::from_json_bytes(doc).unwrap_err();
		assert!(matches!(err, SheetError::MissingField("texture.fps")));
	}

	#[test]
	fn test_missing_frame_object() {
		let doc = br#"{"texture": {"fps": 8}}"#;
		let err = Descriptor::from_json_bytes(doc).unwrap_err();
		assert!(matches!(
			err,
			SheetError::MissingField("texture.frame.width")
		));
	}

	#[test]
	fn test_non_numeric_value() {
		let doc = br#"{"texture": {"frame": {"width": "wide", "height": 16}, "fps": 8}}"#;
		let err = Descriptor::from_json_bytes(doc).unwrap_err();
		assert!(matches!(
			err,
			SheetError::InvalidValue {
				field: "texture.frame.width",
				..
			}
		));
	}

	#[test]
	fn test_out_of_range_fps() {
		let doc = br#"{"texture": {"frame": {"width": 16, "height": 16}, "fps": 300}}"#;
		let err = Descriptor::from_json_bytes(doc).unwrap_err();
		assert!(matches!(
			err,
			SheetError::InvalidValue {
				field: "texture.fps",
				..
			}
		));
	}

	#[test]
	fn test_zero_fps_rejected() {
		let doc = br#"{"texture": {"frame": {"width": 16, "height": 16}, "fps": 0}}"#;
		assert!(Descriptor::from_json_bytes(doc).is_err());
	}

	#[test]
	fn test_malformed_document() {
		let err = Descriptor::from_json_bytes(b"{not json").unwrap_err();
		assert!(matches!(err, SheetError::MalformedDescriptor(_)));
	}

	#[test]
	fn test_to_json_roundtrip() {
		let descriptor = Descriptor::new(16, 16, 2, 8).unwrap();
		let bytes = descriptor.to_json().to_string().into_bytes();
		let reparsed = Descriptor::from_json_bytes(&bytes).unwrap();
		assert_eq!(descriptor, reparsed);
	}
}
