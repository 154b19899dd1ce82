//! Sprite sheet support for the `pixatlas-rs` project.
//!
//! A sprite sheet couples a texture atlas (one image holding every animation
//! frame in a grid) with a JSON descriptor declaring the frame geometry and
//! playback rate. Loading cuts the texture into independently owned frames;
//! playback then walks a cyclic cursor over them.
//!
//! # Load Chain
//!
//! [`SpriteSheet::load`] runs the following steps in order and mutates the
//! sheet only after every step has succeeded:
//!
//! 1. Read and parse the descriptor document ([`Descriptor`])
//! 2. Open and decode the texture image
//! 3. Compute the frame grid offsets ([`slicer`])
//! 4. Copy each frame out of the texture ([`FrameStore`])
//!
//! A failure anywhere in the chain leaves the sheet exactly as it was, so a
//! previously loaded animation keeps playing if a reload goes wrong.
//!
//! # Usage Examples
//!
//! ## Loading and stepping an animation
//!
//! ```no_run
//! use pixatlas_types::sheet::SpriteSheet;
//!
//! # fn main() -> Result<(), pixatlas_types::sheet::SheetError> {
//! let mut sheet = SpriteSheet::new();
//! sheet.load("fire.sprite", "fire.png")?;
//!
//! println!("{} frames @ {} fps", sheet.frame_count(), sheet.fps());
//!
//! // Called once per display refresh tick by the render loop.
//! if let Some(frame) = sheet.current_frame() {
//!     println!("showing {frame}");
//! }
//! sheet.advance();
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading from memory
//!
//! ```no_run
//! use pixatlas_types::sheet::SpriteSheet;
//!
//! # fn main() -> Result<(), pixatlas_types::sheet::SheetError> {
//! let descriptor = br#"{"texture": {"frame": {"width": 16, "height": 16}, "fps": 8}}"#;
//! let texture = std::fs::read("fire.png")?;
//!
//! let mut sheet = SpriteSheet::new();
//! sheet.load_from_bytes(descriptor, &texture)?;
//! # Ok(())
//! # }
//! ```

use image::RgbaImage;
use log::debug;

mod error;

pub mod descriptor;
pub mod frame;
pub mod slicer;
pub mod store;

pub use descriptor::Descriptor;
pub use error::SheetError;
pub use frame::{BYTES_PER_PIXEL, FrameBuffer, FrameRows};
pub use slicer::FrameOffset;
pub use store::FrameStore;

/// Sprite sheet facade: descriptor, frame store and playback cursor.
///
/// A sheet starts empty (no frames, cursor 0) and becomes loaded through
/// [`SpriteSheet::load`] or [`SpriteSheet::load_from_bytes`]. Cloning
/// deep-copies every frame, so two sheets never share pixel storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
	/// Validated configuration, `None` while the sheet is empty
	descriptor: Option<Descriptor>,

	/// Extracted frames, empty while the sheet is empty
	frames: FrameStore,

	/// Index of the currently displayed frame
	cursor: usize,
}

impl SpriteSheet {
	/// Creates an empty sprite sheet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads the sheet from a descriptor file and a texture file.
	///
	/// # Arguments
	///
	/// * `descriptor_path` - Path to the JSON descriptor document
	/// * `texture_path` - Path to the texture atlas image
	///
	/// # Errors
	///
	/// Returns an error if the descriptor cannot be read or validated, the
	/// texture cannot be opened or decoded, or the frame geometry does not
	/// fit the texture. The descriptor is validated before the texture is
	/// touched, and the sheet keeps its previous state on any failure.
	pub fn load(
		&mut self,
		descriptor_path: impl AsRef<std::path::Path>,
		texture_path: impl AsRef<std::path::Path>,
	) -> Result<(), SheetError> {
		let descriptor_data = std::fs::read(descriptor_path)?;
		let descriptor = Descriptor::from_json_bytes(&descriptor_data)?;

		let texture = image::open(texture_path)?.to_rgba8();

		self.install(descriptor, &texture)
	}

	/// Loads the sheet from in-memory descriptor and texture bytes.
	///
	/// Same chain as [`SpriteSheet::load`] with storage access factored out.
	///
	/// # Errors
	///
	/// See [`SpriteSheet::load`].
	pub fn load_from_bytes(
		&mut self,
		descriptor_data: &[u8],
		texture_data: &[u8],
	) -> Result<(), SheetError> {
		let descriptor = Descriptor::from_json_bytes(descriptor_data)?;

		let texture = image::load_from_memory(texture_data)?.to_rgba8();

		self.install(descriptor, &texture)
	}

	/// Slices the texture and atomically replaces the sheet contents.
	fn install(
		&mut self,
		descriptor: Descriptor,
		texture: &RgbaImage,
	) -> Result<(), SheetError> {
		let offsets = slicer::slice(
			texture.width(),
			texture.height(),
			descriptor.frame_width(),
			descriptor.frame_height(),
			u32::from(descriptor.frame_count()),
		)?;

		let frames = FrameStore::build(
			texture,
			&offsets,
			descriptor.frame_width(),
			descriptor.frame_height(),
		)?;

		debug!(
			"loaded sprite sheet: {} frames of {}x{} from {}x{} texture @ {} fps",
			frames.len(),
			descriptor.frame_width(),
			descriptor.frame_height(),
			texture.width(),
			texture.height(),
			descriptor.fps()
		);

		self.descriptor = Some(descriptor);
		self.frames = frames;
		self.cursor = 0;

		Ok(())
	}

	/// Advances the playback cursor to the next frame, wrapping at the end.
	///
	/// A no-op on an empty sheet.
	pub fn advance(&mut self) {
		if self.frames.is_empty() {
			return;
		}

		self.cursor += 1;
		if self.cursor >= self.frames.len() {
			self.cursor = 0;
		}
	}

	/// Resets the playback cursor to the first frame.
	pub fn reset(&mut self) {
		self.cursor = 0;
	}

	/// Returns the currently selected frame, or `None` while the sheet is
	/// empty.
	pub fn current_frame(&self) -> Option<&FrameBuffer> {
		self.frames.get(self.cursor)
	}

	/// Returns the playback cursor position.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Returns the number of loaded frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` once a load has succeeded.
	pub fn is_loaded(&self) -> bool {
		!self.frames.is_empty()
	}

	/// Returns the playback rate in frames per second, 0 while the sheet is
	/// empty.
	pub fn fps(&self) -> u8 {
		self.descriptor.map_or(0, |d| d.fps())
	}

	/// Returns the validated descriptor, `None` while the sheet is empty.
	pub fn descriptor(&self) -> Option<&Descriptor> {
		self.descriptor.as_ref()
	}

	/// Returns the loaded frames.
	pub fn frames(&self) -> &FrameStore {
		&self.frames
	}
}
