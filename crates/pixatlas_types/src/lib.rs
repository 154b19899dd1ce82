//! This crate provides the core data types for the `pixatlas-rs` project.
//!
//! # Overview
//!
//! A sprite sheet is a single texture image holding several animation frames
//! arranged in a grid, together with a small JSON descriptor declaring the
//! frame geometry and playback rate. This crate turns that pair into an
//! ordered collection of independently owned frames and drives cyclic
//! playback through them:
//!
//! - [`sheet::FrameBuffer`]: one owned RGBA frame cut out of the texture
//! - [`sheet::FrameStore`]: the ordered frame sequence
//! - [`sheet::slicer`]: the pure tiling arithmetic over the texture grid
//! - [`sheet::Descriptor`]: validated frame geometry and playback rate
//! - [`sheet::SpriteSheet`]: the facade composing all of the above
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use pixatlas_types::prelude::*;
//!
//! # fn main() -> Result<(), SheetError> {
//! let mut sheet = SpriteSheet::new();
//! sheet.load("gif/anim.sprite", "gif/anim.png")?;
//!
//! // One step per display refresh tick.
//! sheet.advance();
//! if let Some(frame) = sheet.current_frame() {
//!     println!("frame {}: {}x{}", sheet.cursor(), frame.width(), frame.height());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use pixatlas_types::sheet::SpriteSheet;
//!
//! let mut sheet = SpriteSheet::new();
//! // ...
//! ```

pub mod sheet;

/// `use pixatlas_types::prelude::*;` to import commonly used items.
pub mod prelude;
