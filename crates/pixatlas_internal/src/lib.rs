//! This module is separated into its own crate to keep the public facade of `pixatlas` small, and should not be used directly.

/// `use pixatlas::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export pixatlas_types for convenience
pub use pixatlas_types;

// Re-export commonly used types at crate root
pub use pixatlas_types::sheet::{
	BYTES_PER_PIXEL, Descriptor, FrameBuffer, FrameOffset, FrameStore, SheetError, SpriteSheet,
};
