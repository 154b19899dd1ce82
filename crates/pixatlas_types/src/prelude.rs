//! Prelude module for `pixatlas_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use pixatlas_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut sheet = SpriteSheet::new();
//! sheet.advance();
//!
//! let descriptor = Descriptor::new(16, 16, 0, 8).unwrap();
//! assert!(descriptor.is_auto_count());
//! ```

// Sheet module types
#[doc(inline)]
pub use crate::sheet::{
	// Pixel layout constant
	BYTES_PER_PIXEL,

	// Descriptor
	Descriptor,

	// Frame types
	FrameBuffer,
	FrameOffset,
	FrameRows,
	FrameStore,

	// Error type
	SheetError,

	// Facade
	SpriteSheet,
};

// Re-export the sheet module for advanced usage
#[doc(inline)]
pub use crate::sheet;
