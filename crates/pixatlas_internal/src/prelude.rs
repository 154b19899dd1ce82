//! Prelude module for `pixatlas_internal`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```rust
//! use pixatlas_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut sheet = SpriteSheet::new();
//! sheet.advance();
//! assert!(!sheet.is_loaded());
//! ```

// Re-export everything from pixatlas_types::prelude
#[doc(inline)]
pub use pixatlas_types::prelude::*;

// Re-export the entire pixatlas_types module for advanced usage
#[doc(inline)]
pub use pixatlas_types;
