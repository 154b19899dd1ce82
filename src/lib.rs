//! `pixatlas-rs` turns a texture atlas image plus a small JSON descriptor
//! into an ordered collection of independently owned animation frames, and
//! drives cyclic playback through them.
//!
//! See [`SpriteSheet`] for the main entry point.

pub use pixatlas_internal::*;
