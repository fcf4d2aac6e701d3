//! rectseg Core - Basic data structures for rectangle segmentation
//!
//! This crate provides the data structures shared by the search engine and
//! its callers:
//!
//! - [`ImageView`] - Borrowed, validated interleaved pixel buffer
//! - [`Rect`] - Half-open candidate rectangle
//! - [`Segmentation`] - Winning rectangle with inner/outer mean colors

pub mod error;
pub mod image;
pub mod rect;
pub mod segmentation;

pub use error::{Error, Result};
pub use image::{ImageView, PIXEL_STRIDE};
pub use rect::Rect;
pub use segmentation::Segmentation;
