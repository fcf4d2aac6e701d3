//! rectseg - Best separating rectangle search
//!
//! Finds the axis-aligned rectangle that best separates an image into an
//! inside and an outside region of distinct mean color.
//!
//! # Overview
//!
//! - Integral images for constant-time rectangle sums
//! - Exhaustive direct search over color images
//! - Shape-then-position search over single-channel images
//! - Parallel search on the global or a dedicated rayon pool
//!
//! # Example
//!
//! ```
//! use rectseg::{ImageView, Rect, SegmentOptions, Strategy, segment};
//!
//! // 5x6 dark image with a bright 2x3 block
//! let mut data = vec![0.1f32; 5 * 6 * 3];
//! for y in 1..3 {
//!     for x in 2..5 {
//!         let i = 3 * (x + 6 * y);
//!         data[i..i + 3].copy_from_slice(&[0.9, 0.9, 0.9]);
//!     }
//! }
//! let image = ImageView::new(5, 6, &data).unwrap();
//!
//! let options = SegmentOptions::new().with_strategy(Strategy::for_channels(3));
//! let result = segment(&image, &options).unwrap();
//! assert_eq!(result.rect, Rect::new(1, 2, 3, 5).unwrap());
//! assert!(result.inner[0] > result.outer[0]);
//! ```

// Re-export core types (image view, rectangle, result)
pub use rectseg_core::*;

// Re-export the search crate as a module for its building blocks
pub use rectseg_search as search;

// Re-export the entry points
pub use rectseg_search::{
    SearchError, SearchResult, SegmentOptions, Strategy, segment, segment_color,
    segment_monochrome,
};
