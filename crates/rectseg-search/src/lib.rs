//! rectseg-search - Best separating rectangle search
//!
//! This crate finds the axis-aligned rectangle whose pixels are best
//! separated in color from the rest of the image:
//!
//! - **Integral images** - O(1) rectangle sums from four corner lookups
//! - **Scoring** - between-region sum of squares for any candidate
//! - **Direct search** - every rectangle, scored across color channels
//! - **Shape-then-position search** - best shape first, using horizontal
//!   lanes, then a single-threaded scan for its position
//!
//! # Examples
//!
//! ## Color image
//!
//! ```
//! use rectseg_core::{ImageView, Rect};
//! use rectseg_search::segment_color;
//!
//! // 4x4 image, red 2x2 block in the top-left corner
//! let mut data = vec![0.0f32; 4 * 4 * 3];
//! for (y, x) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
//!     data[3 * (x + 4 * y)] = 1.0;
//! }
//! let image = ImageView::new(4, 4, &data).unwrap();
//!
//! let result = segment_color(&image).unwrap();
//! assert_eq!(result.rect, Rect::new(0, 0, 2, 2).unwrap());
//! assert_eq!(result.inner, [1.0, 0.0, 0.0]);
//! assert_eq!(result.outer, [0.0, 0.0, 0.0]);
//! ```
//!
//! ## Choosing a strategy and pool size
//!
//! ```
//! use rectseg_core::ImageView;
//! use rectseg_search::{SegmentOptions, Strategy, segment};
//!
//! let data = vec![0.5f32; 6 * 6 * 3];
//! let image = ImageView::new(6, 6, &data).unwrap();
//! let options = SegmentOptions::new()
//!     .with_strategy(Strategy::for_channels(1))
//!     .with_threads(2);
//! let result = segment(&image, &options).unwrap();
//! assert!(result.rect.fits(6, 6));
//! ```

pub mod assemble;
pub mod best;
pub mod channels;
pub mod direct;
pub mod error;
pub mod integral;
pub mod lanes;
pub mod options;
pub mod score;
pub mod segment;
pub mod shape;

// Re-export core types
pub use rectseg_core;

// Re-export error types
pub use error::{SearchError, SearchResult};

// Re-export building blocks
pub use assemble::assemble;
pub use best::{Ranked, better};
pub use channels::{Channels, ColorSum};
pub use integral::IntegralImage;
pub use lanes::{LANES, row_max};
pub use score::{Scored, Scorer, Weights};

// Re-export search strategies
pub use direct::{best_position, direct_search};
pub use shape::{ShapeScore, best_shape, locate_shape, shape_max, shape_then_position_search};

// Re-export entry points and options
pub use options::{SegmentOptions, Strategy};
pub use segment::{segment, segment_color, segment_monochrome};
