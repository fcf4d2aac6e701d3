//! rectseg-test - Regression test framework for rectseg
//!
//! This crate provides a small regression test harness along with
//! synthetic inputs for the rectangle searches:
//!
//! - **RegParams** - named checks that log failures instead of panicking
//! - **Synthetic images** - solid blocks, constant and seeded random images
//! - **Brute force** - an exhaustive reference search summing pixels in f64
//!
//! # Usage
//!
//! ```ignore
//! use rectseg_test::{RegParams, block_image};
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_rects(expected, result.rect);
//! rp.compare_values(4.0, result.score, 1e-9);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use synth::{
    block_image, brute_force_best, brute_force_score, constant_image, random_image, replicate_mono,
};
