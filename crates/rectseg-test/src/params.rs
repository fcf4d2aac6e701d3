//! Regression test parameters and checks

use crate::error::TestError;
use rectseg_core::Rect;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// latest check and every failure recorded so far. Checks never panic;
/// call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "segment")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, msg);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never matches
        if diff <= delta {
            return true;
        }
        let err = TestError::ValueMismatch {
            index: self.index,
            expected,
            actual,
            delta,
        };
        self.fail(err.to_string());
        false
    }

    /// Compare two rectangles for exact equality
    ///
    /// # Returns
    ///
    /// `true` if all four corners match, `false` otherwise.
    pub fn compare_rects(&mut self, expected: Rect, actual: Rect) -> bool {
        self.index += 1;

        if expected == actual {
            return true;
        }
        let msg = format!(
            "rect comparison for index {}\n\
             expected = ({}, {})..({}, {}), actual = ({}, {})..({}, {})",
            self.index,
            expected.y0,
            expected.x0,
            expected.y1,
            expected.x1,
            actual.y0,
            actual.x0,
            actual.y1,
            actual.x1
        );
        self.fail(msg);
        false
    }

    /// Compare two mean-color triples component-wise
    ///
    /// Counts as a single check.
    pub fn compare_colors(&mut self, expected: [f32; 3], actual: [f32; 3], delta: f64) -> bool {
        self.index += 1;

        let worst = expected
            .iter()
            .zip(actual.iter())
            .map(|(e, a)| (*e as f64 - *a as f64).abs())
            .fold(0.0f64, f64::max);
        if worst <= delta && actual.iter().all(|a| a.is_finite()) {
            return true;
        }
        let msg = format!(
            "color comparison for index {}\n\
             expected = {:?}, actual = {:?}, allowed delta = {}",
            self.index, expected, actual, delta
        );
        self.fail(msg);
        false
    }

    /// Record a boolean check
    pub fn compare_bool(&mut self, what: &str, ok: bool) -> bool {
        self.index += 1;

        if !ok {
            let msg = format!("check for index {} failed: {}", self.index, what);
            self.fail(msg);
        }
        ok
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
