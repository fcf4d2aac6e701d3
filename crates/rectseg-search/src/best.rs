//! Deterministic best-candidate reduction
//!
//! Every worker keeps a private best and the per-worker bests are combined
//! pairwise. Higher scores win; equal scores go to the candidate visited
//! first in the search order, whatever the thread that found it.

use crate::channels::Channels;
use crate::score::Scored;

/// A search result that can be ranked against another
pub trait Ranked {
    /// Score type, larger is better
    type Score: PartialOrd;

    /// Score of this candidate
    fn rank_score(&self) -> Self::Score;

    /// Position of this candidate in the search order
    fn rank_key(&self) -> (usize, usize, usize, usize);
}

impl<T: Channels> Ranked for Scored<T> {
    type Score = T::Scalar;

    #[inline]
    fn rank_score(&self) -> T::Scalar {
        self.score
    }

    #[inline]
    fn rank_key(&self) -> (usize, usize, usize, usize) {
        self.rect.enumeration_key()
    }
}

/// Keep the better of two optional candidates
///
/// Usable both as a fold step and as a reduction: the result does not depend
/// on argument order.
pub fn better<R: Ranked>(current: Option<R>, candidate: Option<R>) -> Option<R> {
    match (current, candidate) {
        (None, c) => c,
        (c, None) => c,
        (Some(a), Some(b)) => {
            let (sa, sb) = (a.rank_score(), b.rank_score());
            if sb > sa || (sb == sa && b.rank_key() < a.rank_key()) {
                Some(b)
            } else {
                Some(a)
            }
        }
    }
}
