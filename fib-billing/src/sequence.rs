//! Fibonacci term sequence backing the billing schedule
//!
//! Billing terms follow the Fibonacci numbers with a single leading one:
//! `1, 2, 3, 5, 8, 13, ...`. The sequence is cached per engine and extended
//! lazily, one element at a time, the first time a deeper cycle is priced.
//!
//! # Concurrency
//!
//! The cache sits behind an [`RwLock`]. Populated entries are served under the
//! shared read lock; growth takes the write lock and re-checks the length after
//! acquiring it, so two callers racing to the same depth append each element
//! exactly once.
//!
//! # Overflow
//!
//! Terms saturate at [`u64::MAX`]. Index 91 holds the last Fibonacci number
//! that fits in a `u64`; index 92 is stored as `u64::MAX` and the cache stops
//! growing there, since every deeper entry would be the same value.

use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// First eleven billing terms, in months
pub const SEED_TERMS: [u64; 11] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Growable, append-only cache of Fibonacci billing terms
#[derive(Debug)]
pub struct TermSequence {
    terms: RwLock<Vec<u64>>,
}

impl TermSequence {
    /// Create a cache holding the seed terms
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: RwLock::new(SEED_TERMS.to_vec()),
        }
    }

    /// Term at `index`, extending the cache up to that depth first
    ///
    /// Indices past the saturation point resolve to the last cached entry.
    pub fn term_at(&self, index: usize) -> u64 {
        {
            // The cache is append-only with single-push writes, so a poisoned
            // lock still guards a valid prefix.
            let terms = self.terms.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(term) = terms.get(index) {
                return *term;
            }
            if is_saturated(&terms) {
                return u64::MAX;
            }
        }

        let mut terms = self.terms.write().unwrap_or_else(PoisonError::into_inner);
        extend_to(&mut terms, index);

        let last = terms.len().saturating_sub(1);
        terms.get(index.min(last)).copied().unwrap_or(u64::MAX)
    }

    /// Number of terms currently cached
    pub fn depth(&self) -> usize {
        self.terms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Copy of the cached terms
    pub fn snapshot(&self) -> Vec<u64> {
        self.terms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for TermSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TermSequence {
    fn clone(&self) -> Self {
        Self {
            terms: RwLock::new(self.snapshot()),
        }
    }
}

fn is_saturated(terms: &[u64]) -> bool {
    terms.last() == Some(&u64::MAX)
}

/// Append terms until `index` is in range or the sequence saturates
fn extend_to(terms: &mut Vec<u64>, index: usize) {
    let before = terms.len();

    while terms.len() <= index && !is_saturated(terms) {
        let next = match terms.as_slice() {
            [.., second_last, last] => last.saturating_add(*second_last),
            _ => break,
        };
        terms.push(next);
    }

    if terms.len() > before {
        debug!(
            "Extended term sequence cache from {} to {} entries",
            before,
            terms.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Largest Fibonacci number representable as `u64`
    const LAST_U64_TERM: u64 = 12_200_160_415_121_876_738;

    #[test]
    fn test_seed_terms() {
        let sequence = TermSequence::new();

        for (index, expected) in SEED_TERMS.iter().enumerate() {
            assert_eq!(sequence.term_at(index), *expected);
        }
        assert_eq!(sequence.depth(), SEED_TERMS.len());
    }

    #[test]
    fn test_lazy_growth() {
        let sequence = TermSequence::new();

        assert_eq!(sequence.term_at(11), 233);
        assert_eq!(sequence.depth(), 12);

        assert_eq!(sequence.term_at(15), 1597);
        assert_eq!(sequence.depth(), 16);

        // Revisits never grow the cache
        assert_eq!(sequence.term_at(3), 5);
        assert_eq!(sequence.depth(), 16);
    }

    #[test]
    fn test_each_term_is_sum_of_previous_two() {
        let sequence = TermSequence::new();
        sequence.term_at(60);

        let terms = sequence.snapshot();
        for window in terms.windows(3) {
            assert_eq!(window[2], window[0] + window[1]);
        }
    }

    #[test]
    fn test_saturation() {
        let sequence = TermSequence::new();

        assert_eq!(sequence.term_at(91), LAST_U64_TERM);
        assert_eq!(sequence.term_at(92), u64::MAX);
        assert_eq!(sequence.depth(), 93);

        // Deep indices resolve without growing past the saturated tail
        assert_eq!(sequence.term_at(1_000_000), u64::MAX);
        assert_eq!(sequence.depth(), 93);
    }

    #[test]
    fn test_clone_is_independent() {
        let sequence = TermSequence::new();
        sequence.term_at(20);

        let cloned = sequence.clone();
        assert_eq!(cloned.snapshot(), sequence.snapshot());

        cloned.term_at(40);
        assert_eq!(cloned.depth(), 41);
        assert_eq!(sequence.depth(), 21);
    }
}
