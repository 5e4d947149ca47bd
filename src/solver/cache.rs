use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use log::{debug, warn};

use crate::expression::Expression;
use crate::solver::constants::MAX_CACHE_ENTRIES;
use crate::utils::OPERAND_COUNT;

type CacheKey = [u64; OPERAND_COUNT];

/// Memoized witnesses keyed by the input multiset.
///
/// Safe to share between threads. The stored values are pure results, so a
/// poisoned lock is simply recovered.
#[derive(Debug, Default)]
pub struct SolutionCache {
    entries: RwLock<HashMap<CacheKey, Option<Expression>>>,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for `numbers`, independent of their order
    fn key(numbers: &[f64; OPERAND_COUNT]) -> CacheKey {
        let mut sorted = *numbers;
        sorted.sort_by(f64::total_cmp);
        // -0.0 and 0.0 are the same puzzle number
        sorted.map(|n| if n == 0.0 { 0.0_f64.to_bits() } else { n.to_bits() })
    }

    /// `None` on a miss, `Some(None)` for a cached "no solution"
    pub fn get(&self, numbers: &[f64; OPERAND_COUNT]) -> Option<Option<Expression>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&Self::key(numbers)).cloned()
    }

    pub fn insert(&self, numbers: &[f64; OPERAND_COUNT], witness: Option<Expression>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= MAX_CACHE_ENTRIES {
            warn!(
                "Solution cache limit reached ({}), not caching {:?}",
                MAX_CACHE_ENTRIES, numbers
            );
            return;
        }
        debug!("Caching result for {:?}", numbers);
        entries.insert(Self::key(numbers), witness);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
