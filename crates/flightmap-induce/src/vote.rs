//! Majority voting with support and purity.

use std::collections::HashMap;
use std::hash::Hash;

/// Outcome of a majority vote over a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote<T> {
    /// Most frequent value, `T::default()` for an empty partition.
    pub value: T,
    /// Occurrences of `value`.
    pub count: usize,
    /// Size of the partition (the rule's support).
    pub total: usize,
}

impl<T> Vote<T> {
    /// Share of the partition agreeing with the majority, 0.0 when empty.
    pub fn purity(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }

    /// True when both the support and the purity gate are met.
    pub fn accepted(&self, min_support: usize, min_purity: f64) -> bool {
        self.total >= min_support && self.purity() >= min_purity
    }
}

/// Return the most frequent value and how strongly it dominates.
///
/// Ties go to the value encountered first, so the result depends only on
/// the input order and never on hashing.
pub fn majority_vote<T, I>(values: I) -> Vote<T>
where
    T: Copy + Eq + Hash + Default,
    I: IntoIterator<Item = T>,
{
    // (value, count) in first-seen order
    let mut tallies: Vec<(T, usize)> = Vec::new();
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut total = 0usize;

    for value in values {
        total += 1;
        let slot = *slots.entry(value).or_insert_with(|| {
            tallies.push((value, 0));
            tallies.len() - 1
        });
        tallies[slot].1 += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for &(value, count) in &tallies {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    let (value, count) = best.unwrap_or_default();
    Vote {
        value,
        count,
        total,
    }
}
