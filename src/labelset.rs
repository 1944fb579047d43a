#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

pub use crate::tiles::Label;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of labels: the children of a trie node, or the letters allowed on a square.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    /// Insert `label`, returns true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32, "label {} out of range", label);
        let present = self.contains(label);
        self.0 |= 1 << label;
        present
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Return the number of labels in the set that are smaller than `label`.
    pub fn rank(&self, label: Label) -> usize {
        count_ones(zero_highbits(self.0, label as u32)) as usize
    }

    /// Return the rank of `label` if present.
    /// Trie nodes store their children in this order.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(self.rank(label))
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let label = self.value.trailing_zeros();
        // clear lowest set bit
        self.value &= self.value - 1;
        Some(label as Label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut labels = LabelSet::new();
        for label in iter {
            labels.insert(label);
        }
        labels
    }
}

impl From<Vec<Label>> for LabelSet {
    fn from(v: Vec<Label>) -> Self {
        v.into_iter().collect()
    }
}

impl From<LabelSet> for Vec<Label> {
    fn from(labels: LabelSet) -> Self {
        labels.iter().collect()
    }
}
