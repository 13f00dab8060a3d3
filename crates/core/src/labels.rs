//! Label Sets
//!
//! Sorted, de-duplicated string sets used for user tiers, countries and product categories.

use std::{cmp::Ordering, slice::Iter};

use smallvec::SmallVec;

/// A set of string labels backed by a sorted `SmallVec<[String; 4]>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: SmallVec<[String; 4]>,
}

impl LabelSet {
    /// Create a new label set, sorting and de-duplicating the given labels.
    #[must_use]
    pub fn new(labels: SmallVec<[String; 4]>) -> Self {
        let mut set = Self { labels };

        set.labels.sort();
        set.labels.dedup();

        set
    }

    /// Create a new label set from string slices.
    pub fn from_strs(labels: &[&str]) -> Self {
        labels.iter().copied().collect()
    }

    /// Check if the set contains a label.
    pub fn contains(&self, label: &str) -> bool {
        self.labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .is_ok()
    }

    /// Check if this set shares at least one label with another.
    pub fn intersects(&self, other: &Self) -> bool {
        // Both sides are sorted, so a single merge pass is enough.
        let mut left = self.labels.iter();
        let mut right = other.labels.iter();
        let mut left_label = left.next();
        let mut right_label = right.next();

        while let (Some(left_ref), Some(right_ref)) = (left_label, right_label) {
            match left_ref.cmp(right_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_label = left.next(),
                Ordering::Greater => right_label = right.next(),
            }
        }

        false
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Iterate over the labels in sorted order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.labels.iter()
    }
}

impl FromIterator<String> for LabelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
