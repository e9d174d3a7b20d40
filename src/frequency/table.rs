//! Number → drawn-count mapping.

use std::collections::BTreeMap;

/// How often each number has been drawn
///
/// Immutable once built. An empty table means "no data", never "every number
/// has a zero count".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u32>,
}

impl FrequencyTable {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, number: u8) -> Option<u32> {
        self.counts.get(&number).copied()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.counts.contains_key(&number)
    }

    /// Entries in ascending number order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&number, &count)| (number, count))
    }

    /// Entries from most to least drawn; equal counts keep ascending number order
    pub fn by_count_descending(&self) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Entries from least to most drawn; equal counts keep ascending number order
    pub fn by_count_ascending(&self) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.iter().collect();
        entries.sort_by_key(|&(_, count)| count);
        entries
    }
}

impl From<BTreeMap<u8, u32>> for FrequencyTable {
    fn from(counts: BTreeMap<u8, u32>) -> Self {
        Self { counts }
    }
}

impl<const N: usize> From<[(u8, u32); N]> for FrequencyTable {
    fn from(entries: [(u8, u32); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(u8, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_views() {
        let table = FrequencyTable::from([(1, 100), (2, 80), (3, 100), (4, 40), (5, 20)]);

        let descending: Vec<u8> = table.by_count_descending().iter().map(|e| e.0).collect();
        assert_eq!(descending, vec![1, 3, 2, 4, 5]);

        let ascending: Vec<u8> = table.by_count_ascending().iter().map(|e| e.0).collect();
        assert_eq!(ascending, vec![5, 4, 2, 1, 3]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.by_count_descending().is_empty());
    }
}
