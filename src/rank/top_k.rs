use crate::rank::key::{ResultEntry, ranking_order};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// First `min(n, len)` entries of an already ranked sequence.
pub fn top_k(mut ranked: Vec<ResultEntry>, n: usize) -> Vec<ResultEntry> {
    ranked.truncate(n);
    ranked
}

/// Heap slot ordered so the max-heap top is the worst-ranked entry kept.
struct Worst(ResultEntry);

impl PartialEq for Worst {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Worst {}

impl Ord for Worst {
    fn cmp(&self, other: &Self) -> Ordering {
        ranking_order(&self.0, &other.0)
    }
}

impl PartialOrd for Worst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Top `n` of an unranked sequence without sorting all of it.
///
/// Keeps a bounded heap of `n` entries; output is in ranking order.
pub fn select_top_k<I>(entries: I, n: usize) -> Vec<ResultEntry>
where
    I: IntoIterator<Item = ResultEntry>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Worst> = BinaryHeap::with_capacity(n + 1);
    for entry in entries {
        heap.push(Worst(entry));
        if heap.len() > n {
            heap.pop();
        }
    }

    // Ascending by `Worst` is best-first.
    heap.into_sorted_vec().into_iter().map(|w| w.0).collect()
}

/// Merge already ranked partial top-N lists into the global top `n`.
pub fn merge_top_k(partials: Vec<Vec<ResultEntry>>, n: usize) -> Vec<ResultEntry> {
    let mut cursors: Vec<std::vec::IntoIter<ResultEntry>> =
        partials.into_iter().map(Vec::into_iter).collect();
    let mut heads: Vec<Option<ResultEntry>> = cursors.iter_mut().map(Iterator::next).collect();

    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let best = heads
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.as_ref().map(|e| (i, e)))
            .min_by(|(_, a), (_, b)| ranking_order(a, b))
            .map(|(i, _)| i);

        let Some(i) = best else {
            break;
        };
        if let Some(entry) = heads[i].take() {
            out.push(entry);
        }
        heads[i] = cursors[i].next();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::DeviceId;
    use crate::rank::key::SortKey;
    use pretty_assertions::assert_eq;

    fn entry(device: &str, up: i64) -> ResultEntry {
        ResultEntry::new(SortKey::new(up, 0, 0), DeviceId::from(device))
    }

    fn ranked() -> Vec<ResultEntry> {
        vec![entry("e", 50), entry("d", 40), entry("c", 30), entry("b", 20), entry("a", 10)]
    }

    fn names(entries: &[ResultEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.device.as_str()).collect()
    }

    #[test]
    fn truncates_to_n() {
        assert_eq!(names(&top_k(ranked(), 2)), vec!["e", "d"]);
    }

    #[test]
    fn short_input_is_returned_whole() {
        assert_eq!(top_k(ranked(), 10), ranked());
        assert_eq!(top_k(ranked(), 5), ranked());
    }

    #[test]
    fn zero_yields_empty() {
        assert!(top_k(ranked(), 0).is_empty());
        assert!(select_top_k(ranked(), 0).is_empty());
        assert!(merge_top_k(vec![ranked()], 0).is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(top_k(Vec::new(), 3).is_empty());
        assert!(select_top_k(Vec::new(), 3).is_empty());
        assert!(merge_top_k(Vec::new(), 3).is_empty());
    }

    #[test]
    fn heap_selection_matches_sorted_prefix() {
        let shuffled = vec![entry("c", 30), entry("a", 10), entry("e", 50), entry("b", 20), entry("d", 40)];
        assert_eq!(select_top_k(shuffled, 3), top_k(ranked(), 3));
    }

    #[test]
    fn heap_selection_breaks_key_ties_by_device() {
        let tied = vec![entry("z", 1), entry("m", 1), entry("a", 1)];
        assert_eq!(names(&select_top_k(tied, 2)), vec!["a", "m"]);
    }

    #[test]
    fn merges_partial_rankings() {
        let p1 = vec![entry("e", 50), entry("c", 30), entry("a", 10)];
        let p2 = vec![entry("d", 40), entry("b", 20)];
        let p3 = vec![];
        assert_eq!(names(&merge_top_k(vec![p1, p2, p3], 4)), vec!["e", "d", "c", "b"]);
    }
}
