//! Passage merging

use super::passage::Passage;

/// Coalesce overlapping passages into a sorted, non-overlapping list.
///
/// Passages that merely touch (`next.start == current.end`) stay separate.
/// Zero-length passages are dropped.
pub fn merge_passages(mut passages: Vec<Passage>) -> Vec<Passage> {
    passages.retain(|p| !p.is_empty());
    if passages.is_empty() {
        return passages;
    }

    passages.sort_by_key(|p| p.start);

    let mut merged: Vec<Passage> = Vec::with_capacity(passages.len());
    let mut current = passages[0];

    for next in passages.into_iter().skip(1) {
        if next.start < current.end {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::passage::PassageKind;

    fn p(start: usize, end: usize) -> Passage {
        Passage::new(start, end, PassageKind::Match)
    }

    fn ranges(passages: &[Passage]) -> Vec<(usize, usize)> {
        passages.iter().map(|p| (p.start, p.end)).collect()
    }

    #[test]
    fn test_empty() {
        assert!(merge_passages(vec![]).is_empty());
    }

    #[test]
    fn test_disjoint_sorted() {
        let merged = merge_passages(vec![p(20, 30), p(0, 10)]);
        assert_eq!(ranges(&merged), vec![(0, 10), (20, 30)]);
    }

    #[test]
    fn test_overlap_extends() {
        let merged = merge_passages(vec![p(0, 10), p(5, 15), p(14, 20)]);
        assert_eq!(ranges(&merged), vec![(0, 20)]);
    }

    #[test]
    fn test_containment() {
        let merged = merge_passages(vec![p(0, 30), p(5, 10), p(12, 18)]);
        assert_eq!(ranges(&merged), vec![(0, 30)]);
    }

    #[test]
    fn test_touching_stay_distinct() {
        let merged = merge_passages(vec![p(0, 10), p(10, 20)]);
        assert_eq!(ranges(&merged), vec![(0, 10), (10, 20)]);
    }

    #[test]
    fn test_identical_collapse() {
        let merged = merge_passages(vec![p(3, 9), p(3, 9), p(3, 9)]);
        assert_eq!(ranges(&merged), vec![(3, 9)]);
    }

    #[test]
    fn test_zero_length_dropped() {
        let merged = merge_passages(vec![p(4, 4), p(6, 8)]);
        assert_eq!(ranges(&merged), vec![(6, 8)]);
    }

    #[test]
    fn test_output_never_overlaps() {
        // Pseudo-random spans from a fixed LCG
        let mut seed: u64 = 42;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for _ in 0..50 {
            let input: Vec<Passage> = (0..20)
                .map(|_| {
                    let start = next() % 500;
                    p(start, start + 1 + next() % 60)
                })
                .collect();
            let merged = merge_passages(input.clone());

            for pair in merged.windows(2) {
                assert!(pair[0].end <= pair[1].start);
            }
            for m in &merged {
                assert!(m.end > m.start);
            }
            for original in &input {
                let owners = merged
                    .iter()
                    .filter(|m| m.start <= original.start && original.end <= m.end)
                    .count();
                assert_eq!(owners, 1);
            }
        }
    }
}
