//! Merge Sort
//!
//! Top-down over half-open ranges with `mid = lo + (hi - lo) / 2`. Each merge
//! copies `[lo, hi)` into an auxiliary buffer and writes elements back one
//! at a time. Ties take the left run, which keeps the sort stable.
//!
//! Comparison pairs refer to buffer slots mapped back onto `[lo, hi)`, i.e.
//! the positions the candidates held when the merge started.

use crate::error::RunError;
use crate::recorder::Recorder;
use std::cmp::Ordering;
use std::fmt::Debug;

pub(crate) fn sort<T>(rec: &mut Recorder<'_, T>) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let n = rec.len();
    sort_range(rec, 0, n)
}

fn sort_range<T>(rec: &mut Recorder<'_, T>, lo: usize, hi: usize) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    if hi - lo < 2 {
        return Ok(());
    }

    let mid = lo + (hi - lo) / 2;
    rec.milestone(
        format!("Dividing range [{lo}, {hi}) at mid={mid}"),
        (lo..hi).collect(),
    );

    sort_range(rec, lo, mid)?;
    sort_range(rec, mid, hi)?;
    merge(rec, lo, mid, hi)
}

fn merge<T>(rec: &mut Recorder<'_, T>, lo: usize, mid: usize, hi: usize) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let buffer: Vec<T> = rec.slice(lo..hi).to_vec();
    rec.auxiliary(buffer.len() as u64);
    rec.milestone(
        format!("Merging [{lo}, {mid}) and [{mid}, {hi})"),
        (lo..hi).collect(),
    );

    let split = mid - lo;
    let (mut i, mut j) = (0, split);
    let mut k = lo;

    while i < split && j < buffer.len() {
        let at = (lo + i, lo + j);
        let take_left = rec.order(&buffer[i], &buffer[j], at)? != Ordering::Greater;
        let source = if take_left { i } else { j };
        let side = if take_left { "left" } else { "right" };
        rec.place(
            k,
            lo + source,
            buffer[source].clone(),
            Some(at),
            format!("Placing {:?} from {side} run at position {k}", buffer[source]),
        );
        if take_left {
            i += 1;
        } else {
            j += 1;
        }
        k += 1;
    }

    for (source, side) in (i..split)
        .map(|s| (s, "left"))
        .chain((j..buffer.len()).map(|s| (s, "right")))
    {
        rec.place(
            k,
            lo + source,
            buffer[source].clone(),
            None,
            format!("Adding remaining {:?} from {side} run at position {k}", buffer[source]),
        );
        k += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Mutation, Runner};

    #[derive(Debug, Clone)]
    struct Keyed(u32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn test_reference_counts() {
        let mut runner = Runner::new(Algorithm::MergeSort, &[64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(runner.run().unwrap(), &[11, 12, 22, 25, 34, 64, 90]);

        let metrics = runner.final_metrics().unwrap();
        assert_eq!(metrics.comparisons(), 14);
        assert_eq!(metrics.swaps(), 20);
        assert_eq!(metrics.array_accesses(), 14 * 2 + 20 * 2);
        assert_eq!(metrics.memory_estimate(), 7);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let input = vec![
            Keyed(2, 'a'),
            Keyed(1, 'b'),
            Keyed(2, 'c'),
            Keyed(1, 'd'),
            Keyed(2, 'e'),
        ];
        let mut runner = Runner::new(Algorithm::MergeSort, &input);
        let tags: String = runner.run().unwrap().iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdace");
    }

    #[test]
    fn test_placement_steps_carry_both_pairs() {
        let mut runner = Runner::new(Algorithm::MergeSort, &[2, 1]);
        runner.run().unwrap();

        let placements: Vec<_> = runner
            .steps()
            .iter()
            .filter(|s| s.swapped().is_some())
            .collect();
        assert_eq!(placements.len(), 2);
        // First placement is decided by a comparison, the tail is not
        assert_eq!(placements[0].comparison(), Some((0, 1)));
        assert_eq!(placements[0].swapped(), Some((0, 1)));
        assert_eq!(placements[1].comparison(), None);
        assert_eq!(placements[1].swapped(), Some((1, 0)));
    }

    #[test]
    fn test_comparison_positions_refer_to_merge_start() {
        let mut runner = Runner::new(Algorithm::MergeSort, &[1, 3, 2, 4]);
        runner.run().unwrap();

        let mut merge_start: &[i32] = &[];
        let mut checked = 0;
        for step in runner.steps() {
            if step.description().starts_with("Merging") {
                merge_start = step.snapshot();
            }
            let (Some((a, b)), Some((_, source))) = (step.comparison(), step.swapped()) else {
                continue;
            };
            assert!(source == a || source == b, "step {}", step.number());
            let Some(Mutation::Write { value, .. }) = step.mutation() else {
                panic!("placement without write at step {}", step.number());
            };
            assert_eq!(*value, merge_start[source], "step {}", step.number());
            checked += 1;
        }
        assert_eq!(checked as u64, runner.metrics().comparisons());
    }
}
