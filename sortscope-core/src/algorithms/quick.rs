//! Quick Sort
//!
//! Lomuto partition with the last element of the range as pivot. The rule is
//! fixed: sorted and reverse-sorted inputs hit the quadratic worst case every
//! time, which is exactly what a learner should be able to reproduce.

use crate::error::RunError;
use crate::recorder::Recorder;
use std::cmp::Ordering;
use std::fmt::Debug;

pub(crate) fn sort<T>(rec: &mut Recorder<'_, T>) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let n = rec.len();
    sort_range(rec, 0, n, 1)
}

fn sort_range<T>(
    rec: &mut Recorder<'_, T>,
    lo: usize,
    hi: usize,
    depth: u64,
) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    if hi - lo < 2 {
        return Ok(());
    }
    rec.auxiliary(depth);

    let pivot = partition(rec, lo, hi)?;

    if pivot > lo + 1 {
        rec.milestone(
            format!("Recursing into left range [{lo}, {pivot})"),
            (lo..pivot).collect(),
        );
    }
    sort_range(rec, lo, pivot, depth + 1)?;

    if pivot + 2 < hi {
        rec.milestone(
            format!("Recursing into right range [{}, {hi})", pivot + 1),
            (pivot + 1..hi).collect(),
        );
    }
    sort_range(rec, pivot + 1, hi, depth + 1)
}

/// Partition `[lo, hi)` around `arr[hi - 1]`, returning the pivot's final index
fn partition<T>(rec: &mut Recorder<'_, T>, lo: usize, hi: usize) -> Result<usize, RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let p = hi - 1;
    rec.milestone(
        format!("Partition pivot chosen: arr[{p}]={:?} for range [{lo}, {hi})", rec.value(p)),
        (lo..hi).collect(),
    );

    let mut store = lo;
    for j in lo..p {
        let description = format!(
            "Comparing arr[{j}]={:?} with pivot {:?}",
            rec.value(j),
            rec.value(p)
        );
        if rec.compare(j, p, description, vec![store])? != Ordering::Greater {
            if store != j {
                let description = format!(
                    "Swapping arr[{store}]={:?} with arr[{j}]={:?}",
                    rec.value(store),
                    rec.value(j)
                );
                rec.swap(store, j, description);
            }
            store += 1;
        }
    }

    if store != p {
        let description = format!("Placing pivot {:?} at index {store}", rec.value(p));
        rec.swap(store, p, description);
    }

    rec.milestone(
        format!(
            "Partition complete: pivot {:?} settled at index {store}",
            rec.value(store)
        ),
        vec![store],
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Runner};

    fn quadratic(n: u64) -> u64 {
        n * (n - 1) / 2
    }

    #[test]
    fn test_sorted_input_is_worst_case() {
        for n in [2usize, 6, 32] {
            let input: Vec<usize> = (0..n).collect();
            let mut runner = Runner::new(Algorithm::QuickSort, &input);
            runner.run().unwrap();

            let metrics = runner.final_metrics().unwrap();
            assert_eq!(metrics.comparisons(), quadratic(n as u64));
            // Everything is already on the pivot's side
            assert_eq!(metrics.swaps(), 0);
            assert_eq!(metrics.memory_estimate(), n as u64 - 1);
        }
    }

    #[test]
    fn test_reverse_input_is_worst_case() {
        let input = [6, 5, 4, 3, 2, 1];
        let mut runner = Runner::new(Algorithm::QuickSort, &input);
        assert_eq!(runner.run().unwrap(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(runner.final_metrics().unwrap().comparisons(), 15);
    }

    #[test]
    fn test_reproducible_counts() {
        let input = [9, 1, 8, 2, 7, 3];
        let counts: Vec<_> = (0..3)
            .map(|_| {
                let mut runner = Runner::new(Algorithm::QuickSort, &input);
                runner.run().unwrap();
                let m = runner.final_metrics().unwrap();
                (m.comparisons(), m.swaps(), runner.steps().len())
            })
            .collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_pivot_milestone_names_last_element() {
        let mut runner = Runner::new(Algorithm::QuickSort, &[3, 1, 2]);
        runner.run().unwrap();
        let pivot = runner
            .steps()
            .iter()
            .find(|s| s.description().starts_with("Partition pivot chosen"))
            .unwrap();
        assert_eq!(
            pivot.description(),
            "Partition pivot chosen: arr[2]=2 for range [0, 3)"
        );
    }
}
