//! Selection Sort
//!
//! One comparison per scanned element and exactly one swap per position,
//! self-swaps included, so swap counts depend only on `n`.

use crate::error::RunError;
use crate::recorder::Recorder;
use std::cmp::Ordering;
use std::fmt::Debug;

pub(crate) fn sort<T>(rec: &mut Recorder<'_, T>) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        rec.milestone(
            format!("Finding minimum in unsorted range [{i}, {n})"),
            (i..n).collect(),
        );

        let mut min = i;
        for j in i + 1..n {
            let description = format!(
                "Comparing arr[{j}]={:?} with current minimum arr[{min}]={:?}",
                rec.value(j),
                rec.value(min)
            );
            if rec.compare(j, min, description, vec![min])? == Ordering::Less {
                min = j;
            }
        }

        let description = if min == i {
            format!("arr[{i}]={:?} already in place", rec.value(i))
        } else {
            format!(
                "Swapping arr[{i}]={:?} with minimum arr[{min}]={:?}",
                rec.value(i),
                rec.value(min)
            )
        };
        rec.swap(i, min, description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Runner};

    #[test]
    fn test_reverse_five() {
        let mut runner = Runner::new(Algorithm::SelectionSort, &[5, 4, 3, 2, 1]);
        assert_eq!(runner.run().unwrap(), &[1, 2, 3, 4, 5]);

        let metrics = runner.final_metrics().unwrap();
        assert_eq!(metrics.comparisons(), 10);
        assert_eq!(metrics.swaps(), 4);
        assert_eq!(metrics.memory_estimate(), 0);
    }

    #[test]
    fn test_self_swaps_are_recorded() {
        let mut runner = Runner::new(Algorithm::SelectionSort, &[1, 2, 3]);
        runner.run().unwrap();

        let swaps: Vec<_> = runner.steps().iter().filter_map(|s| s.swapped()).collect();
        assert_eq!(swaps, vec![(0, 0), (1, 1)]);
        assert_eq!(runner.final_metrics().unwrap().comparisons(), 3);
    }
}
