//! Priority-Queue Sort
//!
//! In-place binary min-heap stored back to front: logical heap index `l`
//! lives at physical position `n - 1 - l`. The root therefore sits at the end
//! of the array and every extraction swaps it into the first unsorted slot,
//! growing the sorted prefix from the left.

use crate::error::RunError;
use crate::recorder::Recorder;
use std::cmp::Ordering;
use std::fmt::Debug;

pub(crate) fn sort<T>(rec: &mut Recorder<'_, T>) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let n = rec.len();
    if n < 2 {
        return Ok(());
    }

    rec.milestone("Building min-heap", (0..n).collect());
    for l in (0..n / 2).rev() {
        sift_down(rec, l, n)?;
    }
    rec.milestone("Min-heap built", (0..n).collect());

    for size in (2..=n).rev() {
        let root = physical(n, 0);
        let target = physical(n, size - 1);
        let description = format!(
            "Extracting minimum {:?} into position {target} (heap size now {})",
            rec.value(root),
            size - 1
        );
        rec.swap(root, target, description);
        sift_down(rec, 0, size - 1)?;
    }

    Ok(())
}

#[inline]
fn physical(n: usize, logical: usize) -> usize {
    n - 1 - logical
}

fn sift_down<T>(rec: &mut Recorder<'_, T>, mut l: usize, size: usize) -> Result<(), RunError>
where
    T: PartialOrd + Clone + Debug,
{
    let n = rec.len();
    loop {
        let left = 2 * l + 1;
        if left >= size {
            return Ok(());
        }

        let mut child = left;
        let right = left + 1;
        if right < size {
            let (pr, pl) = (physical(n, right), physical(n, left));
            let description = format!(
                "Comparing children arr[{pr}]={:?} and arr[{pl}]={:?}",
                rec.value(pr),
                rec.value(pl)
            );
            if rec.compare(pr, pl, description, vec![physical(n, l)])? == Ordering::Less {
                child = right;
            }
        }

        let (pc, pp) = (physical(n, child), physical(n, l));
        let description = format!(
            "Comparing child arr[{pc}]={:?} with parent arr[{pp}]={:?}",
            rec.value(pc),
            rec.value(pp)
        );
        if rec.compare(pc, pp, description, vec![])? != Ordering::Less {
            return Ok(());
        }

        let description = format!(
            "Sifting {:?} down: swapping arr[{pp}] with arr[{pc}]",
            rec.value(pp)
        );
        rec.swap(pp, pc, description);
        l = child;
    }
}
