use std::cmp::Ordering;

use crate::tracker::Instrument;

sort_impl!("selection_double_ended");

/// Sorts `v` with double-ended selection sort, without early exit.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_instrumented(v, &mut |a: &T, b: &T| a.lt(b), &mut (), false);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    sort_instrumented(
        v,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut (),
        false,
    );
}

/// Each pass scans the window `v[left..=right]` once, tracking the positions of its minimum and
/// maximum, then moves the minimum to `left` and the maximum to `right`. The window shrinks by
/// one from both sides until `left` meets `right`.
///
/// A scanned element counts two comparisons and three reads (two for the minimum test, one for
/// the maximum test), whether or not either candidate changes.
pub fn sort_instrumented<T, F, I>(v: &mut [T], is_less: &mut F, tracker: &mut I, early_exit: bool)
where
    F: FnMut(&T, &T) -> bool,
    I: Instrument + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut left = 0;
    let mut right = len - 1;

    while left < right {
        tracker.inc_iteration();

        let mut min = left;
        let mut max = right;
        for j in left..=right {
            tracker.add_reads(2);
            tracker.inc_comparison();
            if is_less(&v[j], &v[min]) {
                min = j;
            }

            tracker.add_reads(1);
            tracker.inc_comparison();
            if is_less(&v[max], &v[j]) {
                max = j;
            }
        }

        if min != left {
            super::swap(v, left, min, tracker);
        }

        // The maximum sat at `left` and the swap above moved it to `min`.
        if max == left {
            max = min;
        }

        if max != right {
            super::swap(v, right, max, tracker);
        }

        left += 1;
        right -= 1;

        if early_exit && super::is_sorted(v, is_less, tracker) {
            tracker.mark_early_termination();
            break;
        }
    }
}
