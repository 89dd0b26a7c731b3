use std::cmp::Ordering;

use crate::tracker::Instrument;

sort_impl!("selection_standard");

/// Sorts `v` with single-ended selection sort, without early exit.
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

/// Pass `i` selects the minimum of `v[i..]` and swaps it into `v[i]`.
///
/// Every scan step counts one comparison and two reads. With `early_exit` the whole slice is
/// checked after each pass and the sort stops as soon as it is in order.
pub fn sort_instrumented<T, F, I>(v: &mut [T], is_less: &mut F, tracker: &mut I, early_exit: bool)
where
    F: FnMut(&T, &T) -> bool,
    I: Instrument + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        tracker.inc_iteration();

        let mut min = i;
        for j in (i + 1)..len {
            tracker.inc_comparison();
            tracker.add_reads(2);
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            super::swap(v, i, min, tracker);
        }

        if early_exit && super::is_sorted(v, is_less, tracker) {
            tracker.mark_early_termination();
            break;
        }
    }
}
