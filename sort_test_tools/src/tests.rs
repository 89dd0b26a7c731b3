//! Correctness suite shared by every [`Sort`] implementation.
//!
//! Instantiate it from an integration test with [`instantiate_sort_tests!`](crate::instantiate_sort_tests).

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 14] = [0, 1, 2, 3, 4, 5, 7, 8, 16, 17, 24, 50, 101, 200];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 17] = [
    0, 1, 2, 3, 4, 5, 7, 8, 16, 17, 24, 50, 101, 200, 500, 1_000, 2_048,
];

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    assert_eq!(
        &*v,
        expected.as_slice(),
        "{} failed, seed: {seed}, len: {}",
        S::name(),
        v.len()
    );
}

fn test_impl<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for len in TEST_SIZES {
        let mut v = pattern_fn(len);
        sort_comp::<i32, S>(&mut v);
    }
}

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<i32, S>(&mut [42]);
    sort_comp::<i32, S>(&mut [2, 1]);
    sort_comp::<i32, S>(&mut [5, 3, 4, 1, 2]);
    sort_comp::<i32, S>(&mut [5, 1, 3, 3, 1, 5, 0, 0]);
    sort_comp::<i32, S>(&mut [9, 1, 4]);
    sort_comp::<i32, S>(&mut [9, 2, 3, 1]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed = patterns::random_seeded(500, 123);
    let again = patterns::random_seeded(500, 123);
    assert_eq!(fixed, again);

    let mut v = fixed;
    sort_comp::<i32, S>(&mut v);
}

pub fn idempotent<S: Sort>() {
    for len in TEST_SIZES {
        let mut v = patterns::random(len);
        S::sort(&mut v);
        let sorted = v.clone();
        S::sort(&mut v);
        assert_eq!(v, sorted, "{} changed an already sorted input", S::name());
    }
}

pub fn int_edge<S: Sort>() {
    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN, 0, -1, 1, i32::MAX, i32::MIN]);
    sort_comp::<i64, S>(&mut [i64::MIN, i64::MAX, 0, i64::MIN]);
    sort_comp::<u8, S>(&mut [200, 50, 100, 150, 25]);
}

pub fn strings<S: Sort>() {
    let mut v: Vec<String> = patterns::random(101)
        .into_iter()
        .map(|val| format!("{:010}", val.unsigned_abs()))
        .collect();
    sort_comp::<String, S>(&mut v);

    sort_comp::<&str, S>(&mut ["rust", "python", "java", "c++"]);
}

pub fn sort_vs_sort_by<S: Sort>() {
    for len in TEST_SIZES {
        let input = patterns::random_uniform(len, -50..50);

        let mut via_sort = input.clone();
        S::sort(&mut via_sort);

        let mut via_sort_by = input;
        S::sort_by(&mut via_sort_by, |a, b| a.cmp(b));

        assert_eq!(via_sort, via_sort_by);
    }
}

pub fn sort_by_reverse<S: Sort>() {
    for len in TEST_SIZES {
        let mut v = patterns::random(len);
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, expected, "{} reverse order failed", S::name());
    }
}

pub fn sort_by_key<S: Sort>() {
    // Compare on the low byte only, the result must be grouped by that key.
    let mut v = patterns::random(200);
    S::sort_by(&mut v, |a, b| (a & 0xFF).cmp(&(b & 0xFF)));
    assert!(v.windows(2).all(|w| (w[0] & 0xFF) <= (w[1] & 0xFF)));
}

pub fn permutation<S: Sort>() {
    // Every input value has to survive the sort exactly as often as it went in.
    for len in TEST_SIZES {
        let input = patterns::random_uniform(len, 0..8);
        let mut v = input.clone();
        S::sort(&mut v);

        for val in 0..8 {
            let before = input.iter().filter(|&&x| x == val).count();
            let after = v.iter().filter(|&&x| x == val).count();
            assert_eq!(before, after, "value {val} count changed");
        }
    }
}

pub fn comparator_panic_free<S: Sort>() {
    // A comparator that is not a total order must not make the sort panic or lose elements.
    let input = patterns::random(100);
    let mut v = input.clone();
    S::sort_by(&mut v, |_, _| Ordering::Less);

    let mut lhs = input;
    let mut rhs = v;
    lhs.sort();
    rhs.sort();
    assert_eq!(lhs, rhs);
}

// --- Pattern inputs ---

pub mod inputs {
    use crate::patterns;

    pub fn ascending(len: usize) -> Vec<i32> {
        patterns::ascending(len)
    }

    pub fn descending(len: usize) -> Vec<i32> {
        patterns::descending(len)
    }

    pub fn all_equal(len: usize) -> Vec<i32> {
        patterns::all_equal(len)
    }

    pub fn pipe_organ(len: usize) -> Vec<i32> {
        patterns::pipe_organ(len)
    }

    pub fn random(len: usize) -> Vec<i32> {
        patterns::random(len)
    }

    pub fn random_d2(len: usize) -> Vec<i32> {
        patterns::random_uniform(len, 0..2)
    }

    pub fn random_d10(len: usize) -> Vec<i32> {
        patterns::random_uniform(len, 0..10)
    }

    pub fn random_d1024(len: usize) -> Vec<i32> {
        patterns::random_uniform(len, 0..1024)
    }

    pub fn random_z1(len: usize) -> Vec<i32> {
        patterns::random_zipf(len, 1.0)
    }

    pub fn ascending_noise(len: usize) -> Vec<i32> {
        patterns::ascending_with_noise(len, 5.0)
    }
}

pub fn pattern<S: Sort>(pattern_fn: fn(usize) -> Vec<i32>) {
    test_impl::<S>(pattern_fn);
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @suite $sort_impl,
            [
                basic,
                fixed_seed,
                idempotent,
                int_edge,
                strings,
                sort_vs_sort_by,
                sort_by_reverse,
                sort_by_key,
                permutation,
                comparator_panic_free
            ]
        );

        $crate::instantiate_sort_tests!(
            @patterns $sort_impl,
            [
                ascending,
                descending,
                all_equal,
                pipe_organ,
                random,
                random_d2,
                random_d10,
                random_d1024,
                random_z1,
                ascending_noise
            ]
        );
    };
    (@suite $sort_impl:ty, [$($test_fn:ident),* $(,)?]) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
    (@patterns $sort_impl:ty, [$($pattern:ident),* $(,)?]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<pattern_ $pattern>]() {
                    $crate::tests::pattern::<$sort_impl>($crate::tests::inputs::$pattern);
                }
            )*
        }
    };
}
