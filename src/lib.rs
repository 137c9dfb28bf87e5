//! Out-of-place partition sorts with a fixed last-element pivot.
//!
//! Every implementation module exposes the same surface: free functions
//! `sort` and `sort_by` that consume a `Vec` and return a freshly built
//! sorted one, plus a `SortImpl` type wiring the module into the shared
//! [`sort_test_tools::Sort`] trait.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(input: Vec<T>) -> Vec<T>
            where
                T: Ord,
            {
                sort(input)
            }

            #[inline]
            fn sort_by<T, F>(input: Vec<T>, compare: F) -> Vec<T>
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(input, compare)
            }
        }
    };
}

pub mod iterative;
pub mod recursive;
