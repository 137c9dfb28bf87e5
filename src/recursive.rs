//! Recursive partition sort.
//!
//! The reference form of the algorithm: pick the last element as pivot,
//! split the rest into strictly-less and equal-or-greater runs with a single
//! left-to-right scan, sort both runs recursively and stitch the result back
//! together around the pivot. Builds new vectors at every level instead of
//! sorting in place.

use std::cmp::Ordering;

sort_impl!("partition_sort_recursive");

#[inline]
pub fn sort<T>(input: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    sort_by(input, |a, b| a.cmp(b))
}

#[inline]
pub fn sort_by<T, F>(input: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_sort(input, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn partition_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return v;
    }

    // Fixed pivot choice. Quadratic on pre-sorted input, with recursion
    // depth linear in the input length on that path.
    let pivot = v.pop().unwrap();

    let mut less = Vec::new();
    let mut ge = Vec::new();
    for elem in v {
        if is_less(&elem, &pivot) {
            less.push(elem);
        } else {
            // Elements equal to the pivot group right, never left.
            ge.push(elem);
        }
    }

    let mut sorted = partition_sort(less, is_less);
    sorted.push(pivot);
    sorted.extend(partition_sort(ge, is_less));
    sorted
}
