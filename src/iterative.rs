//! Explicit-stack partition sort.
//!
//! Same pivot choice and partition rule as [`crate::recursive`], but pending
//! runs live on a heap-allocated work stack instead of the call stack. The
//! worst case pivot path still costs quadratic time, it just cannot exhaust
//! the call stack anymore. Output is identical to the recursive form for
//! every input and comparator.

use std::cmp::Ordering;

sort_impl!("partition_sort_iterative");

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

// A pending unit of work. Pivots wait on the stack until every element less
// than them has been moved to the output.
enum Task<T> {
    Sort(Vec<T>),
    Emit(T),
}

fn partition_sort<T, F>(input: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut output = Vec::with_capacity(input.len());
    let mut work = vec![Task::Sort(input)];

    while let Some(task) = work.pop() {
        let mut v = match task {
            Task::Emit(pivot) => {
                output.push(pivot);
                continue;
            }
            Task::Sort(v) => v,
        };

        if v.len() < 2 {
            output.extend(v);
            continue;
        }

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

        // LIFO order: the less-than run must fully drain into the output
        // before the pivot, and the pivot before the rest.
        work.push(Task::Sort(ge));
        work.push(Task::Emit(pivot));
        work.push(Task::Sort(less));
    }

    output
}
