use sort_test_tools::patterns;

// The explicit-stack variant must produce exactly the output of the
// recursive form, including the placement of elements that compare equal.
// Sorting key-payload pairs by key only makes that placement observable.

fn observable_input(len: usize) -> Vec<(i32, usize)> {
    patterns::random_uniform(len, 0..=7)
        .into_iter()
        .enumerate()
        .map(|(idx, key)| (key, idx))
        .collect()
}

#[test]
fn same_output_i32() {
    for len in [0, 1, 2, 3, 8, 33, 100, 1_000, 10_000] {
        let input = patterns::random(len);

        assert_eq!(
            partition_sort::recursive::sort(input.clone()),
            partition_sort::iterative::sort(input)
        );
    }
}

#[test]
fn same_output_equal_keys() {
    for len in [2, 3, 8, 33, 100, 1_000] {
        let input = observable_input(len);

        let by_key = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);

        assert_eq!(
            partition_sort::recursive::sort_by(input.clone(), by_key),
            partition_sort::iterative::sort_by(input, by_key)
        );
    }
}

#[test]
fn same_output_presorted() {
    // Worst case pivot path for both variants, so run on a thread with
    // enough stack for the recursive one.
    sort_test_tools::tests::run_on_test_stack(|| {
        for len in [100, 1_000, 10_000] {
            assert_eq!(
                partition_sort::recursive::sort(patterns::ascending(len)),
                partition_sort::iterative::sort(patterns::ascending(len))
            );
            assert_eq!(
                partition_sort::recursive::sort(patterns::descending(len)),
                partition_sort::iterative::sort(patterns::descending(len))
            );
        }
    });
}
