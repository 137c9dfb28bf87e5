/// Shared interface for the out-of-place sorts under test.
///
/// Implementations consume their input and hand back a freshly built vector
/// holding the same elements in non-descending order. Elements are moved,
/// never cloned, so `T` only needs an ordering.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(input: Vec<T>) -> Vec<T>
    where
        T: Ord;

    fn sort_by<T, F>(input: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
