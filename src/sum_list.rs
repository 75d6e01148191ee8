use std::iter::Sum;

/// Adds up `numbers`. An empty slice sums to zero.
///
/// Integer overflow follows the rules of `T`; use [`sum_integers`] when the
/// inputs are arbitrary `i64` values.
pub fn sum_list<T>(numbers: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    numbers.iter().copied().sum()
}

/// Exact sum of `i64` values. Accumulates in `i128`, which cannot overflow
/// for any slice that fits in memory.
pub fn sum_integers(numbers: &[i64]) -> i128 {
    numbers.iter().map(|&n| i128::from(n)).sum()
}
