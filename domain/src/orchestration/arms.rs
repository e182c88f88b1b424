//! Ordering helpers shared by the topology strategies.

/// Every cyclic rotation of `items`, in start order.
///
/// `rotations(&[a, b, c])` yields `[a, b, c]`, `[b, c, a]`, `[c, a, b]`.
pub fn rotations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let n = items.len();
    (0..n)
        .map(|start| (0..n).map(|k| items[(start + k) % n].clone()).collect())
        .collect()
}

/// Indices `n-1, n-2, ..., 0`.
pub fn reverse_indices(n: usize) -> impl Iterator<Item = usize> {
    (0..n).rev()
}
