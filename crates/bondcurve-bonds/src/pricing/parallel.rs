//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the collection is
//! large enough to be worth splitting.

/// Collections shorter than this are always mapped sequentially.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Maps a function over items, in parallel when the `parallel` feature is
/// enabled and there are at least [`PARALLEL_THRESHOLD`] items.
///
/// Output order always matches input order.
///
/// # Example
///
/// ```rust
/// use bondcurve_bonds::pricing::maybe_parallel_map;
///
/// let squares = maybe_parallel_map(&[1.0_f64, 2.0, 3.0], |x| x * x);
/// assert_eq!(squares, vec![1.0, 4.0, 9.0]);
/// ```
pub fn maybe_parallel_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if items.len() >= PARALLEL_THRESHOLD {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
