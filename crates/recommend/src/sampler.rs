//! Sampling without replacement over a shrinking pool.

use rand::Rng;

/// Remove and return one element chosen uniformly from `pool`.
///
/// The pool shrinks by one on every draw, so repeated calls never return
/// the same element twice. Element order inside `pool` is not preserved.
pub fn draw<T, R: Rng>(pool: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if pool.is_empty() {
        return None;
    }

    let index = rng.random_range(0..pool.len());

    Some(pool.swap_remove(index))
}
