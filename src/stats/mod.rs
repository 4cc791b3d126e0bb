//! The statistics engine.
//!
//! Everything in here is a pure function of the data it is handed: there is no shared state, and
//! every operation either returns its result or fails with an [`Error`](crate::Error) without side
//! effects.

#[cfg(test)]
mod test;

pub mod bivariate;

mod float;

pub use crate::stats::float::Float;

fn dot<A>(xs: &[A], ys: &[A]) -> A
where
    A: Float,
{
    xs.iter()
        .zip(ys)
        .fold(A::cast(0), |acc, (&x, &y)| acc + x * y)
}

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}

/// Returns `true` if every element equals the first one (vacuously for an empty slice)
fn all_equal<A>(xs: &[A]) -> bool
where
    A: Float,
{
    match xs.split_first() {
        Some((&head, tail)) => tail.iter().all(|&x| x == head),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_sum() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(sum(&[1.5, 2.5, -1.0]), 3.0);
        assert_eq!(sum::<f64>(&[]), 0.0);
    }

    #[test]
    fn all_equal_detects_constant_slices() {
        assert!(all_equal(&[5.0, 5.0, 5.0]));
        assert!(all_equal::<f32>(&[]));
        assert!(!all_equal(&[8.0, 8.0, 19.0]));
    }
}
