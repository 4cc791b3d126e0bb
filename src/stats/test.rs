use rand::distributions::{Distribution, Standard};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Random sample of `size` elements, or `None` when the slice starting at `start` would hold
/// fewer than three points
pub fn vec<T>(size: usize, start: usize) -> Option<Vec<T>>
where
    Standard: Distribution<T>,
{
    if size > start + 2 {
        let mut rng = StdRng::from_entropy();

        Some((0..size).map(|_| rng.gen()).collect())
    } else {
        None
    }
}

/// Points on the line `y = slope * x + intercept`, with `x` drawn uniformly from `[0, 10)`
pub fn line(size: usize, slope: f64, intercept: f64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::from_entropy();

    let xs: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..10.0)).collect();
    let ys = xs.iter().map(|&x| slope * x + intercept).collect();

    (xs, ys)
}
