//! Bivariate analysis

pub mod regression;

use crate::error::{Axis, Error, Result};
use crate::stats::float::Float;

/// Bivariate `(X, Y)` data
///
/// Invariants:
///
/// - Both sequences have the same length
/// - No `NaN`s or infinities in the data
pub struct Data<'a, X, Y>(&'a [X], &'a [Y]);

impl<'a, X, Y> Copy for Data<'a, X, Y> {}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<'a, X, Y> Clone for Data<'a, X, Y> {
    fn clone(&self) -> Data<'a, X, Y> {
        *self
    }
}

impl<'a, X, Y> Data<'a, X, Y> {
    /// Returns the length of the data set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the data set holds no points
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the data set
    pub fn iter(&self) -> Pairs<'a, X, Y> {
        Pairs {
            data: *self,
            state: 0,
        }
    }

    /// Returns the `X` data
    pub fn x(&self) -> &'a [X] {
        self.0
    }

    /// Returns the `Y` data
    pub fn y(&self) -> &'a [Y] {
        self.1
    }
}

impl<'a, X, Y> Data<'a, X, Y>
where
    X: Float,
    Y: Float,
{
    /// Creates a new data set from two existing slices
    ///
    /// The lengths are compared before anything else is looked at.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `xs` and `ys` have different lengths
    /// - `NonFiniteInput` if any value is `NaN` or infinite
    pub fn new(xs: &'a [X], ys: &'a [Y]) -> Result<Data<'a, X, Y>> {
        if xs.len() != ys.len() {
            return Err(Error::ShapeMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteInput {
                axis: Axis::X,
                index,
            });
        }
        if let Some(index) = ys.iter().position(|y| !y.is_finite()) {
            return Err(Error::NonFiniteInput {
                axis: Axis::Y,
                index,
            });
        }

        Ok(Data(xs, ys))
    }
}

/// Iterator over `Data`
pub struct Pairs<'a, X: 'a, Y: 'a> {
    data: Data<'a, X, Y>,
    state: usize,
}

impl<'a, X, Y> Iterator for Pairs<'a, X, Y> {
    type Item = (&'a X, &'a Y);

    fn next(&mut self) -> Option<(&'a X, &'a Y)> {
        if self.state < self.data.len() {
            let i = self.state;
            self.state += 1;

            Some((&self.data.0[i], &self.data.1[i]))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.state;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];

        match Data::new(&x, &y) {
            Err(Error::ShapeMismatch { x_len, y_len }) => assert_eq!((x_len, y_len), (3, 4)),
            other => panic!("expected a shape mismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn shape_is_checked_before_values() {
        let x = [f64::NAN, 2.0];
        let y = [1.0];

        assert!(matches!(
            Data::new(&x, &y),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, f64::INFINITY, 3.0];

        assert!(matches!(
            Data::new(&x, &y),
            Err(Error::NonFiniteInput {
                axis: Axis::Y,
                index: 1
            })
        ));
    }

    #[test]
    fn iterates_over_pairs() {
        let x = [1.0f32, 2.0];
        let y = [3.0f32, 4.0];
        let data = Data::new(&x, &y).unwrap();

        let pairs: Vec<_> = data.iter().map(|(&x, &y)| (x, y)).collect();
        assert_eq!(pairs, vec![(1.0, 3.0), (2.0, 4.0)]);
        assert_eq!(data.iter().size_hint(), (2, Some(2)));
    }

    #[test]
    fn empty_data_is_allowed() {
        let data = Data::<f64, f64>::new(&[], &[]).unwrap();
        assert!(data.is_empty());
    }
}
