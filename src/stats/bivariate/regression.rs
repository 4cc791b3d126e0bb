//! Regression analysis

use crate::error::{Axis, Error, Result};
use crate::stats::bivariate::Data;
use crate::stats::float::Float;

/// A straight line `y = m * x + b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine<A>
where
    A: Float,
{
    /// The y-intercept of the line
    pub intercept: A,
    /// The slope of the line
    pub slope: A,
}

impl<A> StraightLine<A>
where
    A: Float,
{
    /// Fits the data to a straight line using ordinary least squares
    ///
    /// - Time: `O(length)`
    ///
    /// # Errors
    ///
    /// - `InsufficientSampleSize` with fewer than two points
    /// - `DegenerateInput(X)` if all the `x` values are identical
    /// - `Overflow` if the sums leave the floating-point range
    #[allow(clippy::similar_names)]
    pub fn fit(data: &Data<'_, A, A>) -> Result<StraightLine<A>> {
        let xs = data.0;
        let ys = data.1;

        if xs.len() < 2 {
            return Err(Error::InsufficientSampleSize {
                required: 2,
                actual: xs.len(),
            });
        }
        // Catches constant columns whose rounded denominator would come out as a tiny non-zero
        if crate::stats::all_equal(xs) {
            return Err(Error::DegenerateInput(Axis::X));
        }

        let n = A::cast(xs.len());
        let x_sum = crate::stats::sum(xs);
        let y_sum = crate::stats::sum(ys);
        let xy = crate::stats::dot(xs, ys);
        let x2 = crate::stats::dot(xs, xs);

        let x_bar = x_sum / n;
        let y_bar = y_sum / n;

        let slope = {
            let num = xy - n * x_bar * y_bar;
            let den = x2 - n * x_bar * x_bar;

            if den == A::cast(0) {
                return Err(Error::DegenerateInput(Axis::X));
            }

            num / den
        };

        let intercept = y_bar - slope * x_bar;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(Error::Overflow {
                statistic: "least-squares line",
            });
        }

        Ok(StraightLine { intercept, slope })
    }

    /// Evaluates the line at `x`
    pub fn predict(&self, x: A) -> A {
        self.slope * x + self.intercept
    }

    /// Sum of the squared residuals of this line over the data set
    fn residual_sum_of_squares(&self, data: &Data<'_, A, A>) -> A {
        data.iter()
            .fold(A::cast(0), |acc, (&x, &y)| acc + (y - self.predict(x)).powi(2))
    }

    /// Computes the goodness of fit (coefficient of determination) for this data set
    ///
    /// - Time: `O(length)`
    ///
    /// # Errors
    ///
    /// - `InsufficientSampleSize` on an empty data set
    /// - `DegenerateInput(Y)` if the `y` values have no variance
    /// - `Overflow` if the sums of squares leave the floating-point range
    pub fn r_squared(&self, data: &Data<'_, A, A>) -> Result<A> {
        let _0 = A::cast(0);
        let _1 = A::cast(1);
        let ys = data.1;

        if ys.is_empty() {
            return Err(Error::InsufficientSampleSize {
                required: 1,
                actual: 0,
            });
        }
        if crate::stats::all_equal(ys) {
            return Err(Error::DegenerateInput(Axis::Y));
        }

        let n = A::cast(ys.len());
        let y_bar = crate::stats::sum(ys) / n;

        let mut ss_res = _0;
        let mut ss_tot = _0;
        for (&x, &y) in data.iter() {
            ss_res = ss_res + (y - self.predict(x)).powi(2);
            ss_tot = ss_tot + (y - y_bar).powi(2);
        }

        // Non-constant `y` whose squared deviations underflow
        if ss_tot == _0 {
            return Err(Error::DegenerateInput(Axis::Y));
        }

        let r_squared = _1 - ss_res / ss_tot;
        if !r_squared.is_finite() {
            return Err(Error::Overflow {
                statistic: "coefficient of determination",
            });
        }

        Ok(r_squared)
    }

    /// Computes the residual standard error, `sqrt(SSR / (n - 2))`
    ///
    /// - Time: `O(length)`
    ///
    /// # Errors
    ///
    /// - `InsufficientSampleSize` with two points or fewer
    /// - `Overflow` if the residual sum of squares leaves the floating-point range
    pub fn residual_standard_error(&self, data: &Data<'_, A, A>) -> Result<A> {
        let n = data.len();
        if n <= 2 {
            return Err(Error::InsufficientSampleSize {
                required: 3,
                actual: n,
            });
        }

        let dof = A::cast(n - 2);

        let rse = (self.residual_sum_of_squares(data) / dof).sqrt();
        if !rse.is_finite() {
            return Err(Error::Overflow {
                statistic: "residual standard error",
            });
        }

        Ok(rse)
    }
}

/// Computes the F-statistic of a simple regression from its coefficient of determination and
/// the number of data points
///
/// A perfect fit (`r_squared == 1`) has no residual variance, so the statistic is `+∞`.
///
/// # Errors
///
/// - `InsufficientSampleSize` if `n <= 2`
pub fn f_statistic<A>(r_squared: A, n: usize) -> Result<A>
where
    A: Float,
{
    if n <= 2 {
        return Err(Error::InsufficientSampleSize {
            required: 3,
            actual: n,
        });
    }

    let _1 = A::cast(1);
    if r_squared == _1 {
        return Ok(A::infinity());
    }

    Ok(r_squared / (_1 - r_squared) * A::cast(n - 2))
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn fits_an_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [3.0, 5.0, 7.0, 9.0, 11.0];
        let data = Data::new(&x, &y).unwrap();

        let line = StraightLine::fit(&data).unwrap();
        assert_relative_eq!(line.slope, 2.0, epsilon = 1e-6);
        assert_relative_eq!(line.intercept, 1.0, epsilon = 1e-6);

        let r_squared = line.r_squared(&data).unwrap();
        assert_relative_eq!(r_squared, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_residual_standard_error() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        let data = Data::new(&x, &y).unwrap();
        let line = StraightLine {
            slope: 2.0,
            intercept: 0.0,
        };

        let rse: f64 = line.residual_standard_error(&data).unwrap();
        assert!(rse.abs() < 1e-9);
    }

    #[test]
    fn residual_standard_error_uses_n_minus_two() {
        // residuals are 1, -1, 1, -1: SSR = 4, four points leave two degrees of freedom
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, -1.0, 1.0, -1.0];
        let data = Data::new(&x, &y).unwrap();
        let line = StraightLine {
            slope: 0.0,
            intercept: 0.0,
        };

        assert_relative_eq!(line.residual_standard_error(&data).unwrap(), 2f64.sqrt());
    }

    #[test]
    fn constant_x_is_degenerate() {
        let x = [5.0, 5.0, 5.0];
        let y = [1.0, 2.0, 3.0];
        let data = Data::new(&x, &y).unwrap();

        assert!(matches!(
            StraightLine::fit(&data),
            Err(Error::DegenerateInput(Axis::X))
        ));
    }

    #[test]
    fn constant_x_with_rounding_noise_is_degenerate() {
        let x = [0.1, 0.1, 0.1];
        let y = [1.0, 2.0, 3.0];
        let data = Data::new(&x, &y).unwrap();

        assert!(StraightLine::fit(&data).is_err());
    }

    #[test]
    fn constant_y_is_degenerate_for_r_squared() {
        let x = [1.0, 2.0, 3.0];
        let y = [0.1, 0.1, 0.1];
        let data = Data::new(&x, &y).unwrap();

        let line = StraightLine::fit(&data).unwrap();
        assert!(matches!(
            line.r_squared(&data),
            Err(Error::DegenerateInput(Axis::Y))
        ));
    }

    #[test]
    fn underflowing_y_variance_is_degenerate() {
        let x = [1.0, 2.0, 3.0];
        let y = [0.0, 1e-170, 2e-170];
        let data = Data::new(&x, &y).unwrap();

        let line = StraightLine::fit(&data).unwrap();
        assert!(matches!(
            line.r_squared(&data),
            Err(Error::DegenerateInput(Axis::Y))
        ));
    }

    #[test]
    fn huge_x_overflows_the_fit() {
        let x = [1e200, 2e200, 3e200];
        let y = [1.0, 2.0, 3.0];
        let data = Data::new(&x, &y).unwrap();

        assert!(matches!(
            StraightLine::fit(&data),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn huge_y_overflows_the_sums_of_squares() {
        let x: [f64; 3] = [1.0, 2.0, 3.0];
        let y = [1e200, 2e200, 4e200];
        let data = Data::new(&x, &y).unwrap();

        let line = StraightLine::fit(&data).unwrap();
        assert!(line.slope.is_finite() && line.intercept.is_finite());
        assert!(matches!(
            line.r_squared(&data),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            line.residual_standard_error(&data),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn single_point_cannot_be_fitted() {
        let data = Data::new(&[1.0], &[2.0]).unwrap();

        assert!(matches!(
            StraightLine::fit(&data),
            Err(Error::InsufficientSampleSize {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn two_points_have_no_residual_standard_error() {
        let x = [1.0, 2.0];
        let y = [2.0, 4.0];
        let data = Data::new(&x, &y).unwrap();

        let line = StraightLine::fit(&data).unwrap();
        assert!(matches!(
            line.residual_standard_error(&data),
            Err(Error::InsufficientSampleSize {
                required: 3,
                actual: 2
            })
        ));
        assert!(f_statistic(0.5, 2).is_err());
    }

    #[test]
    fn f_statistic_of_perfect_fit_is_infinite() {
        assert_eq!(f_statistic(1.0f64, 5).unwrap(), f64::INFINITY);
    }

    #[test]
    fn f_statistic_formula() {
        // r² = 0.5 makes the ratio one, so F equals the residual degrees of freedom
        assert_relative_eq!(f_statistic(0.5f64, 11).unwrap(), 9.0);
        assert_relative_eq!(f_statistic(0.0f64, 11).unwrap(), 0.0);
    }

    #[test]
    fn predict_evaluates_the_line() {
        let line = StraightLine {
            slope: 0.5,
            intercept: 3.0,
        };
        assert_relative_eq!(line.predict(4.0), 5.0);
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::{quickcheck, TestResult};

            use crate::stats::bivariate::regression::StraightLine;
            use crate::stats::bivariate::Data;

            quickcheck! {
                fn r_squared(size: usize, start: usize, offset: usize) -> TestResult {
                    let size = size % 1000;
                    let start = start % 100;
                    let offset = offset % 100;
                    if let Some(x) = crate::stats::test::vec::<$ty>(size, start) {
                        let y = crate::stats::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let data = Data::new(&x[start..], &y[start+offset..]).unwrap();

                        let sl = StraightLine::fit(&data).unwrap();

                        let r_squared = sl.r_squared(&data).unwrap();

                        TestResult::from_bool(
                            (r_squared > 0. || relative_eq!(r_squared, 0., epsilon = 1e-4)) &&
                                (r_squared < 1. || relative_eq!(r_squared, 1., epsilon = 1e-4))
                        )
                    } else {
                        TestResult::discard()
                    }
                }

                fn residual_standard_error_is_non_negative(size: usize, start: usize) -> TestResult {
                    let size = size % 1000;
                    let start = start % 100;
                    if let Some(x) = crate::stats::test::vec::<$ty>(size, start) {
                        let y = crate::stats::test::vec::<$ty>(size, start).unwrap();
                        let data = Data::new(&x[start..], &y[start..]).unwrap();

                        let sl = StraightLine::fit(&data).unwrap();
                        let rse = sl.residual_standard_error(&data).unwrap();

                        TestResult::from_bool(rse >= 0. && rse.is_finite())
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod generic {
    test!(f32);
    test!(f64);
}

#[cfg(test)]
mod props {
    use approx::relative_eq;
    use quickcheck::{quickcheck, TestResult};

    use crate::stats::bivariate::regression::{f_statistic, StraightLine};
    use crate::stats::bivariate::Data;

    quickcheck! {
        fn recovers_exact_lines(size: usize, slope_tenths: i8, intercept_tenths: i8) -> TestResult {
            let size = 3 + size % 200;
            if slope_tenths == 0 {
                return TestResult::discard();
            }
            let (a, b) = (f64::from(slope_tenths) / 10., f64::from(intercept_tenths) / 10.);
            let (x, y) = crate::stats::test::line(size, a, b);
            let data = Data::new(&x, &y).unwrap();

            let sl = StraightLine::fit(&data).unwrap();
            let r_squared = sl.r_squared(&data).unwrap();
            let rse = sl.residual_standard_error(&data).unwrap();
            let f = f_statistic(r_squared, data.len()).unwrap();

            TestResult::from_bool(
                relative_eq!(sl.slope, a, epsilon = 1e-6) &&
                    relative_eq!(sl.intercept, b, epsilon = 1e-6) &&
                    relative_eq!(r_squared, 1., epsilon = 1e-6) &&
                    rse < 1e-9 &&
                    (f.is_infinite() || f > 1e6)
            )
        }

        fn order_invariant(size: usize, shift: usize) -> TestResult {
            if let Some(x) = crate::stats::test::vec::<f64>(size % 500, 0) {
                let y = crate::stats::test::vec::<f64>(x.len(), 0).unwrap();

                let mut pairs: Vec<(f64, f64)> = x.iter().cloned().zip(y.iter().cloned()).collect();
                let k = shift % pairs.len();
                pairs.rotate_left(k);
                pairs.reverse();
                let (px, py): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

                let data = Data::new(&x, &y).unwrap();
                let permuted = Data::new(&px, &py).unwrap();

                let sl = StraightLine::fit(&data).unwrap();
                let psl = StraightLine::fit(&permuted).unwrap();

                let close = |a: f64, b: f64| relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9);

                TestResult::from_bool(
                    close(sl.slope, psl.slope) &&
                        close(sl.intercept, psl.intercept) &&
                        close(sl.r_squared(&data).unwrap(), psl.r_squared(&permuted).unwrap()) &&
                        close(
                            sl.residual_standard_error(&data).unwrap(),
                            psl.residual_standard_error(&permuted).unwrap(),
                        )
                )
            } else {
                TestResult::discard()
            }
        }
    }
}
