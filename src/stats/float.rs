//! Float trait

use cast::From;
use num_traits::float;

/// The floating point types the statistics engine is generic over.
///
/// Extends `num_traits::float::Float` with lossless casting from `usize` (sample sizes) and `f32`
/// (constants) so the formulas can be written once for both `f32` and `f64`.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
