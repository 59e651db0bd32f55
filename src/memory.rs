use crate::KMeansError;
use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    num::ParseFloatError,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static
                + FromStr<Err = ParseFloatError>
                + for<'a> AddAssign<&'a Self> + for<'a> Sub<&'a Self> {}
impl Primitive for f32 {}
impl Primitive for f64 {}


/// Convert an element count into the primitive type (rounded for counts beyond the mantissa).
#[inline(always)]
pub(crate) fn from_count<T: Primitive>(count: usize) -> T {
    T::from(count).unwrap_or_else(T::max_value)
}

/// Allocate an empty vector with room for exactly `capacity` elements, reporting allocation
/// failure as [`KMeansError::Allocation`] instead of aborting the process.
pub(crate) fn try_with_capacity<V>(capacity: usize) -> Result<Vec<V>, KMeansError> {
    let mut res = Vec::new();
    res.try_reserve_exact(capacity)?;
    Ok(res)
}

/// Fallible counterpart to `vec![value; len]`.
pub(crate) fn try_filled<V: Clone>(value: V, len: usize) -> Result<Vec<V>, KMeansError> {
    let mut res = try_with_capacity(len)?;
    res.resize(len, value);
    Ok(res)
}
