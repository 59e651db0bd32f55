use crate::{memory::*, KMeansError};
use std::fmt;

/// A fixed-dimension vector of coordinates, carrying the index of the cluster it is assigned to.
///
/// The same type is used for input samples and for centroids. Coordinates are owned exclusively
/// by the point: constructing a point always copies (or takes over) the given storage, so no two
/// points ever share a buffer.
///
/// ## Fields
/// - **coordinates**: The point's coordinates, in axis order. Length is the point's dimension.
/// - **cluster**: Index of the centroid this point was assigned to, or `None` while unassigned.
///   Only the assignment step of a k-means run writes this field.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Primitive> {
    coordinates: Vec<T>,
    cluster: Option<usize>,
}
impl<T: Primitive> Point<T> {
    /// Create a new, unassigned point of the given **dimension**.
    ///
    /// When **values** is `None`, all coordinates are zero. Otherwise the values are copied into
    /// the point, and their length has to equal **dimension**.
    pub fn new(dimension: usize, values: Option<&[T]>) -> Result<Self, KMeansError> {
        let mut coordinates = try_with_capacity(dimension)?;
        match values {
            Some(values) if values.len() != dimension => {
                return Err(KMeansError::DimensionMismatch { expected: dimension, found: values.len() });
            }
            Some(values) => coordinates.extend_from_slice(values),
            None => coordinates.resize(dimension, T::zero()),
        }
        Ok(Self { coordinates, cluster: None })
    }

    /// Take over the given coordinates as a new, unassigned point.
    pub fn from_vec(coordinates: Vec<T>) -> Self {
        Self { coordinates, cluster: None }
    }

    pub fn dimension(&self) -> usize { self.coordinates.len() }
    pub fn coordinates(&self) -> &[T] { &self.coordinates }
    pub fn into_coordinates(self) -> Vec<T> { self.coordinates }

    /// Index of the centroid this point is assigned to, `None` if it was never assigned.
    pub fn cluster(&self) -> Option<usize> { self.cluster }

    pub(crate) fn set_cluster(&mut self, cluster: Option<usize>) {
        self.cluster = cluster;
    }

    pub(crate) fn with_cluster(mut self, cluster: usize) -> Self {
        self.cluster = Some(cluster);
        self
    }

    #[inline(always)]
    fn check_dimension(&self, other: &Self) -> Result<(), KMeansError> {
        if self.dimension() != other.dimension() {
            return Err(KMeansError::DimensionMismatch { expected: self.dimension(), found: other.dimension() });
        }
        Ok(())
    }

    /// Element-wise sum of both points, as a new unassigned point.
    pub fn add(&self, other: &Self) -> Result<Self, KMeansError> {
        self.check_dimension(other)?;
        Ok(Self::from_vec(self.coordinates.iter().zip(other.coordinates.iter())
            .map(|(&a, &b)| a + b)
            .collect()))
    }

    /// Element-wise difference `self - other`, as a new unassigned point.
    pub fn subtract(&self, other: &Self) -> Result<Self, KMeansError> {
        self.check_dimension(other)?;
        Ok(Self::from_vec(self.coordinates.iter().zip(other.coordinates.iter())
            .map(|(&a, &b)| a - b)
            .collect()))
    }

    /// Multiply every coordinate with **scalar**, as a new unassigned point.
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_vec(self.coordinates.iter().map(|&v| v * scalar).collect())
    }

    /// Euclidean distance between both points.
    pub fn distance(&self, other: &Self) -> Result<T, KMeansError> {
        self.squared_distance(other).map(|d| d.sqrt())
    }

    /// Squared euclidean distance between both points.
    pub fn squared_distance(&self, other: &Self) -> Result<T, KMeansError> {
        self.check_dimension(other)?;
        Ok(self.coordinates.iter().zip(other.coordinates.iter())
            .map(|(&a, &b)| a - b)      // <self> - <other>
            .map(|v| v * v)             // <components> ^2
            .sum())
    }

    /// In-place variant of [`Point::add`], used for the accumulators of the update step.
    pub(crate) fn accumulate(&mut self, other: &Self) -> Result<(), KMeansError> {
        self.check_dimension(other)?;
        self.coordinates.iter_mut().zip(other.coordinates.iter())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }
}

impl<T: Primitive> From<Vec<T>> for Point<T> {
    fn from(coordinates: Vec<T>) -> Self { Self::from_vec(coordinates) }
}

/// Formats as `(x, y, ...)`. A precision given to the formatter (`{:.4}`) applies to each coordinate.
impl<T: Primitive> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        write!(f, ")")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_zeroed_and_copied() {
        let p = Point::<f64>::new(3, None).unwrap();
        assert_eq!(p.coordinates(), &[0.0, 0.0, 0.0]);
        assert_eq!(p.cluster(), None);

        let mut values = vec![1.0, 2.0];
        let p = Point::new(2, Some(values.as_slice())).unwrap();
        values[0] = 42.0;
        assert_eq!(p.coordinates(), &[1.0, 2.0]);

        let res = Point::new(3, Some(&[1.0f64, 2.0][..]));
        assert!(matches!(res, Err(KMeansError::DimensionMismatch { expected: 3, found: 2 })));
    }

    #[test]
    fn arithmetic() {
        let a = Point::from_vec(vec![1.0f64, -2.0, 3.5]);
        let b = Point::from_vec(vec![0.5f64, 2.0, -1.5]);
        assert_eq!(a.add(&b).unwrap().coordinates(), &[1.5, 0.0, 2.0]);
        assert_eq!(a.subtract(&b).unwrap().coordinates(), &[0.5, -4.0, 5.0]);
        assert_eq!(a.scale(2.0).coordinates(), &[2.0, -4.0, 7.0]);
        // inputs stay untouched
        assert_eq!(a.coordinates(), &[1.0, -2.0, 3.5]);
        assert_eq!(b.coordinates(), &[0.5, 2.0, -1.5]);
    }

    #[test]
    fn arithmetic_drops_cluster_tag() {
        let a = Point::from_vec(vec![1.0f64]).with_cluster(3);
        assert_eq!(a.scale(1.0).cluster(), None);
        assert_eq!(a.add(&a).unwrap().cluster(), None);
    }

    #[test]
    fn dimension_mismatch() {
        let a = Point::from_vec(vec![1.0f64, 2.0]);
        let b = Point::from_vec(vec![1.0f64, 2.0, 3.0]);
        assert!(matches!(a.add(&b), Err(KMeansError::DimensionMismatch { expected: 2, found: 3 })));
        assert!(matches!(b.distance(&a), Err(KMeansError::DimensionMismatch { expected: 3, found: 2 })));
        assert!(matches!(a.subtract(&b), Err(KMeansError::DimensionMismatch { .. })));

        let mut acc = Point::<f64>::new(3, None).unwrap();
        assert!(acc.accumulate(&a).is_err());
        assert!(acc.accumulate(&b).is_ok());
        assert_eq!(acc.coordinates(), b.coordinates());
    }

    #[test] fn distance_properties_f32() { distance_properties::<f32>(); }
    #[test] fn distance_properties_f64() { distance_properties::<f64>(); }

    fn distance_properties<T: Primitive>() {
        let v = |x: &[f64]| Point::from_vec(x.iter().map(|&i| T::from(i).unwrap()).collect::<Vec<T>>());
        let points = [v(&[0.0, 0.0]), v(&[3.0, 4.0]), v(&[-1.5, 2.25]), v(&[1e3, -7.0])];
        for a in points.iter() {
            assert_eq!(a.distance(a).unwrap(), T::zero());
            for b in points.iter() {
                let d = a.distance(b).unwrap();
                assert!(d >= T::zero());
                assert_eq!(d, b.distance(a).unwrap());
            }
        }
        assert_eq!(points[0].distance(&points[1]).unwrap(), T::from(5.0).unwrap());
        assert_eq!(points[0].squared_distance(&points[1]).unwrap(), T::from(25.0).unwrap());
    }

    #[test]
    fn display() {
        let p = Point::from_vec(vec![1.0f64, 0.5, -2.0]);
        assert_eq!(format!("{}", p), "(1, 0.5, -2)");
        assert_eq!(format!("{:.4}", p), "(1.0000, 0.5000, -2.0000)");
    }
}
