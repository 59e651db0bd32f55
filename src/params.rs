use crate::KMeansError;

/// Iteration limit used when none is given.
pub const DEFAULT_MAX_ITER: usize = 200;

/// The parameters of a k-means run, as given by the caller.
///
/// ## Fields
/// - **k**: Amount of clusters to search for (`1 < k < n`)
/// - **n**: Amount of points (`n >= 1`)
/// - **d**: Dimension of every point (`d >= 1`)
/// - **max_iter**: Iteration limit (`1 < max_iter < 1000`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub k: usize,
    pub n: usize,
    pub d: usize,
    pub max_iter: usize,
}
impl Parameters {
    /// Build parameters, using [`DEFAULT_MAX_ITER`] when **max_iter** is `None`.
    pub fn new(k: usize, n: usize, d: usize, max_iter: Option<usize>) -> Self {
        Self { k, n, d, max_iter: max_iter.unwrap_or(DEFAULT_MAX_ITER) }
    }

    /// Check all parameters, in the order clusters, points, dimension, iterations.
    /// The first violated constraint is reported.
    pub fn validate(&self) -> Result<(), KMeansError> {
        if !(1 < self.k && self.k < self.n) {
            return Err(KMeansError::InvalidClusterCount { k: self.k, n: self.n });
        }
        if self.n < 1 {
            return Err(KMeansError::InvalidPointCount(self.n));
        }
        if self.d < 1 {
            return Err(KMeansError::InvalidDimension(self.d));
        }
        if !(1 < self.max_iter && self.max_iter < 1000) {
            return Err(KMeansError::InvalidMaxIterations(self.max_iter));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        assert!(Parameters::new(3, 800, 3, Some(600)).validate().is_ok());
        assert!(Parameters::new(2, 3, 1, Some(2)).validate().is_ok());
        assert!(Parameters::new(2, 3, 1, Some(999)).validate().is_ok());
    }

    #[test]
    fn default_max_iter() {
        let params = Parameters::new(7, 430, 11, None);
        assert_eq!(params.max_iter, 200);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn invalid_cluster_count() {
        for (k, n) in [(1, 10), (0, 10), (10, 10), (11, 10)] {
            assert!(matches!(Parameters::new(k, n, 2, None).validate(),
                Err(KMeansError::InvalidClusterCount { .. })));
        }
    }

    #[test]
    fn invalid_dimension() {
        assert!(matches!(Parameters::new(2, 10, 0, None).validate(), Err(KMeansError::InvalidDimension(0))));
    }

    #[test]
    fn invalid_max_iter() {
        for max_iter in [0, 1, 1000, 5000] {
            assert!(matches!(Parameters::new(2, 10, 2, Some(max_iter)).validate(),
                Err(KMeansError::InvalidMaxIterations(_))));
        }
    }

    #[test]
    fn clusters_are_checked_first() {
        // n == 0 violates both the cluster and the point constraint
        assert!(matches!(Parameters::new(2, 0, 0, Some(0)).validate(),
            Err(KMeansError::InvalidClusterCount { k: 2, n: 0 })));
    }
}
