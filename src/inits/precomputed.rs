use crate::{memory::*, KMeans, KMeansConfig, KMeansError, KMeansState, Point};

#[inline(always)]
pub fn calculate<T: Primitive>(
    kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, computed: Vec<Point<T>>,
) -> Result<(), KMeansError> {
    if computed.len() != state.k {
        return Err(KMeansError::InvalidCentroidCount { expected: state.k, found: computed.len() });
    }
    if let Some(c) = computed.iter().find(|c| c.dimension() != kmean.sample_dims) {
        return Err(KMeansError::DimensionMismatch { expected: kmean.sample_dims, found: c.dimension() });
    }
    state.centroids = computed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f32]) -> Vec<Point<f32>> {
        values.iter().map(|&v| Point::from_vec(vec![v])).collect()
    }

    #[test]
    fn train_with_precomputed_centroids() {
        let kmean = KMeans::new(points(&[0.0, 1.0, 10.0, 11.0, 20.0, 21.0])).unwrap();
        let centroids = points(&[0.0, 10.0, 20.0]);
        let result = kmean.kmeans_lloyd(3, 200, KMeans::init_precomputed(centroids), &KMeansConfig::default()).unwrap();

        assert!(result.converged);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.centroids[0].coordinates(), &[0.5]);
        assert_eq!(result.centroids[1].coordinates(), &[10.5]);
        assert_eq!(result.centroids[2].coordinates(), &[20.5]);
    }

    #[test]
    fn wrong_amount_of_centroids() {
        let kmean = KMeans::new(points(&[0.0, 1.0, 10.0, 11.0])).unwrap();
        let res = kmean.kmeans_lloyd(2, 200, KMeans::init_precomputed(points(&[0.0, 1.0, 2.0])), &KMeansConfig::default());
        assert!(matches!(res, Err(KMeansError::InvalidCentroidCount { expected: 2, found: 3 })));
    }

    #[test]
    fn wrong_centroid_dimension() {
        let kmean = KMeans::new(points(&[0.0, 1.0, 10.0, 11.0])).unwrap();
        let centroids = vec![Point::from_vec(vec![0.0f32]), Point::from_vec(vec![1.0, 1.0])];
        let res = kmean.kmeans_lloyd(2, 200, KMeans::init_precomputed(centroids), &KMeansConfig::default());
        assert!(matches!(res, Err(KMeansError::DimensionMismatch { expected: 1, found: 2 })));
    }
}
