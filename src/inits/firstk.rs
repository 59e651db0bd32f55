use crate::{memory::*, KMeans, KMeansConfig, KMeansError, KMeansState, Point};

/// Deep copies of the first **k** points, each tagged with its own index (`2 <= k <= points.len()`).
pub fn initialize_centroids<T: Primitive>(points: &[Point<T>], k: usize) -> Result<Vec<Point<T>>, KMeansError> {
    if k < 2 || k > points.len() {
        return Err(KMeansError::InvalidClusterCount { k, n: points.len() });
    }
    let mut centroids = try_with_capacity(k)?;
    for (idx, p) in points.iter().take(k).enumerate() {
        centroids.push(Point::new(p.dimension(), Some(p.coordinates()))?.with_cluster(idx));
    }
    Ok(centroids)
}

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
    state.centroids = initialize_centroids(&kmean.samples, state.k)?;
    Ok(())
}
