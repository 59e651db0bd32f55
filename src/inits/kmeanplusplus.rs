use crate::{memory::*, KMeans, KMeansConfig, KMeansError, KMeansState};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use std::ops::DerefMut;

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
    if state.k > kmean.sample_cnt {
        return Err(KMeansError::InvalidClusterCount { k: state.k, n: kmean.sample_cnt });
    }
    let mut rnd = config.rnd.borrow_mut();
    let mut centroids = try_with_capacity(state.k)?;

    // Randomly select first centroid
    let first_idx = rnd.gen_range(0..kmean.sample_cnt);
    centroids.push(kmean.samples[first_idx].clone());

    // Each sample's squared distance to its nearest, already chosen centroid
    let mut min_distances = try_filled(T::infinity(), kmean.sample_cnt)?;
    for _ in 1..state.k {
        // For each following centroid...
        let newest = &centroids[centroids.len() - 1];
        for (s, dist) in kmean.samples.iter().zip(min_distances.iter_mut()) {
            let d = s.squared_distance(newest)?;
            if d < *dist {
                *dist = d;
            }
        }

        // Draw the next centroid, with probabilities proportional to the squared distances.
        // When all samples coincide with a centroid, there is nothing to weight by: draw uniformly.
        let sampled_id = match WeightedIndex::new(min_distances.iter().cloned()) {
            Ok(centroid_index) => centroid_index.sample(rnd.deref_mut()),
            Err(err) => {
                log::debug!("k-means++ falls back to uniform sampling: {}", err);
                rnd.gen_range(0..kmean.sample_cnt)
            }
        };
        centroids.push(kmean.samples[sampled_id].clone());
    }
    state.centroids = centroids;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn spreads_over_separated_groups() {
        // three tight groups far away from each other: k-means++ practically always seeds one centroid per group
        let samples: Vec<_> = (0..30).map(|i| {
            let group = (i % 3) as f64 * 1000.0;
            Point::from_vec(vec![group + (i / 3) as f64 * 0.01, group])
        }).collect();
        let kmean = KMeans::new(samples).unwrap();
        let mut state = KMeansState::new(&kmean, 3).unwrap();
        let conf = KMeansConfig::build().random_generator(rand::rngs::StdRng::seed_from_u64(1337)).build();
        calculate(&kmean, &mut state, &conf).unwrap();

        let mut groups: Vec<_> = state.centroids.iter().map(|c| (c.coordinates()[1] / 1000.0) as usize).collect();
        groups.sort_unstable();
        assert_eq!(groups, vec![0, 1, 2]);
    }

    #[test]
    fn identical_samples() {
        let samples = vec![Point::from_vec(vec![5.0f32]); 4];
        let kmean = KMeans::new(samples).unwrap();
        let conf = KMeansConfig::build().random_generator(rand::rngs::StdRng::seed_from_u64(7)).build();
        let res = kmean.kmeans_lloyd(2, 10, KMeans::init_kmeanplusplus, &conf).unwrap();
        assert!(res.converged);
        assert_eq!(res.centroids[0].coordinates(), &[5.0]);
        assert_eq!(res.centroids[1].coordinates(), &[5.0]);
        assert_eq!(res.centroid_frequency, vec![4, 0]);
    }

    #[test] fn iris_kmeanplusplus_f64() { iris::<f64>(); }
    #[test] fn iris_kmeanplusplus_f32() { iris::<f32>(); }

    fn iris<T: Primitive>() {
        use crate::helpers::testing::*;

        let samples: Vec<T> = IRIS_PETALS.iter().map(|&v| T::from(v).unwrap()).collect();
        let kmean = KMeans::from_rows(&samples, 150, 2).unwrap();
        let conf = KMeansConfig::build().random_generator(rand::rngs::StdRng::seed_from_u64(1)).build();
        let res = kmean.kmeans_lloyd(3, 999, KMeans::init_kmeanplusplus, &conf).unwrap();

        assert!(res.converged);
        assert_assignments_optimal(&res);
        assert_centroids_are_means(&res, T::from(1e-4).unwrap());
        // setosa (the first 50 samples) is separated from the other species by a wide margin
        let setosa = res.points[0].cluster();
        assert!(res.points[..50].iter().all(|p| p.cluster() == setosa));
        assert!(res.points[50..].iter().all(|p| p.cluster() != setosa));
    }
}
