use crate::{api::assign, memory::*, EmptyClusterPolicy, KMeans, KMeansConfig, KMeansError, KMeansState, Parameters, Point};

/// Outcome of one update step.
///
/// ## Fields
/// - **centroids**: The new centroids, each tagged with its own index. Clusters without points are the zero vector.
/// - **centroid_frequency**: Amount of points that contributed to each centroid
#[derive(Clone, Debug, PartialEq)]
pub struct CentroidUpdate<T: Primitive> {
    pub centroids: Vec<Point<T>>,
    pub centroid_frequency: Vec<usize>,
}

/// Update step: compute **k** new centroids of the given **dimension** as the mean of all points
/// tagged with the centroid's index.
///
/// The points are only read. A cluster without any point results in the zero vector. Points that
/// were never assigned (or carry a tag outside of `0..k`) are reported as [`KMeansError::Unassigned`].
pub fn update_centroids<T: Primitive>(points: &[Point<T>], k: usize, dimension: usize) -> Result<CentroidUpdate<T>, KMeansError> {
    // Sum all points in a cluster together into sums, while counting them
    let mut sums = try_with_capacity(k)?;
    for _ in 0..k {
        sums.push(Point::new(dimension, None)?);
    }
    let mut centroid_frequency = try_filled(0usize, k)?;
    for (idx, p) in points.iter().enumerate() {
        let centroid_id = p.cluster()
            .filter(|&c| c < k)
            .ok_or(KMeansError::Unassigned { index: idx })?;
        sums[centroid_id].accumulate(p)?;
        centroid_frequency[centroid_id] += 1;
    }

    let centroids = sums.into_iter()
        .zip(centroid_frequency.iter().cloned())
        .enumerate()
        .map(|(idx, (sum, cfreq))| match cfreq {
            0 => sum.with_cluster(idx),
            _ => sum.scale(T::one() / from_count(cfreq)).with_cluster(idx),
        })
        .collect();
    Ok(CentroidUpdate { centroids, centroid_frequency })
}


pub(crate) struct Lloyd<T: Primitive> {
    _p: std::marker::PhantomData<T>,
}
impl<T: Primitive> Lloyd<T> {
    /// Apply the empty-cluster policy to a freshly computed centroid collection.
    /// Returns the amount of empty clusters.
    fn handle_empty_clusters(update: &mut CentroidUpdate<T>, previous: &[Point<T>], policy: EmptyClusterPolicy) -> usize {
        let mut empty_cnt = 0;
        update.centroids.iter_mut()
            .zip(update.centroid_frequency.iter().cloned())
            .zip(previous.iter())
            .filter(|((_, cfreq), _)| *cfreq == 0)
            .for_each(|((c, _), prev)| {
                empty_cnt += 1;
                if policy == EmptyClusterPolicy::RetainPrevious {
                    *c = prev.clone();
                }
            });
        empty_cnt
    }

    #[inline(always)] pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
        Parameters::new(k, data.sample_cnt, data.sample_dims, Some(max_iter)).validate()?;

        let mut state = KMeansState::new(data, k)?;

        // Initialize clusters and notify subscriber
        init(data, &mut state, config)?;
        state.adopt_initial_centroids()?;
        (config.init_done)(&state);
        log::info!("initialized {} centroids for {} points of dimension {}", k, data.sample_cnt, data.sample_dims);

        let mut convergence = config.convergence.create_logic();
        for i in 1..=max_iter {
            let min_distances = assign(&mut state.points, &state.centroids)?;
            let new_distsum: T = min_distances.iter().map(|&d| d * d).sum();
            let mut update = update_centroids(&state.points, k, data.sample_dims)?;
            let empty_cnt = Self::handle_empty_clusters(&mut update, &state.centroids, config.empty_clusters);
            if empty_cnt > 0 {
                log::warn!("iteration {}: {} of {} clusters are empty ({:?})", i, empty_cnt, k, config.empty_clusters);
            }
            // The previous centroid collection is dropped once compared against
            let converged = convergence.converged(&state.centroids, &update.centroids);
            state.centroids = update.centroids;
            state.centroid_frequency = update.centroid_frequency;
            state.iterations = i;

            // Notify subscriber about finished iteration (state.distsum still holds the previous distsum)
            (config.iteration_done)(&state, i, new_distsum);
            log::debug!("iteration {} - distsum: {:e} -> {:e}", i, state.distsum, new_distsum);

            state.distsum = new_distsum;
            if converged {
                state.converged = true;
                break;
            }
        }

        if state.converged {
            log::info!("converged after {} iterations", state.iterations);
        } else {
            log::info!("stopped after reaching the iteration limit ({}) without convergence", max_iter);
        }
        state.update_centroid_distances()?;
        Ok(state)
    }
}
