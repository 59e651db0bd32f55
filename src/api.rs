use crate::{memory::*, ConvergenceStrategy, KMeansError, Point};
use rand::prelude::*;
use std::cell::RefCell;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// What happens to the centroid of a cluster that did not get any point assigned during an iteration.
/// Empty clusters are never re-seeded or removed, the amount of clusters stays **k** for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// The empty cluster keeps the centroid it had in the previous iteration.
    #[default]
    RetainPrevious,
    /// The empty cluster's centroid is the zero vector (the empty sum the update step starts from).
    Origin,
}

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the iteration's assignment & update step
    /// - **iteration_id**: Number of the current iteration (starting at 1)
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use (only used by randomized initialization methods)
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The convergence-strategy to use for the running calculation
    pub(crate) convergence: ConvergenceStrategy<T>,
    /// How to treat clusters without any assigned point
    pub(crate) empty_clusters: EmptyClusterPolicy,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            convergence: ConvergenceStrategy::Exact,
            empty_clusters: EmptyClusterPolicy::RetainPrevious,
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("convergence", &self.convergence)
            .field("empty_clusters", &self.empty_clusters)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>,
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used by randomized initialization methods.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the convergence-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`ConvergenceStrategy`].
    /// ## Default
    /// [`ConvergenceStrategy::Exact`]
    pub fn convergence(mut self, convergence: ConvergenceStrategy<T>) -> Self {
        self.config.convergence = convergence; self
    }
    /// Set how clusters without any assigned point are treated.
    /// ## Default
    /// [`EmptyClusterPolicy::RetainPrevious`]
    pub fn empty_clusters(mut self, empty_clusters: EmptyClusterPolicy) -> Self {
        self.config.empty_clusters = empty_clusters; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, so one instance can be
/// used for multiple runs without having to re-read the input-data.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **distsum**: The total sum of squared distances from all points to their respective centroids
/// - **points**: The run's copy of the input points, tagged with the index of their centroid
/// - **centroids**: Calculated cluster centers, always **k** of them
/// - **centroid_frequency**: Amount of points in each cluster
/// - **centroid_distances**: Each point's squared distance to its centroid
/// - **iterations**: Amount of (assignment + update) iterations that were run, including the one that detected convergence
/// - **converged**: Whether the run ended because the centroids converged (`false`: iteration limit reached)
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub points: Vec<Point<T>>,
    pub centroids: Vec<Point<T>>,
    pub centroid_frequency: Vec<usize>,
    pub centroid_distances: Vec<T>,
    pub iterations: usize,
    pub converged: bool,

    pub(crate) sample_dims: usize,
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(kmean: &KMeans<T>, k: usize) -> Result<Self, KMeansError> {
        let mut points = try_with_capacity(kmean.sample_cnt)?;
        points.extend(kmean.samples.iter().map(|s| {
            let mut p = s.clone();
            p.set_cluster(None);
            p
        }));
        Ok(Self {
            k,
            distsum: T::infinity(),
            points,
            centroids: try_with_capacity(k)?,
            centroid_frequency: try_filled(0usize, k)?,
            centroid_distances: try_filled(T::infinity(), kmean.sample_cnt)?,
            iterations: 0,
            converged: false,
            sample_dims: kmean.sample_dims,
        })
    }

    /// The cluster index of each point, in input order (`None` for points that were never assigned).
    pub fn assignments(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.points.iter().map(|p| p.cluster())
    }

    /// Check the centroids written by an initialization method and tag each with its index.
    pub(crate) fn adopt_initial_centroids(&mut self) -> Result<(), KMeansError> {
        if self.centroids.len() != self.k {
            return Err(KMeansError::InvalidCentroidCount { expected: self.k, found: self.centroids.len() });
        }
        if let Some(c) = self.centroids.iter().find(|c| c.dimension() != self.sample_dims) {
            return Err(KMeansError::DimensionMismatch { expected: self.sample_dims, found: c.dimension() });
        }
        self.centroids.iter_mut().enumerate().for_each(|(idx, c)| c.set_cluster(Some(idx)));
        Ok(())
    }

    /// Recalculate each point's squared distance to its currently assigned centroid, as well as the distsum.
    pub(crate) fn update_centroid_distances(&mut self) -> Result<(), KMeansError> {
        for (idx, (p, dist)) in self.points.iter().zip(self.centroid_distances.iter_mut()).enumerate() {
            let centroid = p.cluster()
                .and_then(|c| self.centroids.get(c))
                .ok_or(KMeansError::Unassigned { index: idx })?;
            *dist = p.squared_distance(centroid)?;
        }
        self.distsum = self.centroid_distances.iter().cloned().sum();
        Ok(())
    }
}


/// Assignment step: tag every point with the index of its nearest centroid (euclidean distance).
///
/// On ties, the centroid with the lowest index wins. This is the only operation that modifies
/// the cluster tag of a point.
///
/// ## Returns
/// Each point's distance to its nearest centroid, in input order.
pub fn assign<T: Primitive>(points: &mut [Point<T>], centroids: &[Point<T>]) -> Result<Vec<T>, KMeansError> {
    let mut min_distances = try_with_capacity(points.len())?;
    for p in points.iter_mut() {
        let mut best: Option<(usize, T)> = None;
        for (idx, c) in centroids.iter().enumerate() {
            let dist = p.distance(c)?;
            match best {
                Some((_, best_dist)) if !(dist < best_dist) => {}
                _ => best = Some((idx, dist)),
            }
        }
        p.set_cluster(best.map(|(idx, _)| idx));
        min_distances.push(best.map(|(_, dist)| dist).unwrap_or_else(T::infinity));
    }
    Ok(min_distances)
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the points you want to operate on. The primitive type
/// of the passed points will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) [`KMeans::kmeans_lloyd`]
///
/// ## Supported initialization methods
/// - First-k [`KMeans::init_first_k`]
/// - Random-Sample [`KMeans::init_random_sample`]
/// - K-Mean++ [`KMeans::init_kmeanplusplus`]
/// - Precomputed [`KMeans::init_precomputed`]
#[derive(Clone, Debug)]
pub struct KMeans<T: Primitive> {
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
    pub(crate) samples: Vec<Point<T>>,
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The points to cluster. All of them have to share the same (non-zero) dimension.
    pub fn new(samples: Vec<Point<T>>) -> Result<Self, KMeansError> {
        let sample_dims = samples.first().map(|s| s.dimension()).ok_or(KMeansError::InvalidPointCount(0))?;
        if sample_dims == 0 {
            return Err(KMeansError::InvalidDimension(0));
        }
        if let Some(s) = samples.iter().find(|s| s.dimension() != sample_dims) {
            return Err(KMeansError::DimensionMismatch { expected: sample_dims, found: s.dimension() });
        }
        Ok(Self { sample_cnt: samples.len(), sample_dims, samples })
    }

    /// Create a new instance of the [`KMeans`] structure from a flat sample buffer.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    pub fn from_rows(samples: &[T], sample_cnt: usize, sample_dims: usize) -> Result<Self, KMeansError> {
        let expected = sample_cnt.checked_mul(sample_dims)
            .ok_or(KMeansError::InvalidPointCount(sample_cnt))?;
        if samples.len() != expected {
            return Err(KMeansError::DimensionMismatch { expected, found: samples.len() });
        }
        if sample_dims == 0 {
            return Err(KMeansError::InvalidDimension(0));
        }
        let mut points = try_with_capacity(sample_cnt)?;
        for row in samples.chunks_exact(sample_dims) {
            points.push(Point::new(sample_dims, Some(row))?);
        }
        Self::new(points)
    }

    pub fn samples(&self) -> &[Point<T>] { &self.samples }
    pub fn sample_cnt(&self) -> usize { self.sample_cnt }
    pub fn sample_dims(&self) -> usize { self.sample_dims }

    /// Normal K-Means algorithm implementation (Lloyd).
    ///
    /// Alternates the assignment step (every point is tagged with its nearest centroid) and the
    /// update step (every centroid becomes the mean of its points), until the configured
    /// [`ConvergenceStrategy`] reports convergence, or **max_iter** iterations were run.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for (`1 < k < sample_cnt`)
    /// - **max_iter**: Limit the maximum amount of iterations (`1 < max_iter < 1000`)
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Example
    /// ```rust
    /// use kmeans::*;
    ///
    /// let samples = vec![0.0f64, 1.0, 10.0, 11.0];
    /// let kmean = KMeans::from_rows(&samples, 4, 1).unwrap();
    /// let result = kmean.kmeans_lloyd(2, 100, KMeans::init_first_k, &KMeansConfig::default()).unwrap();
    ///
    /// assert_eq!(result.centroids[0].coordinates(), &[0.5]);
    /// assert_eq!(result.centroids[1].coordinates(), &[10.5]);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// First-k initialization method
    ///
    /// ## Description
    /// Uses copies of the first **k** samples as initial centroids. Deterministic and reproducible,
    /// but the first samples are not necessarily representative of the data set.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_first_k<'a>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) -> Result<(), KMeansError> {
        crate::inits::firstk::calculate(kmean, state, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method randomly selects k distinct samples as initial centroids.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample<'a>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) -> Result<(), KMeansError> {
        crate::inits::randomsample::calculate(kmean, state, config)
    }

    /// K-Means++ initialization method
    ///
    /// ## Description
    /// This initialization method starts by selecting one sample as first centroid.
    /// Proceeding from there, the method iteratively selects one new centroid (per iteration) by calculating
    /// each sample's probability of "being a centroid". This probability is bigger, the farther away a sample
    /// is from its nearest already chosen centroid (weighted by squared distance).
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_kmeanplusplus<'a>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) -> Result<(), KMeansError> {
        crate::inits::kmeanplusplus::calculate(kmean, state, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given centroids as initial centroids. Exactly **k** centroids of the samples'
    /// dimension have to be given, otherwise the run fails.
    pub fn init_precomputed(centroids: Vec<Point<T>>) -> impl FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        move |kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>| crate::inits::precomputed::calculate(kmean, state, config, centroids)
    }
}
