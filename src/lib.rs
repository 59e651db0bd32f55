//! # kmeans - API documentation
//!
//! Kmeans is a small rust library for the calculation of k-means-clustering, using Lloyd's algorithm.
//!
//! ## Design target
//! Its main target is a plain, predictable implementation: every run is deterministic for a given
//! initialization, every failure (inconsistent dimensions, invalid parameters, exhausted memory) is
//! reported as a [`KMeansError`] instead of aborting the process.
//! Samples are given as [`Point`]s (or as a raw row-major vector, see [`KMeans::from_rows`]), instead
//! of any high-level arithmetics / matrix crate such as nalgebra or ndarray.
//!
//! ## Supported centroid initializations
//! The outcome of each K-Means run depends on the initialization of its clusters. There exist
//! multiple algorithms for this initialization, some of which are based on at least some
//! degree of randomness. For a list of implemented initialization methods, see [`KMeans`].
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! Here is an example showing the Lloyd k-Means implementation, using K-Mean++ initialization:
//!
//! ```rust
//! use kmeans::*;
//!
//! fn main() {
//!     let (sample_cnt, sample_dims, k, max_iter) = (2000, 20, 4, 100);
//!
//!     // Generate some random data
//!     let mut samples = vec![0.0f64;sample_cnt * sample_dims];
//!     samples.iter_mut().for_each(|v| *v = rand::random());
//!
//!     // Calculate kmeans, using kmean++ as initialization-method
//!     let kmean = KMeans::from_rows(&samples, sample_cnt, sample_dims).unwrap();
//!     let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_kmeanplusplus, &KMeansConfig::default()).unwrap();
//!
//!     println!("Centroids: {:?}", result.centroids);
//!     println!("Cluster-Assignments: {:?}", result.assignments().collect::<Vec<_>>());
//!     println!("Error: {}", result.distsum);
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans::*;
//!
//! fn main() {
//!     let (sample_cnt, sample_dims, k, max_iter) = (2000, 20, 4, 250);
//!
//!     // Generate some random data
//!     let mut samples = vec![0.0f64;sample_cnt * sample_dims];
//!     samples.iter_mut().for_each(|v| *v = rand::random());
//!
//!     let conf = KMeansConfig::build()
//!         .init_done(&|_| println!("Initialization completed."))
//!         .iteration_done(&|s, nr, new_distsum|
//!             println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
//!                 nr, s.distsum, new_distsum, s.distsum - new_distsum))
//!         .build();
//!
//!     // Calculate kmeans, using random samples as initialization-method
//!     let kmean = KMeans::from_rows(&samples, sample_cnt, sample_dims).unwrap();
//!     let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf).unwrap();
//!
//!     println!("Centroids: {:?}", result.centroids);
//!     println!("Error: {}", result.distsum);
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. This struct is generic over the underlying primitive
//! type, that should be used for the calculations. To use KMeans, an instance of this struct is created, taking
//! over the sample data into its ownership.
//!
//! **Note**: The input-data has to use the same primitive as the required output-data (distances).
//!
//! Calling [`KMeans::kmeans_lloyd`] does not mutate the [`KMeans`] instance, so multiple runs can be done
//! on the same data. Internally, a new instance of [`KMeansState`] is used to store the state (and finally
//! the result) of a K-Means calculation.
//!
//! The building blocks of a run are exported as well: [`assign`] (assignment step), [`update_centroids`]
//! (update step), [`converged`] (exact convergence test) and [`initialize_centroids`] (first-k seeding).
//! [`Parameters`] validates a run's parameters up front, [`loader`] reads points from delimited text.

#[macro_use] mod helpers;
mod memory;
mod error;
mod point;
mod api;
mod convergence;
mod params;
pub mod loader;
mod variants;
mod inits;

pub use api::{assign, EmptyClusterPolicy, InitDoneCallbackFn, IterationDoneCallbackFn, KMeans, KMeansConfig, KMeansConfigBuilder, KMeansState};
pub use convergence::{converged, ConvergenceStrategy};
pub use error::KMeansError;
pub use inits::initialize_centroids;
pub use memory::Primitive;
pub use params::{Parameters, DEFAULT_MAX_ITER};
pub use point::Point;
pub use variants::{update_centroids, CentroidUpdate};
