pub(crate) mod firstk;
pub(crate) mod kmeanplusplus;
pub(crate) mod precomputed;
pub(crate) mod randomsample;

pub use firstk::initialize_centroids;
