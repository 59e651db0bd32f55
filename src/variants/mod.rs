mod lloyd;

pub(crate) use lloyd::Lloyd;
pub use lloyd::{update_centroids, CentroidUpdate};
