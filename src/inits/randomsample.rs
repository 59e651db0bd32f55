use crate::{memory::*, KMeans, KMeansConfig, KMeansError, KMeansState};
use rand::prelude::*;
use std::ops::DerefMut;

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
    if state.k > kmean.sample_cnt {
        return Err(KMeansError::InvalidClusterCount { k: state.k, n: kmean.sample_cnt });
    }
    let mut centroids = try_with_capacity(state.k)?;
    // Copy randomly chosen samples into the centroids
    centroids.extend(kmean.samples
        .choose_multiple(config.rnd.borrow_mut().deref_mut(), state.k)
        .cloned());
    state.centroids = centroids;
    Ok(())
}
