use kmeans::*;

fn main() -> Result<(), KMeansError> {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 20, 4, 500);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

    let conf = KMeansConfig::build()
        .init_done(&|_| println!("Initialization completed."))
        .iteration_done(&|s, nr, new_distsum|
            println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
                nr, s.distsum, new_distsum, s.distsum - new_distsum))
        .convergence(ConvergenceStrategy::Tolerance { epsilon: 1e-6 })
        .build();

    // Calculate kmeans, using random samples as initialization-method
    let kmean = KMeans::from_rows(&samples, sample_cnt, sample_dims)?;
    let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf)?;

    println!("Converged: {} after {} iterations", result.converged, result.iterations);
    println!("Centroids: {:?}", result.centroids);
    println!("Error: {}", result.distsum);
    Ok(())
}
