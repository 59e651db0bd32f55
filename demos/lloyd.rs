use kmeans::*;

fn main() -> Result<(), KMeansError> {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 20, 4, 100);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

    // Calculate kmeans, using kmean++ as initialization-method
    let kmean = KMeans::from_rows(&samples, sample_cnt, sample_dims)?;
    let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_kmeanplusplus, &KMeansConfig::default())?;

    for (i, c) in result.centroids.iter().enumerate() {
        println!("Centroid {} {:.4}", i + 1, c);
    }
    println!("Cluster sizes: {:?}", result.centroid_frequency);
    println!("Error: {}", result.distsum);
    Ok(())
}
