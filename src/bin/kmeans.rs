use anyhow::{ensure, Context};
use clap::Parser;
use kmeans::*;
use std::path::PathBuf;

/// Cluster the points of a comma-delimited file with Lloyd's algorithm and print the centroids.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file, one point per line, coordinates separated by commas
    file: PathBuf,

    /// Amount of clusters (1 < k < points)
    #[arg(short = 'k', long)]
    clusters: usize,

    /// Amount of points contained in the file
    #[arg(short = 'n', long)]
    points: usize,

    /// Dimension of every point
    #[arg(short, long)]
    dimension: usize,

    /// Iteration limit (1 < max-iter < 1000)
    #[arg(short, long)]
    max_iter: Option<usize>,

    /// Stop once no centroid moves farther than this, instead of waiting for an exact fixed point
    #[arg(short, long)]
    epsilon: Option<f64>,

    /// Reset empty clusters to the origin instead of keeping their previous centroid
    #[arg(long)]
    origin_empty: bool,

    /// Raise the log level (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let params = Parameters::new(args.clusters, args.points, args.dimension, args.max_iter);
    params.validate().context("invalid parameters")?;

    let points = loader::read_points::<f64, _>(&args.file, params.d)
        .with_context(|| format!("failed to load points from {}", args.file.display()))?;
    ensure!(points.len() == params.n, KMeansError::PointCountMismatch { expected: params.n, found: points.len() });

    let convergence = match args.epsilon {
        Some(epsilon) => ConvergenceStrategy::Tolerance { epsilon },
        None => ConvergenceStrategy::Exact,
    };
    let empty_clusters = match args.origin_empty {
        true => EmptyClusterPolicy::Origin,
        false => EmptyClusterPolicy::RetainPrevious,
    };
    let conf = KMeansConfig::build()
        .convergence(convergence)
        .empty_clusters(empty_clusters)
        .build();

    let kmean = KMeans::new(points).context("inconsistent input")?;
    let result = kmean.kmeans_lloyd(params.k, params.max_iter, KMeans::init_first_k, &conf)
        .context("k-means run failed")?;
    if !result.converged {
        log::warn!("no convergence within {} iterations", params.max_iter);
    }

    for (i, centroid) in result.centroids.iter().enumerate() {
        println!("Centroid {} {:.4}", i + 1, centroid);
    }
    Ok(())
}
