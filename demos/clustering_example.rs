use dbscan::datasets::{make_blobs, make_circles, make_moons};
use dbscan::metrics::adjusted_rand_score;
use dbscan::{DBSCAN, LabelConsumer, Labels, Matrix, TextReport};
use ndarray::{Array1, array};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DBSCAN on Synthetic Shapes ===\n");

    let (x_moons, moons_groups) = make_moons(300, 0.1, 42)?;
    run_experiment(&x_moons, &moons_groups, 0.2, 5, "Moons Dataset")?;

    // The inner circle is half the size of the outer one.
    let (x_circles, circles_groups) = make_circles(300, 0.5, 0.05, 42)?;
    run_experiment(&x_circles, &circles_groups, 0.18, 4, "Circles Dataset")?;

    let centers = array![[0.0, 0.0], [6.0, 6.0], [-6.0, 6.0]];
    let (x_blobs, blob_groups) = make_blobs(50, &centers, 0.8, 42)?;
    run_experiment(&x_blobs, &blob_groups, 1.0, 5, "Blobs Dataset")?;

    println!("=== Parameter Sensitivity (moons) ===");
    for &(eps, min_samples, description) in &[
        (0.05, 5, "Too tight"),
        (0.2, 5, "Reasonable"),
        (1.0, 5, "Too loose"),
        (0.2, 20, "High min_samples"),
    ] {
        let mut dbscan = DBSCAN::new(eps, min_samples)?;
        dbscan.fit(&x_moons)?;
        println!(
            "DBSCAN(eps={}, min_samples={}): {} - {} clusters, {} noise points",
            eps,
            min_samples,
            description,
            dbscan.n_clusters().unwrap_or(0),
            dbscan.n_noise_points().unwrap_or(0)
        );
    }

    Ok(())
}

fn run_experiment(
    x: &Matrix,
    groups: &Array1<usize>,
    eps: f64,
    min_samples: usize,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Running Experiment: {} ---", title);
    println!("Parameters: eps={}, min_samples={}", eps, min_samples);

    let mut dbscan = DBSCAN::new(eps, min_samples)?;
    let labels = dbscan.fit_predict(x)?;

    let truth: Labels = groups.mapv(|g| g as i32);
    let ari = adjusted_rand_score(&truth, &labels)?;
    println!("Adjusted Rand index vs generating groups: {:.4}", ari);

    let mut report = TextReport::new(std::io::stdout().lock()).summary_only();
    report.consume(
        x.view(),
        labels.view(),
        &format!("{} (eps={}, min={})", title, eps, min_samples),
    )?;
    println!();

    Ok(())
}
