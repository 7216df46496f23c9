use dbscan::datasets::make_moons;
use dbscan::{DBSCAN, LabelConsumer, TextReport};
use std::collections::BTreeSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simple DBSCAN Example ===\n");

    println!("Generating data...");
    let (x, _) = make_moons(300, 0.1, 42)?;

    println!("Running DBSCAN...");
    let mut dbscan = DBSCAN::new(0.25, 5)?;
    let labels = dbscan.fit_predict(&x)?;

    println!("Labels output: {:?}", labels.to_vec());

    // All-noise output usually means eps is too small for the data scale.
    let unique_labels: BTreeSet<i32> = labels.iter().copied().collect();
    println!("Found clusters: {:?}\n", unique_labels);

    let mut report = TextReport::new(std::io::stdout().lock()).summary_only();
    report.consume(x.view(), labels.view(), "DBSCAN on moons")?;

    Ok(())
}
