use crate::Labels;
use crate::cluster::NOISE;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Number of distinct clusters, noise excluded.
pub fn n_clusters(labels: &Labels) -> usize {
    let unique_clusters: HashSet<i32> = labels.iter().copied().filter(|&l| l >= 0).collect();
    unique_clusters.len()
}

pub fn n_noise(labels: &Labels) -> usize {
    labels.iter().filter(|&&l| l == NOISE).count()
}

/// Member count of every cluster id that occurs, noise excluded.
pub fn cluster_sizes(labels: &Labels) -> BTreeMap<i32, usize> {
    let mut sizes = BTreeMap::new();
    for &l in labels.iter().filter(|&&l| l >= 0) {
        *sizes.entry(l).or_insert(0) += 1;
    }
    sizes
}

/// Adjusted Rand index between two labelings of the same points.
///
/// 1.0 means the same partition up to renaming of labels, values near 0.0 are
/// what random labelings score. Noise is compared like any other label.
pub fn adjusted_rand_score(labels_true: &Labels, labels_pred: &Labels) -> Result<f64> {
    if labels_true.len() != labels_pred.len() {
        return Err(Error::LengthMismatch {
            left: labels_true.len(),
            right: labels_pred.len(),
        });
    }

    let mut contingency: HashMap<(i32, i32), usize> = HashMap::new();
    let mut true_sizes: HashMap<i32, usize> = HashMap::new();
    let mut pred_sizes: HashMap<i32, usize> = HashMap::new();
    for (&t, &p) in labels_true.iter().zip(labels_pred.iter()) {
        *contingency.entry((t, p)).or_insert(0) += 1;
        *true_sizes.entry(t).or_insert(0) += 1;
        *pred_sizes.entry(p).or_insert(0) += 1;
    }

    let pairs = |k: usize| {
        let k = k as f64;
        k * (k - 1.0) / 2.0
    };

    let index: f64 = contingency.values().map(|&n| pairs(n)).sum();
    let sum_true: f64 = true_sizes.values().map(|&n| pairs(n)).sum();
    let sum_pred: f64 = pred_sizes.values().map(|&n| pairs(n)).sum();
    let total = pairs(labels_true.len());

    if total == 0.0 {
        return Ok(1.0);
    }

    let expected = sum_true * sum_pred / total;
    let max_index = (sum_true + sum_pred) / 2.0;
    if max_index == expected {
        return Ok(1.0);
    }

    Ok((index - expected) / (max_index - expected))
}
