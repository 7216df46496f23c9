//! Presentation of clustering results.
//!
//! A [`LabelConsumer`] receives the clustered points, their labels and a
//! title. Consumers are downstream only: nothing they do feeds back into the
//! engine.

use crate::Labels;
use crate::cluster::NOISE;
use crate::error::{Error, Result};
use crate::metrics::{cluster_sizes, n_noise};
use ndarray::{ArrayView1, ArrayView2};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

pub trait LabelConsumer {
    fn consume(&mut self, points: ArrayView2<f64>, labels: ArrayView1<i32>, title: &str) -> Result<()>;
}

/// Cluster and noise counts of one labeling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterSummary {
    pub n_samples: usize,
    pub n_noise: usize,
    /// Size of each cluster id present in the labeling.
    pub cluster_sizes: BTreeMap<i32, usize>,
}

impl ClusterSummary {
    pub fn from_labels(labels: &Labels) -> Self {
        Self {
            n_samples: labels.len(),
            n_noise: n_noise(labels),
            cluster_sizes: cluster_sizes(labels),
        }
    }

    pub fn n_clusters(&self) -> usize {
        self.cluster_sizes.len()
    }
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} samples, {} clusters, {} noise points",
            self.n_samples,
            self.n_clusters(),
            self.n_noise
        )?;
        for (cluster_id, size) in &self.cluster_sizes {
            writeln!(f, "  Cluster {}: {} points", cluster_id, size)?;
        }
        if self.n_noise > 0 {
            writeln!(f, "  Noise: {} points", self.n_noise)?;
        }
        Ok(())
    }
}

/// Writes a plain-text report: title, summary, then one line per point.
pub struct TextReport<W: Write> {
    out: W,
    show_points: bool,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_points: true,
        }
    }

    /// Only write the title and summary.
    pub fn summary_only(mut self) -> Self {
        self.show_points = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LabelConsumer for TextReport<W> {
    fn consume(&mut self, points: ArrayView2<f64>, labels: ArrayView1<i32>, title: &str) -> Result<()> {
        if points.nrows() != labels.len() {
            return Err(Error::LengthMismatch {
                left: points.nrows(),
                right: labels.len(),
            });
        }

        let summary = ClusterSummary::from_labels(&labels.to_owned());
        writeln!(self.out, "=== {} ===", title)?;
        write!(self.out, "{}", summary)?;

        if self.show_points {
            for (i, (point, &label)) in points.outer_iter().zip(labels.iter()).enumerate() {
                let coords: Vec<String> = point.iter().map(|c| format!("{:.3}", c)).collect();
                let tag = if label == NOISE {
                    "noise".to_string()
                } else {
                    format!("cluster {}", label)
                };
                writeln!(self.out, "  point {:3} ({}) => {}", i, coords.join(", "), tag)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
