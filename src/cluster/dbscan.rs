//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! Points are scanned in dataset order. A point whose eps-neighborhood holds
//! at least `min_samples` points (itself included) is a core point and seeds
//! a new cluster, which then grows through every density-reachable point.
//! Points reachable from no core point keep the noise label `-1`.
//!
//! Cluster ids are assigned in discovery order, so for a fixed dataset order
//! the result is deterministic. A border point within reach of two clusters
//! belongs to whichever was discovered first.

use crate::cluster::neighbors::{BruteForce, RegionQuery};
use crate::dataset::{check_finite, points_from_rows};
use crate::error::{Error, Result};
use crate::{Labels, Matrix, metrics};
use log::{debug, trace};

/// Label of points that belong to no cluster.
pub const NOISE: i32 = -1;

#[derive(Clone, Debug)]
pub struct DBSCAN {
    pub labels: Option<Labels>,
    pub core_sample_indices: Option<Vec<usize>>,
    eps: f64,
    min_samples: usize,
}

/// Per-fit traversal state shared between the scan and cluster expansion.
struct Traversal {
    labels: Vec<i32>,
    visited: Vec<bool>,
    core: Vec<bool>,
}

impl Traversal {
    fn new(n_samples: usize) -> Self {
        Self {
            labels: vec![NOISE; n_samples],
            visited: vec![false; n_samples],
            core: vec![false; n_samples],
        }
    }

    /// Claims every still-unlabeled point of `neighbors` for `cluster_id` and
    /// appends it to the work queue.
    fn claim(&mut self, neighbors: &[usize], cluster_id: i32, queue: &mut Vec<usize>) {
        for &idx in neighbors {
            if self.labels[idx] == NOISE {
                self.labels[idx] = cluster_id;
                queue.push(idx);
            }
        }
    }
}

impl DBSCAN {
    /// `eps` is the neighborhood radius (finite, `>= 0`); `min_samples` is the
    /// neighborhood size, the point itself included, that makes a point core
    /// (`>= 1`).
    pub fn new(eps: f64, min_samples: usize) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: format!("must be finite and >= 0, got {}", eps),
            });
        }
        if min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be >= 1, got 0".to_string(),
            });
        }

        Ok(Self {
            labels: None,
            core_sample_indices: None,
            eps,
            min_samples,
        })
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Clusters the rows of `x`. An empty matrix yields empty labels; a NaN or
    /// infinite coordinate is rejected before any clustering happens.
    pub fn fit(&mut self, x: &Matrix) -> Result<&mut Self> {
        check_finite(x)?;
        self.fit_with(&BruteForce::new(x.view()))
    }

    /// Clusters row-oriented points, rejecting rows of inconsistent length.
    pub fn fit_rows(&mut self, rows: &[Vec<f64>]) -> Result<&mut Self> {
        let x = points_from_rows(rows)?;
        self.fit(&x)
    }

    /// Clusters the points behind any neighbor search implementation.
    ///
    /// The index is trusted as given: every point must be its own neighbor,
    /// which distances over non-finite coordinates do not guarantee.
    pub fn fit_with<Q: RegionQuery>(&mut self, index: &Q) -> Result<&mut Self> {
        let n_samples = index.n_points();
        debug!(
            "DBSCAN fit: n_samples={}, eps={}, min_samples={}",
            n_samples, self.eps, self.min_samples
        );

        let mut state = Traversal::new(n_samples);
        let mut next_cluster = 0;

        for point_idx in 0..n_samples {
            if state.visited[point_idx] {
                continue;
            }
            state.visited[point_idx] = true;

            let neighbors = index.region_query(point_idx, self.eps);
            if neighbors.len() < self.min_samples {
                // Stays noise unless a later cluster reaches it.
                continue;
            }

            state.core[point_idx] = true;
            let size = self.expand_cluster(index, point_idx, &neighbors, next_cluster, &mut state);
            trace!(
                "cluster {} seeded at point {} with {} members",
                next_cluster, point_idx, size
            );
            next_cluster += 1;
        }

        let core_samples: Vec<usize> = (0..n_samples).filter(|&i| state.core[i]).collect();
        let labels = Labels::from(state.labels);
        debug!(
            "DBSCAN fit done: {} clusters, {} core samples, {} noise points",
            next_cluster,
            core_samples.len(),
            metrics::n_noise(&labels)
        );

        self.labels = Some(labels);
        self.core_sample_indices = Some(core_samples);

        Ok(self)
    }

    pub fn fit_predict(&mut self, x: &Matrix) -> Result<Labels> {
        self.fit(x)?;
        Ok(self.labels.clone().unwrap_or_default())
    }

    /// Grows `cluster_id` from a core seed through every density-reachable
    /// point and returns the cluster size.
    ///
    /// The queue only ever grows; `cursor` walks it once. A point enters the
    /// queue at most once because it is claimed on insertion.
    fn expand_cluster<Q: RegionQuery>(
        &self,
        index: &Q,
        seed_idx: usize,
        seed_neighbors: &[usize],
        cluster_id: i32,
        state: &mut Traversal,
    ) -> usize {
        state.labels[seed_idx] = cluster_id;

        let mut queue = Vec::with_capacity(seed_neighbors.len());
        state.claim(seed_neighbors, cluster_id, &mut queue);

        let mut cursor = 0;
        while cursor < queue.len() {
            let q = queue[cursor];
            cursor += 1;

            if state.visited[q] {
                continue;
            }
            state.visited[q] = true;

            let q_neighbors = index.region_query(q, self.eps);
            if q_neighbors.len() >= self.min_samples {
                state.core[q] = true;
                state.claim(&q_neighbors, cluster_id, &mut queue);
            }
        }

        queue.len() + 1
    }

    /// Labels aligned with the fitted points, `None` before the first fit.
    pub fn labels(&self) -> Option<&[i32]> {
        self.labels.as_ref().and_then(|labels| labels.as_slice())
    }

    pub fn n_clusters(&self) -> Option<usize> {
        self.labels.as_ref().map(metrics::n_clusters)
    }

    pub fn n_noise_points(&self) -> Option<usize> {
        self.labels.as_ref().map(metrics::n_noise)
    }

    pub fn is_core_sample(&self, sample_idx: usize) -> Option<bool> {
        self.core_sample_indices
            .as_ref()
            .map(|core_indices| core_indices.binary_search(&sample_idx).is_ok())
    }
}

impl Default for DBSCAN {
    fn default() -> Self {
        Self {
            labels: None,
            core_sample_indices: None,
            eps: 0.5,
            min_samples: 5,
        }
    }
}
