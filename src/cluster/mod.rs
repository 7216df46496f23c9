//! Density-based clustering.
//!
//! This module provides:
//! - `DBSCAN`: density-based clustering for arbitrarily shaped clusters with noise
//! - `RegionQuery`: the neighbor-search interface the engine runs on
//! - `BruteForce`: the linear-scan `RegionQuery` over an in-memory matrix
//!
//! # Examples
//!
//! ## DBSCAN Clustering
//! ```rust
//! use dbscan::{DBSCAN, Matrix};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // Outlier
//! ];
//!
//! let mut dbscan = DBSCAN::new(1.0, 2).unwrap(); // eps=1.0, min_samples=2
//! dbscan.fit(&x).unwrap();
//!
//! assert_eq!(dbscan.n_clusters(), Some(2));
//! assert_eq!(dbscan.n_noise_points(), Some(1));
//! ```
//!
//! ## Custom neighbor search
//! ```rust
//! use dbscan::{BruteForce, DBSCAN};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.5, 0.0], [9.0, 9.0]];
//! let index = BruteForce::new(x.view());
//!
//! let mut dbscan = DBSCAN::new(1.0, 2).unwrap();
//! dbscan.fit_with(&index).unwrap();
//! assert_eq!(dbscan.labels().unwrap(), &[0, 0, -1]);
//! ```

mod dbscan;
mod neighbors;

pub use dbscan::{DBSCAN, NOISE};
pub use neighbors::{BruteForce, RegionQuery, euclidean_distance};
