//! Density-based clustering (DBSCAN) over `ndarray` matrices.
//!
//! ```rust
//! use dbscan::{DBSCAN, NOISE};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0]
//! ];
//!
//! let mut dbscan = DBSCAN::new(1.0, 2).unwrap();
//! let labels = dbscan.fit_predict(&x).unwrap();
//! assert_eq!(labels[0], 0);
//! assert_eq!(labels[3], 1);
//! assert_eq!(labels[6], NOISE);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod datasets;
pub mod error;
pub mod metrics;
pub mod report;

pub use cluster::{BruteForce, DBSCAN, NOISE, RegionQuery, euclidean_distance};
pub use error::{Error, Result};
pub use report::{ClusterSummary, LabelConsumer, TextReport};

pub type Matrix = Array2<f64>;
pub type Labels = Array1<i32>;
