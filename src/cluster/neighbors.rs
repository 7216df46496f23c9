use ndarray::{ArrayView1, ArrayView2};

/// Neighbor search used by the clustering engine.
///
/// Implementors answer eps-radius queries over a fixed set of points addressed
/// by index. A spatial index (grid, k-d tree) can replace [`BruteForce`] here
/// without touching the engine.
pub trait RegionQuery {
    /// Number of points in the indexed dataset.
    fn n_points(&self) -> usize;

    /// Indices of every point whose distance to `point_idx` is `<= eps`,
    /// `point_idx` itself included.
    fn region_query(&self, point_idx: usize, eps: f64) -> Vec<usize>;
}

/// Linear scan over all points: O(n·d) per query.
#[derive(Clone, Debug)]
pub struct BruteForce<'a> {
    points: ArrayView2<'a, f64>,
}

impl<'a> BruteForce<'a> {
    pub fn new(points: ArrayView2<'a, f64>) -> Self {
        Self { points }
    }
}

impl RegionQuery for BruteForce<'_> {
    fn n_points(&self) -> usize {
        self.points.nrows()
    }

    fn region_query(&self, point_idx: usize, eps: f64) -> Vec<usize> {
        let point = self.points.row(point_idx);
        self.points
            .outer_iter()
            .enumerate()
            .filter(|(_, other)| euclidean_distance(&point, other) <= eps)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Euclidean distance between two points of equal dimensionality.
///
/// # Panics
///
/// Panics if `a` and `b` have different lengths.
#[inline]
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    assert_eq!(a.len(), b.len(), "points must have the same dimensionality");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
