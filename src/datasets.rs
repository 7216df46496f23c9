//! Seeded synthetic datasets for exercising clustering.
//!
//! Every generator returns the points together with the index of the group
//! each point was drawn from. Points are emitted group by group, unshuffled.

use crate::error::{Error, Result};
use crate::{Array1, Matrix};
use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

fn gaussian(name: &'static str, std_dev: f64) -> Result<Normal<f64>> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::InvalidParameter {
            name,
            message: format!("must be finite and >= 0, got {}", std_dev),
        });
    }
    Normal::new(0.0, std_dev).map_err(|e| Error::InvalidParameter {
        name,
        message: format!("{} (got {})", e, std_dev),
    })
}

fn add_noise(x: &mut Matrix, noise: f64, rng: &mut StdRng) -> Result<()> {
    let normal = gaussian("noise", noise)?;
    if noise > 0.0 {
        *x += &Matrix::random_using(x.raw_dim(), normal, rng);
    }
    Ok(())
}

/// Isotropic Gaussian blobs: `n_samples_per_center` points around each row of
/// `centers`.
pub fn make_blobs(
    n_samples_per_center: usize,
    centers: &Matrix,
    cluster_std: f64,
    seed: u64,
) -> Result<(Matrix, Array1<usize>)> {
    let normal = gaussian("cluster_std", cluster_std)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let n_samples = n_samples_per_center * centers.nrows();
    let mut x = Matrix::random_using((n_samples, centers.ncols()), normal, &mut rng);
    for (c, center) in centers.outer_iter().enumerate() {
        let mut block = x.slice_mut(s![c * n_samples_per_center..(c + 1) * n_samples_per_center, ..]);
        block += &center;
    }

    let groups = Array1::from_shape_fn(n_samples, |i| i / n_samples_per_center);
    Ok((x, groups))
}

/// Two interleaving half circles. The outer moon gets `n_samples / 2` points,
/// the inner one the rest.
pub fn make_moons(n_samples: usize, noise: f64, seed: u64) -> Result<(Matrix, Array1<usize>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_out = n_samples / 2;
    let n_in = n_samples - n_out;

    let mut x = Matrix::zeros((n_samples, 2));
    for (i, t) in Array1::linspace(0.0, PI, n_out).iter().enumerate() {
        x[[i, 0]] = t.cos();
        x[[i, 1]] = t.sin();
    }
    for (i, t) in Array1::linspace(0.0, PI, n_in).iter().enumerate() {
        x[[n_out + i, 0]] = 1.0 - t.cos();
        x[[n_out + i, 1]] = 1.0 - t.sin() - 0.5;
    }
    add_noise(&mut x, noise, &mut rng)?;

    let groups = Array1::from_shape_fn(n_samples, |i| usize::from(i >= n_out));
    Ok((x, groups))
}

/// A large circle containing a smaller one scaled by `factor` in `[0, 1)`.
/// The outer circle gets `n_samples / 2` points, the inner one the rest.
pub fn make_circles(
    n_samples: usize,
    factor: f64,
    noise: f64,
    seed: u64,
) -> Result<(Matrix, Array1<usize>)> {
    if !(0.0..1.0).contains(&factor) {
        return Err(Error::InvalidParameter {
            name: "factor",
            message: format!("must be in [0, 1), got {}", factor),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let n_out = n_samples / 2;
    let n_in = n_samples - n_out;

    let mut x = Matrix::zeros((n_samples, 2));
    for i in 0..n_out {
        let t = 2.0 * PI * i as f64 / n_out as f64;
        x[[i, 0]] = t.cos();
        x[[i, 1]] = t.sin();
    }
    for i in 0..n_in {
        let t = 2.0 * PI * i as f64 / n_in as f64;
        x[[n_out + i, 0]] = factor * t.cos();
        x[[n_out + i, 1]] = factor * t.sin();
    }
    add_noise(&mut x, noise, &mut rng)?;

    let groups = Array1::from_shape_fn(n_samples, |i| usize::from(i >= n_out));
    Ok((x, groups))
}
