use dbscan::datasets::{make_blobs, make_moons};
use dbscan::metrics::{adjusted_rand_score, n_clusters};
use dbscan::{DBSCAN, Labels, Matrix, NOISE, euclidean_distance};
use ndarray::{Array1, array};
use std::collections::HashSet;

fn unique(labels: &[i32]) -> HashSet<i32> {
    labels.iter().copied().collect()
}

fn shifted(base: &Matrix, dx: f64, dy: f64) -> Matrix {
    base + &array![dx, dy]
}

fn square_group() -> Matrix {
    array![
        [0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.5, 0.5],
        [0.2, 0.8], [0.8, 0.2], [0.3, 0.7], [0.7, 0.3], [0.4, 0.6]
    ]
}

#[test]
fn test_euclidean_distance() {
    let a = array![0.0, 0.0];
    let b = array![3.0, 4.0];
    assert_eq!(euclidean_distance(&a.view(), &b.view()), 5.0);
}

#[test]
fn test_two_separated_groups() {
    let group = square_group();
    let x = ndarray::concatenate![ndarray::Axis(0), group, shifted(&group, 10.0, 10.0)];

    let mut dbscan = DBSCAN::new(2.0, 3).unwrap();
    dbscan.fit(&x).unwrap();
    let labels = dbscan.labels().unwrap();

    assert_eq!(unique(labels), HashSet::from([0, 1]));
    assert_eq!(unique(&labels[..10]).len(), 1);
    assert_eq!(unique(&labels[10..]).len(), 1);
    assert_ne!(labels[0], labels[10]);
}

#[test]
fn test_noise_detection() {
    let x = array![
        [0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.5, 0.5], [0.5, 1.0],
        [1.0, 0.5], [0.2, 0.2], [0.8, 0.8], [0.3, 0.7], [0.7, 0.3], [0.4, 0.6],
        // isolated
        [10.0, 10.0], [15.0, 15.0], [20.0, 20.0], [-10.0, -10.0], [25.0, -5.0]
    ];

    let mut dbscan = DBSCAN::new(2.0, 3).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();

    for i in 12..17 {
        assert_eq!(labels[i], NOISE, "point {} should be noise", i);
    }
    let cluster = unique(&labels.as_slice().unwrap()[..12]);
    assert_eq!(cluster.len(), 1);
    assert!(!cluster.contains(&NOISE));
}

#[test]
fn test_single_cluster() {
    let x = ndarray::concatenate![
        ndarray::Axis(0),
        square_group(),
        array![[0.1, 0.1], [0.9, 0.9], [0.6, 0.4], [1.2, 1.2], [1.3, 0.8]]
    ];

    let mut dbscan = DBSCAN::new(2.0, 3).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();

    assert!(labels.iter().all(|&l| l == 0));
}

#[test]
fn test_all_noise() {
    let x = array![
        [0.0, 0.0], [10.0, 10.0], [20.0, 20.0], [30.0, 30.0], [40.0, 40.0],
        [-10.0, -10.0], [-20.0, -20.0], [50.0, 50.0], [15.0, -15.0], [25.0, 25.0],
        [35.0, 35.0], [45.0, 45.0], [-15.0, -15.0], [-25.0, -25.0], [55.0, 55.0]
    ];

    let mut dbscan = DBSCAN::new(1.0, 4).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();

    assert!(labels.iter().all(|&l| l == NOISE));
}

#[test]
fn test_three_clusters() {
    let group = square_group();
    let x = ndarray::concatenate![
        ndarray::Axis(0),
        group,
        shifted(&group, 10.0, 10.0),
        shifted(&group, 20.0, 0.0)
    ];

    let mut dbscan = DBSCAN::new(2.0, 3).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();
    let labels = labels.as_slice().unwrap();

    assert_eq!(unique(labels), HashSet::from([0, 1, 2]));
    assert_eq!(&labels[..10], &[0; 10]);
    assert_eq!(&labels[10..20], &[1; 10]);
    assert_eq!(&labels[20..], &[2; 10]);
}

#[test]
fn test_dense_cluster() {
    let (x, _) = make_blobs(50, &array![[0.0, 0.0]], 0.3, 42).unwrap();

    let mut dbscan = DBSCAN::new(1.0, 3).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();

    assert!(labels.iter().all(|&l| l == 0));
}

#[test]
fn test_fit_is_chainable_and_idempotent() {
    let (x, _) = make_moons(200, 0.05, 42).unwrap();
    let mut dbscan = DBSCAN::new(0.2, 5).unwrap();

    let first = dbscan.fit(&x).unwrap().labels.clone().unwrap();
    let second = dbscan.fit(&x).unwrap().labels.clone().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_moons_recover_generating_groups() {
    let (x, groups) = make_moons(200, 0.05, 42).unwrap();

    let mut dbscan = DBSCAN::new(0.2, 5).unwrap();
    let labels = dbscan.fit_predict(&x).unwrap();
    let truth: Labels = groups.mapv(|g| g as i32);

    assert_eq!(n_clusters(&labels), 2);
    assert!(adjusted_rand_score(&truth, &labels).unwrap() > 0.9);
}

#[test]
fn test_fit_rows_matches_fit() {
    let rows: Vec<Vec<f64>> = (0..12)
        .map(|i| vec![(i % 4) as f64 * 0.5, (i / 4) as f64 * 7.0])
        .collect();
    let x = dbscan::dataset::points_from_rows(&rows).unwrap();

    let mut by_rows = DBSCAN::new(0.6, 2).unwrap();
    by_rows.fit_rows(&rows).unwrap();
    let mut by_matrix = DBSCAN::new(0.6, 2).unwrap();
    by_matrix.fit(&x).unwrap();

    assert_eq!(by_rows.labels(), by_matrix.labels());
    assert_eq!(
        by_rows.labels.unwrap(),
        Array1::from(vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2])
    );
}
