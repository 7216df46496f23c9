use crate::Matrix;
use crate::error::{Error, Result};

/// Builds a point matrix from row-oriented coordinates.
///
/// Every row must have the length of the first one; the first row that does
/// not is reported. An empty slice yields a `0 x 0` matrix.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let n_features = rows.first().map_or(0, |row| row.len());

    let mut flat = Vec::with_capacity(rows.len() * n_features);
    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != n_features {
            return Err(Error::DimensionMismatch {
                row: row_idx,
                expected: n_features,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }

    Matrix::from_shape_vec((rows.len(), n_features), flat).map_err(|e| Error::InvalidParameter {
        name: "rows",
        message: e.to_string(),
    })
}

/// Rejects points with a NaN or infinite coordinate, reporting the first one.
pub fn check_finite(x: &Matrix) -> Result<()> {
    match x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, column), _)) => Err(Error::NonFiniteInput { row, column }),
        None => Ok(()),
    }
}
