//! Sparse tensor export
//!
//! Restates a [`CoordinateMatrix`] in the layout tensor libraries accept for
//! sparse input: an `nnz x 2` list of `i64` coordinates, `f32` values and an
//! `i64` dense shape. Weights are narrowed from `f64` to `f32`; nothing else
//! changes, including entry order.
//!
//! ```text
//! CoordinateMatrix              SparseTensor
//! rows   [0, 1]            ->   indices      [[0, 1], [1, 0]]
//! cols   [1, 0]                 values       [1.0f32, 1.0f32]
//! values [1.0, 1.0]             dense_shape  [2, 2]
//! shape  (2, 2)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::CoordinateMatrix;
use crate::error::{GraphError, Result};

/// Tensor-library view of a sparse matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseTensor {
    /// One `[row, col]` pair per entry
    pub indices: Vec<[i64; 2]>,
    pub values: Vec<f32>,
    pub dense_shape: [i64; 2],
}

fn to_i64(value: usize) -> Result<i64> {
    i64::try_from(value).map_err(|_| GraphError::index_overflow(value))
}

fn to_usize(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| GraphError::index_overflow(value))
}

impl SparseTensor {
    /// Export a matrix; an absent matrix stays absent
    pub fn from_coo(coo: Option<&CoordinateMatrix>) -> Result<Option<Self>> {
        coo.map(Self::from_coordinate_matrix).transpose()
    }

    pub fn from_coordinate_matrix(coo: &CoordinateMatrix) -> Result<Self> {
        let (num_rows, num_cols) = coo.shape();
        let dense_shape = [to_i64(num_rows)?, to_i64(num_cols)?];

        let indices = coo
            .triples()
            .map(|(row, col, _)| Ok([to_i64(row)?, to_i64(col)?]))
            .collect::<Result<Vec<_>>>()?;
        let values = coo.values().iter().map(|&v| v as f32).collect();

        debug!(
            entries = indices.len(),
            rows = num_rows,
            cols = num_cols,
            "sparse tensor exported"
        );
        Ok(Self {
            indices,
            values,
            dense_shape,
        })
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Check component lengths and that every index lies inside `dense_shape`
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() != self.values.len() {
            return Err(GraphError::shape_mismatch(format!(
                "{} indices but {} values",
                self.indices.len(),
                self.values.len()
            )));
        }
        let [num_rows, num_cols] = self.dense_shape;
        if num_rows < 0 || num_cols < 0 {
            return Err(GraphError::shape_mismatch(format!(
                "negative dense shape ({}, {})",
                num_rows, num_cols
            )));
        }
        for &[row, col] in &self.indices {
            if row < 0 || col < 0 || row >= num_rows || col >= num_cols {
                return Err(GraphError::out_of_bounds(row, col, self.dense_shape));
            }
        }
        Ok(())
    }

    fn usize_indices(&self) -> Result<Vec<(usize, usize)>> {
        self.indices
            .iter()
            .map(|&[row, col]| Ok((to_usize(row)?, to_usize(col)?)))
            .collect()
    }

    /// Restate as a [`CoordinateMatrix`], widening values back to `f64`
    pub fn to_coo(&self) -> Result<CoordinateMatrix> {
        self.validate()?;
        let shape = (to_usize(self.dense_shape[0])?, to_usize(self.dense_shape[1])?);
        let triples = self
            .usize_indices()?
            .into_iter()
            .zip(&self.values)
            .map(|((row, col), &value)| (row, col, f64::from(value)));
        Ok(CoordinateMatrix::from_triples(shape, triples))
    }

    /// Row-major dense `f32` matrix; duplicate coordinates are summed
    ///
    /// Shapes whose buffer size overflows `isize::MAX` bytes are rejected.
    pub fn to_dense(&self) -> Result<Vec<Vec<f32>>> {
        self.validate()?;
        let num_rows = to_usize(self.dense_shape[0])?;
        let num_cols = to_usize(self.dense_shape[1])?;

        let row_bytes = num_cols.checked_mul(std::mem::size_of::<f32>());
        let total_bytes = row_bytes.and_then(|bytes| bytes.checked_mul(num_rows));
        let addressable = |bytes: Option<usize>| bytes.map_or(false, |b| b <= isize::MAX as usize);
        if !addressable(row_bytes) || !addressable(total_bytes) {
            return Err(GraphError::shape_mismatch(format!(
                "dense shape ({}, {}) too large to materialize",
                num_rows, num_cols
            )));
        }

        // Rows are built one by one so a zero-row shape never allocates a column buffer
        let mut dense: Vec<Vec<f32>> = (0..num_rows).map(|_| vec![0.0f32; num_cols]).collect();
        for ((row, col), &value) in self.usize_indices()?.into_iter().zip(&self.values) {
            dense[row][col] += value;
        }
        Ok(dense)
    }

    /// JSON form for consumers across a process boundary
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let tensor: SparseTensor = serde_json::from_str(json)?;
        tensor.validate()?;
        Ok(tensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn sample() -> CoordinateMatrix {
        CoordinateMatrix::from_triples((3, 3), [(0, 1, 0.5), (2, 2, 1.0), (1, 0, 0.1)])
    }

    #[test]
    fn test_from_coo_none_propagates() {
        assert!(SparseTensor::from_coo(None).unwrap().is_none());
    }

    #[test]
    fn test_from_coordinate_matrix_layout() {
        let tensor = SparseTensor::from_coordinate_matrix(&sample()).unwrap();
        assert_eq!(tensor.indices, vec![[0, 1], [2, 2], [1, 0]]);
        assert_eq!(tensor.values, vec![0.5f32, 1.0, 0.1f64 as f32]);
        assert_eq!(tensor.dense_shape, [3, 3]);
        assert_eq!(tensor.nnz(), 3);
    }

    #[test]
    fn test_to_coo_restores_coordinates() {
        let coo = sample();
        let back = SparseTensor::from_coordinate_matrix(&coo).unwrap().to_coo().unwrap();
        assert_eq!(back.shape(), coo.shape());
        assert_eq!(back.rows(), coo.rows());
        assert_eq!(back.cols(), coo.cols());
    }

    #[test]
    fn test_to_dense() {
        let tensor = SparseTensor {
            indices: vec![[0, 1], [0, 1], [1, 0]],
            values: vec![1.0, 2.0, 0.5],
            dense_shape: [2, 2],
        };
        assert_eq!(tensor.to_dense().unwrap(), vec![vec![0.0, 3.0], vec![0.5, 0.0]]);
    }

    #[test]
    fn test_validate_length_mismatch() {
        let tensor = SparseTensor {
            indices: vec![[0, 0]],
            values: vec![],
            dense_shape: [1, 1],
        };
        let err = tensor.to_coo().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let tensor = SparseTensor {
            indices: vec![[0, 2]],
            values: vec![1.0],
            dense_shape: [2, 2],
        };
        let err = tensor.to_dense().unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_to_dense_huge_shape_is_error() {
        let json = r#"{"indices":[],"values":[],"dense_shape":[4611686018427387904,4611686018427387904]}"#;
        let tensor = SparseTensor::from_json(json).unwrap();
        let err = tensor.to_dense().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_to_dense_zero_rows_huge_cols_is_error() {
        let tensor = SparseTensor {
            indices: vec![],
            values: vec![],
            dense_shape: [0, i64::MAX],
        };
        assert_eq!(tensor.to_dense().unwrap_err().kind, ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_to_dense_zero_rows() {
        let tensor = SparseTensor {
            indices: vec![],
            values: vec![],
            dense_shape: [0, 3],
        };
        assert!(tensor.to_dense().unwrap().is_empty());
    }

    #[test]
    fn test_to_usize_rejects_negative() {
        assert_eq!(to_usize(-1).unwrap_err().kind, ErrorKind::IndexOverflow);
        assert_eq!(to_usize(7).unwrap(), 7);
    }

    #[test]
    fn test_validate_negative_index() {
        let tensor = SparseTensor {
            indices: vec![[-1, 0]],
            values: vec![1.0],
            dense_shape: [2, 2],
        };
        assert_eq!(tensor.validate().unwrap_err().kind, ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_json_shape() {
        let tensor = SparseTensor::from_coordinate_matrix(&sample()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&tensor.to_json().unwrap()).unwrap();
        assert_eq!(json["dense_shape"], serde_json::json!([3, 3]));
        assert_eq!(json["indices"][1], serde_json::json!([2, 2]));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let json = r#"{"indices":[[5,0]],"values":[1.0],"dense_shape":[2,2]}"#;
        let err = SparseTensor::from_json(json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfBounds);

        let err = SparseTensor::from_json("not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
