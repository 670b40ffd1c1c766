// src/core/tensor.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("Data length {got} does not match shape {dims:?} (expected {expected})")]
    LengthMismatch {
        dims: Vec<usize>,
        expected: usize,
        got: usize,
    },

    #[error("Matrix data length {got} does not match {rows}x{cols}")]
    BadMatrix {
        rows: usize,
        cols: usize,
        got: usize,
    },
}

/// Representa la forma (shape) de un tensor.
/// []        -> escalar (rank 0)
/// [3]       -> vector 3D (rank 1)
/// [2, 3]    -> matriz 2x3 (rank 2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub dims: Vec<usize>,
}

impl Shape {
    /// Crea un nuevo shape a partir de una lista de dimensiones
    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Self {
        Self { dims: dims.into() }
    }

    /// Número de dimensiones (rank)
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Número total de elementos
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }
}

/// Dense f32 tensor, row-major layout. Tensors are plain values: ops take
/// references and return freshly built tensors, nothing is shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    pub shape: Shape,
    pub data: Vec<f32>,
}

impl Tensor {
    /// Crea un tensor verificando que data.len() coincide con shape.num_elements()
    pub fn new(shape: Shape, data: Vec<f32>) -> Result<Self, TensorError> {
        let expected = shape.num_elements();
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                dims: shape.dims.clone(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Rank-0 tensor holding a single value.
    pub fn scalar(value: f32) -> Self {
        Self {
            shape: Shape::new(vec![]),
            data: vec![value],
        }
    }

    /// Rank-1 tensor from a list of values.
    pub fn vector<D: Into<Vec<f32>>>(data: D) -> Self {
        let data = data.into();
        Self {
            shape: Shape::new(vec![data.len()]),
            data,
        }
    }

    /// Rank-2 tensor from row-major data.
    pub fn matrix(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, TensorError> {
        if data.len() != rows * cols {
            return Err(TensorError::BadMatrix {
                rows,
                cols,
                got: data.len(),
            });
        }
        Ok(Self {
            shape: Shape::new(vec![rows, cols]),
            data,
        })
    }

    /// Tensor lleno de un valor constante
    pub fn filled(shape: Shape, value: f32) -> Self {
        let n = shape.num_elements();
        Self {
            shape,
            data: vec![value; n],
        }
    }

    pub fn zeros(shape: Shape) -> Self {
        Self::filled(shape, 0.0)
    }

    pub fn ones(shape: Shape) -> Self {
        Self::filled(shape, 1.0)
    }

    /// Rank del tensor (0 = escalar, 1 = vector, 2 = matriz...)
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Número de elementos
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a multi-dimensional index, if in bounds.
    pub fn get(&self, indices: &[usize]) -> Option<f32> {
        if indices.len() != self.rank() {
            return None;
        }
        let mut flat = 0;
        let mut stride = 1;
        for i in (0..self.rank()).rev() {
            if indices[i] >= self.shape.dims[i] {
                return None;
            }
            flat += indices[i] * stride;
            stride *= self.shape.dims[i];
        }
        self.data.get(flat).copied()
    }

    /// True when every element is exactly 0.0 or 1.0 (a boolean-valued tensor,
    /// as produced by the comparison and logical ops).
    pub fn is_boolean(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0 || x == 1.0)
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_length() {
        let ok = Tensor::new(Shape::new(vec![2, 2]), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(ok.is_ok());

        let bad = Tensor::new(Shape::new(vec![2, 2]), vec![1.0, 2.0]);
        assert!(bad.is_err());
    }

    #[test]
    fn constructors_and_accessors() {
        let s = Tensor::scalar(7.0);
        assert_eq!(s.rank(), 0);
        assert_eq!(s.data, vec![7.0]);

        let v = Tensor::vector(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.rank(), 1);
        assert_eq!(v.len(), 3);

        let m = Tensor::matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(&[1, 0]), Some(3.0));
        assert_eq!(m.get(&[2, 0]), None);
        assert_eq!(m.get(&[0]), None);
    }

    #[test]
    fn boolean_detection() {
        assert!(Tensor::vector(vec![0.0, 1.0, 1.0]).is_boolean());
        assert!(!Tensor::vector(vec![0.5, 1.0]).is_boolean());
    }
}
