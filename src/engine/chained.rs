// src/engine/chained.rs
//
// Fluent method-style surface over the direct-call catalog. One method per op,
// same name, same parameters minus the receiver, forwarded positionally in a
// single expression. The methods never validate, coerce, or resolve defaults;
// all of that lives in engine::ops so both call forms share one code path.

use crate::core::tensor::{Shape, Tensor};

use super::error::EngineResult;
use super::ops;

pub trait ChainedOps: Sized {
    // element-wise arithmetic
    fn add(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn sub(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn multiply(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn divide(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn maximum(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn minimum(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn scalar_mul(&self, s: f32) -> EngineResult<Tensor>;

    // comparison
    fn equal(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn not_equal(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn less(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn less_equal(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn greater(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn greater_equal(&self, b: &Tensor) -> EngineResult<Tensor>;

    // logical
    fn logical_and(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn logical_or(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn logical_xor(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn logical_not(&self) -> EngineResult<Tensor>;

    // scans
    fn cumsum(
        &self,
        axis: Option<usize>,
        exclusive: Option<bool>,
        reverse: Option<bool>,
    ) -> EngineResult<Tensor>;
    fn cumprod(
        &self,
        axis: Option<usize>,
        exclusive: Option<bool>,
        reverse: Option<bool>,
    ) -> EngineResult<Tensor>;

    // reductions
    fn sum(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn mean(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn max(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn min(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn any(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn all(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor>;
    fn argmax(&self) -> EngineResult<usize>;

    // matrix / contraction
    fn matmul(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn transpose(&self) -> EngineResult<Tensor>;
    fn dot(&self, b: &Tensor) -> EngineResult<Tensor>;
    fn outer(&self, b: &Tensor) -> EngineResult<Tensor>;

    // shape
    fn reshape(&self, new_shape: Shape) -> EngineResult<Tensor>;
    fn flatten(&self) -> EngineResult<Tensor>;
    fn slice(&self, dim: usize, start: usize, end: usize) -> EngineResult<Tensor>;

    // norms & normalization
    fn l2_norm(&self) -> EngineResult<f32>;
    fn normalize(&self) -> EngineResult<Tensor>;
    fn softmax(&self) -> EngineResult<Tensor>;
    fn local_response_normalization(
        &self,
        depth_radius: Option<usize>,
        bias: Option<f32>,
        alpha: Option<f32>,
        beta: Option<f32>,
    ) -> EngineResult<Tensor>;
}

impl ChainedOps for Tensor {
    fn add(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::add(self, b)
    }

    fn sub(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::sub(self, b)
    }

    fn multiply(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::multiply(self, b)
    }

    fn divide(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::divide(self, b)
    }

    fn maximum(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::maximum(self, b)
    }

    fn minimum(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::minimum(self, b)
    }

    fn scalar_mul(&self, s: f32) -> EngineResult<Tensor> {
        ops::scalar_mul(self, s)
    }

    fn equal(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::equal(self, b)
    }

    fn not_equal(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::not_equal(self, b)
    }

    fn less(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::less(self, b)
    }

    fn less_equal(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::less_equal(self, b)
    }

    fn greater(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::greater(self, b)
    }

    fn greater_equal(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::greater_equal(self, b)
    }

    fn logical_and(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::logical_and(self, b)
    }

    fn logical_or(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::logical_or(self, b)
    }

    fn logical_xor(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::logical_xor(self, b)
    }

    fn logical_not(&self) -> EngineResult<Tensor> {
        ops::logical_not(self)
    }

    fn cumsum(
        &self,
        axis: Option<usize>,
        exclusive: Option<bool>,
        reverse: Option<bool>,
    ) -> EngineResult<Tensor> {
        ops::cumsum(self, axis, exclusive, reverse)
    }

    fn cumprod(
        &self,
        axis: Option<usize>,
        exclusive: Option<bool>,
        reverse: Option<bool>,
    ) -> EngineResult<Tensor> {
        ops::cumprod(self, axis, exclusive, reverse)
    }

    fn sum(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::sum(self, axis, keep_dims)
    }

    fn mean(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::mean(self, axis, keep_dims)
    }

    fn max(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::max(self, axis, keep_dims)
    }

    fn min(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::min(self, axis, keep_dims)
    }

    fn any(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::any(self, axis, keep_dims)
    }

    fn all(&self, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
        ops::all(self, axis, keep_dims)
    }

    fn argmax(&self) -> EngineResult<usize> {
        ops::argmax(self)
    }

    fn matmul(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::matmul(self, b)
    }

    fn transpose(&self) -> EngineResult<Tensor> {
        ops::transpose(self)
    }

    fn dot(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::dot(self, b)
    }

    fn outer(&self, b: &Tensor) -> EngineResult<Tensor> {
        ops::outer(self, b)
    }

    fn reshape(&self, new_shape: Shape) -> EngineResult<Tensor> {
        ops::reshape(self, new_shape)
    }

    fn flatten(&self) -> EngineResult<Tensor> {
        ops::flatten(self)
    }

    fn slice(&self, dim: usize, start: usize, end: usize) -> EngineResult<Tensor> {
        ops::slice(self, dim, start, end)
    }

    fn l2_norm(&self) -> EngineResult<f32> {
        ops::l2_norm(self)
    }

    fn normalize(&self) -> EngineResult<Tensor> {
        ops::normalize(self)
    }

    fn softmax(&self) -> EngineResult<Tensor> {
        ops::softmax(self)
    }

    fn local_response_normalization(
        &self,
        depth_radius: Option<usize>,
        bias: Option<f32>,
        alpha: Option<f32>,
        beta: Option<f32>,
    ) -> EngineResult<Tensor> {
        ops::local_response_normalization(self, depth_radius, bias, alpha, beta)
    }
}
