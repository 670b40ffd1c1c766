// src/engine/ops.rs
//
// Direct-call operation catalog. Every op validates its inputs, builds a fresh
// tensor, and surfaces problems as EngineError. Optional trailing arguments
// are Option<_> and their defaults are resolved HERE and nowhere else: the
// chained surface (engine::chained) forwards them untouched, so both call
// forms share one defaulting path.

use crate::core::tensor::{Shape, Tensor};

use super::error::{EngineError, EngineResult};

/// Default axis for cumulative scans.
pub const DEFAULT_SCAN_AXIS: usize = 0;
/// Default depth radius for local response normalization.
pub const DEFAULT_LRN_DEPTH_RADIUS: usize = 5;
/// Default bias for local response normalization.
pub const DEFAULT_LRN_BIAS: f32 = 1.0;
/// Default alpha for local response normalization.
pub const DEFAULT_LRN_ALPHA: f32 = 1.0;
/// Default beta for local response normalization.
pub const DEFAULT_LRN_BETA: f32 = 0.5;

fn ensure_same_shape(a: &Shape, b: &Shape) -> EngineResult<()> {
    if a.dims != b.dims {
        Err(EngineError::ShapeMismatch(format!(
            "{:?} vs {:?}",
            a.dims, b.dims
        )))
    } else {
        Ok(())
    }
}

fn ensure_boolean(t: &Tensor, op: &str) -> EngineResult<()> {
    if t.is_boolean() {
        Ok(())
    } else {
        Err(EngineError::NotBoolean(format!(
            "{} expects tensors holding only 0.0/1.0",
            op
        )))
    }
}

/// Estrategia para combinar dos tensores elemento a elemento.
/// Soporta escalar (rank 0) con cualquier shape en cualquiera de los lados;
/// en el resto de casos los shapes deben coincidir exactamente.
fn elementwise_binary(
    a: &Tensor,
    b: &Tensor,
    op: impl Fn(f32, f32) -> EngineResult<f32>,
) -> EngineResult<Tensor> {
    match (a.rank(), b.rank()) {
        (0, _) => {
            let scalar = a.data[0];
            let mut data = Vec::with_capacity(b.len());
            for &y in b.data.iter() {
                data.push(op(scalar, y)?);
            }
            Ok(Tensor::new(b.shape.clone(), data)?)
        }
        (_, 0) => {
            let scalar = b.data[0];
            let mut data = Vec::with_capacity(a.len());
            for &x in a.data.iter() {
                data.push(op(x, scalar)?);
            }
            Ok(Tensor::new(a.shape.clone(), data)?)
        }
        _ => {
            ensure_same_shape(&a.shape, &b.shape)?;
            let mut data = Vec::with_capacity(a.len());
            for (&x, &y) in a.data.iter().zip(b.data.iter()) {
                data.push(op(x, y)?);
            }
            Ok(Tensor::new(a.shape.clone(), data)?)
        }
    }
}

// ============================================================================
// ELEMENT-WISE ARITHMETIC
// ============================================================================

/// Suma elemento a elemento: a + b
pub fn add(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(x + y))
}

/// Resta elemento a elemento: a - b
pub fn sub(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(x - y))
}

/// Multiplicación elemento a elemento: a * b
pub fn multiply(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(x * y))
}

/// División elemento a elemento: a / b (divisor cero es error)
pub fn divide(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| {
        if y == 0.0 {
            Err(EngineError::DivisionByZero)
        } else {
            Ok(x / y)
        }
    })
}

/// Element-wise maximum.
pub fn maximum(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(x.max(y)))
}

/// Element-wise minimum.
pub fn minimum(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(x.min(y)))
}

/// Multiplicación por escalar: s * a
pub fn scalar_mul(a: &Tensor, s: f32) -> EngineResult<Tensor> {
    let data: Vec<f32> = a.data.iter().map(|x| s * x).collect();
    Ok(Tensor::new(a.shape.clone(), data)?)
}

// ============================================================================
// COMPARISON (boolean-valued results)
// ============================================================================

fn compare(a: &Tensor, b: &Tensor, pred: impl Fn(f32, f32) -> bool) -> EngineResult<Tensor> {
    elementwise_binary(a, b, |x, y| Ok(if pred(x, y) { 1.0 } else { 0.0 }))
}

/// a == b, element-wise, as 0.0/1.0
pub fn equal(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x == y)
}

/// a != b, element-wise, as 0.0/1.0
pub fn not_equal(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x != y)
}

/// a < b, element-wise, as 0.0/1.0
pub fn less(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x < y)
}

/// a <= b, element-wise, as 0.0/1.0
pub fn less_equal(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x <= y)
}

/// a > b, element-wise, as 0.0/1.0
pub fn greater(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x > y)
}

/// a >= b, element-wise, as 0.0/1.0
pub fn greater_equal(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    compare(a, b, |x, y| x >= y)
}

// ============================================================================
// LOGICAL (boolean-valued inputs and results)
// ============================================================================

/// Element-wise logical AND over boolean-valued tensors.
pub fn logical_and(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    ensure_boolean(a, "logical_and")?;
    ensure_boolean(b, "logical_and")?;
    compare(a, b, |x, y| x != 0.0 && y != 0.0)
}

/// Element-wise logical OR over boolean-valued tensors.
pub fn logical_or(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    ensure_boolean(a, "logical_or")?;
    ensure_boolean(b, "logical_or")?;
    compare(a, b, |x, y| x != 0.0 || y != 0.0)
}

/// Element-wise logical XOR over boolean-valued tensors.
pub fn logical_xor(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    ensure_boolean(a, "logical_xor")?;
    ensure_boolean(b, "logical_xor")?;
    compare(a, b, |x, y| (x != 0.0) != (y != 0.0))
}

/// Element-wise logical NOT over a boolean-valued tensor.
pub fn logical_not(a: &Tensor) -> EngineResult<Tensor> {
    ensure_boolean(a, "logical_not")?;
    let data: Vec<f32> = a
        .data
        .iter()
        .map(|&x| if x == 0.0 { 1.0 } else { 0.0 })
        .collect();
    Ok(Tensor::new(a.shape.clone(), data)?)
}

// ============================================================================
// CUMULATIVE SCANS
// ============================================================================

/// Lane decomposition for rank-1/rank-2 tensors: each lane is a list of flat
/// indices walked in order along the given axis.
fn lanes(a: &Tensor, axis: usize) -> EngineResult<Vec<Vec<usize>>> {
    match a.rank() {
        1 => {
            if axis != 0 {
                return Err(EngineError::AxisOutOfBounds { axis, rank: 1 });
            }
            Ok(vec![(0..a.len()).collect()])
        }
        2 => {
            let rows = a.shape.dims[0];
            let cols = a.shape.dims[1];
            match axis {
                // down each column
                0 => Ok((0..cols)
                    .map(|j| (0..rows).map(|i| i * cols + j).collect())
                    .collect()),
                // across each row
                1 => Ok((0..rows)
                    .map(|i| (0..cols).map(|j| i * cols + j).collect())
                    .collect()),
                _ => Err(EngineError::AxisOutOfBounds { axis, rank: 2 }),
            }
        }
        r => Err(EngineError::RankError(format!(
            "scan supports rank-1 and rank-2 tensors, got rank-{}",
            r
        ))),
    }
}

fn scan(
    a: &Tensor,
    axis: Option<usize>,
    exclusive: Option<bool>,
    reverse: Option<bool>,
    init: f32,
    f: impl Fn(f32, f32) -> f32,
) -> EngineResult<Tensor> {
    let axis = axis.unwrap_or(DEFAULT_SCAN_AXIS);
    let exclusive = exclusive.unwrap_or(false);
    let reverse = reverse.unwrap_or(false);

    let mut out = vec![0.0; a.len()];
    for lane in lanes(a, axis)? {
        let order: Vec<usize> = if reverse {
            lane.iter().rev().copied().collect()
        } else {
            lane
        };
        let mut acc = init;
        for idx in order {
            if exclusive {
                out[idx] = acc;
                acc = f(acc, a.data[idx]);
            } else {
                acc = f(acc, a.data[idx]);
                out[idx] = acc;
            }
        }
    }
    Ok(Tensor::new(a.shape.clone(), out)?)
}

/// Cumulative sum along an axis.
/// Defaults: axis 0, inclusive, forward (matching the direct-call contract;
/// the chained form passes its Options straight through).
pub fn cumsum(
    a: &Tensor,
    axis: Option<usize>,
    exclusive: Option<bool>,
    reverse: Option<bool>,
) -> EngineResult<Tensor> {
    scan(a, axis, exclusive, reverse, 0.0, |acc, x| acc + x)
}

/// Cumulative product along an axis. Same defaults as cumsum.
pub fn cumprod(
    a: &Tensor,
    axis: Option<usize>,
    exclusive: Option<bool>,
    reverse: Option<bool>,
) -> EngineResult<Tensor> {
    scan(a, axis, exclusive, reverse, 1.0, |acc, x| acc * x)
}

// ============================================================================
// REDUCTIONS
// ============================================================================

fn reduce(
    a: &Tensor,
    axis: Option<usize>,
    keep_dims: Option<bool>,
    init: f32,
    f: impl Fn(f32, f32) -> f32,
) -> EngineResult<Tensor> {
    let keep_dims = keep_dims.unwrap_or(false);
    if a.is_empty() {
        return Err(EngineError::EmptyInput("cannot reduce an empty tensor".into()));
    }

    match axis {
        None => {
            let acc = a.data.iter().fold(init, |acc, &x| f(acc, x));
            if keep_dims {
                let dims = vec![1; a.rank()];
                Ok(Tensor::new(Shape::new(dims), vec![acc])?)
            } else {
                Ok(Tensor::scalar(acc))
            }
        }
        Some(axis) => {
            let lanes = lanes(a, axis)?;
            let mut out = Vec::with_capacity(lanes.len());
            for lane in &lanes {
                let acc = lane.iter().fold(init, |acc, &i| f(acc, a.data[i]));
                out.push(acc);
            }
            let shape = match (a.rank(), keep_dims) {
                (1, false) => Shape::new(vec![]),
                (1, true) => Shape::new(vec![1]),
                (2, false) => Shape::new(vec![out.len()]),
                (2, true) => {
                    let mut dims = a.shape.dims.clone();
                    dims[axis] = 1;
                    Shape::new(dims)
                }
                _ => unreachable!("lanes() rejects rank > 2"),
            };
            Ok(Tensor::new(shape, out)?)
        }
    }
}

/// Sum reduction. `axis: None` reduces everything to a scalar tensor.
pub fn sum(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    reduce(a, axis, keep_dims, 0.0, |acc, x| acc + x)
}

/// Mean reduction.
pub fn mean(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    let total = sum(a, axis, keep_dims)?;
    let count = match axis {
        None => a.len(),
        Some(ax) => a.shape.dims.get(ax).copied().unwrap_or(1),
    };
    scalar_mul(&total, 1.0 / count as f32)
}

/// Max reduction.
pub fn max(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    reduce(a, axis, keep_dims, f32::NEG_INFINITY, |acc, x| acc.max(x))
}

/// Min reduction.
pub fn min(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    reduce(a, axis, keep_dims, f32::INFINITY, |acc, x| acc.min(x))
}

/// True if ANY element along the axis is truthy. Boolean-valued input only.
pub fn any(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    ensure_boolean(a, "any")?;
    reduce(a, axis, keep_dims, 0.0, |acc, x| acc.max(x))
}

/// True if ALL elements along the axis are truthy. Boolean-valued input only.
pub fn all(a: &Tensor, axis: Option<usize>, keep_dims: Option<bool>) -> EngineResult<Tensor> {
    ensure_boolean(a, "all")?;
    reduce(a, axis, keep_dims, 1.0, |acc, x| acc.min(x))
}

/// Flat index of the largest element.
pub fn argmax(a: &Tensor) -> EngineResult<usize> {
    if a.is_empty() {
        return Err(EngineError::EmptyInput("argmax of an empty tensor".into()));
    }
    let mut best = 0;
    for (i, &x) in a.data.iter().enumerate() {
        if x > a.data[best] {
            best = i;
        }
    }
    Ok(best)
}

// ============================================================================
// MATRIX OPERATIONS (Rank-2 Tensors)
// ============================================================================

/// Matrix multiplication: C = A * B
/// A: [m, n], B: [n, p] -> C: [m, p]
pub fn matmul(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    if a.rank() != 2 || b.rank() != 2 {
        return Err(EngineError::RankError(
            "matmul expects rank-2 tensors (matrices)".into(),
        ));
    }

    let m = a.shape.dims[0];
    let n = a.shape.dims[1];
    let n2 = b.shape.dims[0];
    let p = b.shape.dims[1];

    if n != n2 {
        return Err(EngineError::ShapeMismatch(format!(
            "A is [{}x{}], B is [{}x{}]. Inner dimensions must match.",
            m, n, n2, p
        )));
    }

    let mut data = vec![0.0; m * p];

    for i in 0..m {
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..n {
                acc += a.data[i * n + k] * b.data[k * p + j];
            }
            data[i * p + j] = acc;
        }
    }

    Ok(Tensor::new(Shape::new(vec![m, p]), data)?)
}

/// Transpose a rank-2 tensor (matrix)
/// A: [m, n] -> A^T: [n, m]
pub fn transpose(a: &Tensor) -> EngineResult<Tensor> {
    if a.rank() != 2 {
        return Err(EngineError::RankError(
            "transpose expects rank-2 tensor (matrix)".into(),
        ));
    }

    let m = a.shape.dims[0];
    let n = a.shape.dims[1];

    let mut data = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            data[j * m + i] = a.data[i * n + j];
        }
    }

    Ok(Tensor::new(Shape::new(vec![n, m]), data)?)
}

/// Generalized dot product:
/// - vector . vector -> scalar tensor
/// - matrix . vector -> vector ([m,n] . [n] -> [m])
/// - vector . matrix -> vector ([n] . [n,p] -> [p])
/// - matrix . matrix -> matmul
pub fn dot(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    match (a.rank(), b.rank()) {
        (1, 1) => {
            ensure_same_shape(&a.shape, &b.shape)?;
            let acc: f32 = a.data.iter().zip(b.data.iter()).map(|(x, y)| x * y).sum();
            Ok(Tensor::scalar(acc))
        }
        (2, 1) => {
            let m = a.shape.dims[0];
            let n = a.shape.dims[1];
            if n != b.len() {
                return Err(EngineError::ShapeMismatch(format!(
                    "[{}x{}] . [{}]: inner dimensions must match",
                    m,
                    n,
                    b.len()
                )));
            }
            let mut data = Vec::with_capacity(m);
            for i in 0..m {
                let mut acc = 0.0;
                for k in 0..n {
                    acc += a.data[i * n + k] * b.data[k];
                }
                data.push(acc);
            }
            Ok(Tensor::new(Shape::new(vec![m]), data)?)
        }
        (1, 2) => {
            let n = b.shape.dims[0];
            let p = b.shape.dims[1];
            if a.len() != n {
                return Err(EngineError::ShapeMismatch(format!(
                    "[{}] . [{}x{}]: inner dimensions must match",
                    a.len(),
                    n,
                    p
                )));
            }
            let mut data = Vec::with_capacity(p);
            for j in 0..p {
                let mut acc = 0.0;
                for k in 0..n {
                    acc += a.data[k] * b.data[k * p + j];
                }
                data.push(acc);
            }
            Ok(Tensor::new(Shape::new(vec![p]), data)?)
        }
        (2, 2) => matmul(a, b),
        (ra, rb) => Err(EngineError::RankError(format!(
            "dot supports rank-1/rank-2 operands, got rank-{} and rank-{}",
            ra, rb
        ))),
    }
}

/// Outer product of two vectors: [m] x [n] -> [m, n]
pub fn outer(a: &Tensor, b: &Tensor) -> EngineResult<Tensor> {
    if a.rank() != 1 || b.rank() != 1 {
        return Err(EngineError::RankError("outer expects rank-1 tensors".into()));
    }
    let m = a.len();
    let n = b.len();
    let mut data = Vec::with_capacity(m * n);
    for &x in a.data.iter() {
        for &y in b.data.iter() {
            data.push(x * y);
        }
    }
    Ok(Tensor::new(Shape::new(vec![m, n]), data)?)
}

// ============================================================================
// SHAPE OPERATIONS
// ============================================================================

/// Reshape a tensor to a new shape (total elements must match)
pub fn reshape(a: &Tensor, new_shape: Shape) -> EngineResult<Tensor> {
    let old_elements = a.shape.num_elements();
    let new_elements = new_shape.num_elements();

    if old_elements != new_elements {
        return Err(EngineError::ShapeMismatch(format!(
            "cannot reshape: old shape {:?} has {} elements, new shape {:?} has {}",
            a.shape.dims, old_elements, new_shape.dims, new_elements
        )));
    }

    Ok(Tensor::new(new_shape, a.data.clone())?)
}

/// Flatten a tensor to rank-1 (vector)
pub fn flatten(a: &Tensor) -> EngineResult<Tensor> {
    let total = a.shape.num_elements();
    Ok(Tensor::new(Shape::new(vec![total]), a.data.clone())?)
}

/// Slice a tensor along one dimension, start (inclusive) to end (exclusive).
pub fn slice(a: &Tensor, dim: usize, start: usize, end: usize) -> EngineResult<Tensor> {
    if dim >= a.rank() {
        return Err(EngineError::AxisOutOfBounds {
            axis: dim,
            rank: a.rank(),
        });
    }
    if start >= end {
        return Err(EngineError::InvalidArgument(format!(
            "invalid slice range: start {} >= end {}",
            start, end
        )));
    }
    if end > a.shape.dims[dim] {
        return Err(EngineError::InvalidArgument(format!(
            "slice end {} exceeds dimension size {}",
            end, a.shape.dims[dim]
        )));
    }

    match a.rank() {
        1 => {
            let data = a.data[start..end].to_vec();
            Ok(Tensor::new(Shape::new(vec![end - start]), data)?)
        }
        2 => {
            let rows = a.shape.dims[0];
            let cols = a.shape.dims[1];

            if dim == 0 {
                let new_rows = end - start;
                let mut data = Vec::with_capacity(new_rows * cols);
                for i in start..end {
                    for j in 0..cols {
                        data.push(a.data[i * cols + j]);
                    }
                }
                Ok(Tensor::new(Shape::new(vec![new_rows, cols]), data)?)
            } else {
                let new_cols = end - start;
                let mut data = Vec::with_capacity(rows * new_cols);
                for i in 0..rows {
                    for j in start..end {
                        data.push(a.data[i * cols + j]);
                    }
                }
                Ok(Tensor::new(Shape::new(vec![rows, new_cols]), data)?)
            }
        }
        r => Err(EngineError::RankError(format!(
            "slice not implemented for rank-{} tensors",
            r
        ))),
    }
}

// ============================================================================
// NORMS & NORMALIZATION
// ============================================================================

/// Norma L2 de un tensor rank-1
pub fn l2_norm(a: &Tensor) -> EngineResult<f32> {
    if a.rank() != 1 {
        return Err(EngineError::RankError("l2_norm expects rank-1 tensor".into()));
    }
    Ok(a.data.iter().map(|x| x * x).sum::<f32>().sqrt())
}

/// Normaliza un tensor rank-1 a norma 1 (L2)
pub fn normalize(a: &Tensor) -> EngineResult<Tensor> {
    let norm = l2_norm(a)?;
    if norm == 0.0 {
        return Err(EngineError::InvalidArgument(
            "cannot normalize a zero vector".into(),
        ));
    }
    scalar_mul(a, 1.0 / norm)
}

/// Producto punto entre dos vectores, como f32 (used by similarity helpers).
pub fn dot_1d(a: &Tensor, b: &Tensor) -> EngineResult<f32> {
    if a.rank() != 1 || b.rank() != 1 {
        return Err(EngineError::RankError("dot_1d expects rank-1 tensors".into()));
    }
    ensure_same_shape(&a.shape, &b.shape)?;
    Ok(a.data.iter().zip(b.data.iter()).map(|(x, y)| x * y).sum())
}

/// Similitud coseno entre dos vectores
pub fn cosine_similarity(a: &Tensor, b: &Tensor) -> EngineResult<f32> {
    let dot_ab = dot_1d(a, b)?;
    let norm_a = l2_norm(a)?;
    let norm_b = l2_norm(b)?;

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(EngineError::InvalidArgument(
            "cannot compute cosine similarity with zero-norm vector".into(),
        ));
    }

    Ok(dot_ab / (norm_a * norm_b))
}

/// Distancia L2 entre dos vectores
pub fn distance(a: &Tensor, b: &Tensor) -> EngineResult<f32> {
    if a.rank() != 1 || b.rank() != 1 {
        return Err(EngineError::RankError("distance expects rank-1 tensors".into()));
    }
    ensure_same_shape(&a.shape, &b.shape)?;
    let sum_sq: f32 = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    Ok(sum_sq.sqrt())
}

/// Numerically stabilized softmax over a rank-1 tensor.
pub fn softmax(a: &Tensor) -> EngineResult<Tensor> {
    if a.rank() != 1 {
        return Err(EngineError::RankError("softmax expects rank-1 tensor".into()));
    }
    if a.is_empty() {
        return Err(EngineError::EmptyInput("softmax of an empty tensor".into()));
    }
    let max = a.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = a.data.iter().map(|&x| (x - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    let data: Vec<f32> = exps.into_iter().map(|e| e / total).collect();
    Ok(Tensor::new(a.shape.clone(), data)?)
}

/// Local response normalization over the last dimension:
///   out[i] = x[i] / (bias + alpha * sum(x[j]^2 for j in [i-r, i+r]))^beta
/// Rank-1 tensors are one lane; rank-2 tensors normalize each row.
/// Defaults: depth_radius 5, bias 1.0, alpha 1.0, beta 0.5.
pub fn local_response_normalization(
    a: &Tensor,
    depth_radius: Option<usize>,
    bias: Option<f32>,
    alpha: Option<f32>,
    beta: Option<f32>,
) -> EngineResult<Tensor> {
    let radius = depth_radius.unwrap_or(DEFAULT_LRN_DEPTH_RADIUS);
    let bias = bias.unwrap_or(DEFAULT_LRN_BIAS);
    let alpha = alpha.unwrap_or(DEFAULT_LRN_ALPHA);
    let beta = beta.unwrap_or(DEFAULT_LRN_BETA);

    // last-axis lanes: axis 0 for vectors, axis 1 (rows) for matrices
    let lane_axis = match a.rank() {
        1 => 0,
        2 => 1,
        r => {
            return Err(EngineError::RankError(format!(
                "local_response_normalization supports rank-1/rank-2, got rank-{}",
                r
            )))
        }
    };

    let mut out = vec![0.0; a.len()];
    for lane in lanes(a, lane_axis)? {
        let n = lane.len();
        for (pos, &idx) in lane.iter().enumerate() {
            let lo = pos.saturating_sub(radius);
            let hi = (pos + radius).min(n - 1);
            let sq_sum: f32 = (lo..=hi).map(|k| a.data[lane[k]] * a.data[lane[k]]).sum();
            out[idx] = a.data[idx] / (bias + alpha * sq_sum).powf(beta);
        }
    }
    Ok(Tensor::new(a.shape.clone(), out)?)
}
