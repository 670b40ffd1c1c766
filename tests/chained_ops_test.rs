// Parity between the chained surface and the direct-call catalog: for every
// operator, tensor.op(args) must deep-equal ops::op(&tensor, args), including
// the all-default (None) argument cases.

use mlbox::ops;
use mlbox::utils::testing::tensors_close;
use mlbox::{ChainedOps, Shape, Tensor};

fn vector() -> Tensor {
    Tensor::vector(vec![1.0, 4.0, 2.0, 8.0])
}

fn other() -> Tensor {
    Tensor::vector(vec![3.0, 4.0, 1.0, 8.0])
}

fn boolean() -> Tensor {
    Tensor::vector(vec![1.0, 0.0, 1.0, 0.0])
}

fn boolean_other() -> Tensor {
    Tensor::vector(vec![1.0, 1.0, 0.0, 0.0])
}

fn matrix() -> Tensor {
    Tensor::matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap()
}

#[test]
fn binary_arithmetic_parity() {
    let a = vector();
    let b = other();

    assert_eq!(a.add(&b).unwrap(), ops::add(&a, &b).unwrap());
    assert_eq!(a.sub(&b).unwrap(), ops::sub(&a, &b).unwrap());
    assert_eq!(a.multiply(&b).unwrap(), ops::multiply(&a, &b).unwrap());
    assert_eq!(a.divide(&b).unwrap(), ops::divide(&a, &b).unwrap());
    assert_eq!(a.maximum(&b).unwrap(), ops::maximum(&a, &b).unwrap());
    assert_eq!(a.minimum(&b).unwrap(), ops::minimum(&a, &b).unwrap());
    assert_eq!(a.scalar_mul(2.5).unwrap(), ops::scalar_mul(&a, 2.5).unwrap());
}

#[test]
fn comparison_parity() {
    let a = vector();
    let b = other();

    assert_eq!(a.equal(&b).unwrap(), ops::equal(&a, &b).unwrap());
    assert_eq!(a.not_equal(&b).unwrap(), ops::not_equal(&a, &b).unwrap());
    assert_eq!(a.less(&b).unwrap(), ops::less(&a, &b).unwrap());
    assert_eq!(a.less_equal(&b).unwrap(), ops::less_equal(&a, &b).unwrap());
    assert_eq!(a.greater(&b).unwrap(), ops::greater(&a, &b).unwrap());
    assert_eq!(
        a.greater_equal(&b).unwrap(),
        ops::greater_equal(&a, &b).unwrap()
    );
}

#[test]
fn logical_parity() {
    let a = boolean();
    let b = boolean_other();

    assert_eq!(a.logical_and(&b).unwrap(), ops::logical_and(&a, &b).unwrap());
    assert_eq!(a.logical_or(&b).unwrap(), ops::logical_or(&a, &b).unwrap());
    assert_eq!(a.logical_xor(&b).unwrap(), ops::logical_xor(&a, &b).unwrap());
    assert_eq!(a.logical_not().unwrap(), ops::logical_not(&a).unwrap());
}

#[test]
fn scan_parity_including_defaults() {
    let v = vector();
    let m = matrix();

    assert_eq!(
        v.cumsum(None, None, None).unwrap(),
        ops::cumsum(&v, None, None, None).unwrap()
    );
    assert_eq!(
        m.cumsum(Some(1), Some(true), Some(true)).unwrap(),
        ops::cumsum(&m, Some(1), Some(true), Some(true)).unwrap()
    );
    assert_eq!(
        v.cumprod(None, None, None).unwrap(),
        ops::cumprod(&v, None, None, None).unwrap()
    );
    assert_eq!(
        m.cumprod(Some(0), None, Some(true)).unwrap(),
        ops::cumprod(&m, Some(0), None, Some(true)).unwrap()
    );
}

#[test]
fn reduction_parity() {
    let v = vector();
    let m = matrix();
    let b = boolean();

    assert_eq!(v.sum(None, None).unwrap(), ops::sum(&v, None, None).unwrap());
    assert_eq!(
        m.sum(Some(0), Some(true)).unwrap(),
        ops::sum(&m, Some(0), Some(true)).unwrap()
    );
    assert_eq!(v.mean(None, None).unwrap(), ops::mean(&v, None, None).unwrap());
    assert_eq!(v.max(None, None).unwrap(), ops::max(&v, None, None).unwrap());
    assert_eq!(v.min(None, None).unwrap(), ops::min(&v, None, None).unwrap());
    assert_eq!(b.any(None, None).unwrap(), ops::any(&b, None, None).unwrap());
    assert_eq!(b.all(None, None).unwrap(), ops::all(&b, None, None).unwrap());
    assert_eq!(v.argmax().unwrap(), ops::argmax(&v).unwrap());
}

#[test]
fn matrix_parity() {
    let m = matrix();
    let v = Tensor::vector(vec![1.0, 1.0]);
    let u = Tensor::vector(vec![2.0, 3.0]);

    assert_eq!(m.matmul(&m).unwrap(), ops::matmul(&m, &m).unwrap());
    assert_eq!(m.transpose().unwrap(), ops::transpose(&m).unwrap());
    assert_eq!(m.dot(&v).unwrap(), ops::dot(&m, &v).unwrap());
    assert_eq!(v.dot(&u).unwrap(), ops::dot(&v, &u).unwrap());
    assert_eq!(v.outer(&u).unwrap(), ops::outer(&v, &u).unwrap());
}

#[test]
fn shape_parity() {
    let m = matrix();

    assert_eq!(
        m.reshape(Shape::new(vec![4])).unwrap(),
        ops::reshape(&m, Shape::new(vec![4])).unwrap()
    );
    assert_eq!(m.flatten().unwrap(), ops::flatten(&m).unwrap());
    assert_eq!(
        m.slice(0, 0, 1).unwrap(),
        ops::slice(&m, 0, 0, 1).unwrap()
    );
}

#[test]
fn normalization_parity() {
    let v = vector();

    assert_eq!(v.l2_norm().unwrap(), ops::l2_norm(&v).unwrap());
    assert!(tensors_close(
        &v.normalize().unwrap(),
        &ops::normalize(&v).unwrap(),
        0.0
    ));
    assert!(tensors_close(
        &v.softmax().unwrap(),
        &ops::softmax(&v).unwrap(),
        0.0
    ));
    assert_eq!(
        v.local_response_normalization(None, None, None, None).unwrap(),
        ops::local_response_normalization(&v, None, None, None, None).unwrap()
    );
    assert_eq!(
        v.local_response_normalization(Some(1), Some(2.0), Some(0.5), Some(0.75))
            .unwrap(),
        ops::local_response_normalization(&v, Some(1), Some(2.0), Some(0.5), Some(0.75)).unwrap()
    );
}

#[test]
fn chained_errors_match_direct_errors() {
    let a = Tensor::vector(vec![1.0, 2.0]);
    let b = Tensor::vector(vec![1.0, 2.0, 3.0]);

    let chained = a.add(&b).unwrap_err();
    let direct = ops::add(&a, &b).unwrap_err();
    assert_eq!(chained.to_string(), direct.to_string());
}
