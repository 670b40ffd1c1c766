use mlbox::ops;
use mlbox::utils::testing::tensors_close;
use mlbox::{Shape, Tensor};

#[test]
fn arithmetic_scenario() {
    let a = Tensor::vector(vec![1.0, 0.0, 0.0]);
    let b = Tensor::vector(vec![0.0, 1.0, 0.0]);
    let c = Tensor::vector(vec![1.0, 1.0, 0.0]);

    let sum = ops::add(&a, &b).unwrap();
    assert_eq!(sum.data, vec![1.0, 1.0, 0.0]);

    let sim = ops::cosine_similarity(&a, &c).unwrap();
    assert!((sim - 1.0 / 2f32.sqrt()).abs() < 1e-6);

    let half = ops::scalar_mul(&a, 0.5).unwrap();
    assert_eq!(half.data, vec![0.5, 0.0, 0.0]);
}

#[test]
fn scan_defaults_match_explicit_defaults() {
    let v = Tensor::vector(vec![1.0, 2.0, 3.0, 4.0]);

    let defaulted = ops::cumsum(&v, None, None, None).unwrap();
    let explicit = ops::cumsum(&v, Some(0), Some(false), Some(false)).unwrap();
    assert!(tensors_close(&defaulted, &explicit, 0.0));
    assert_eq!(defaulted.data, vec![1.0, 3.0, 6.0, 10.0]);

    let prod = ops::cumprod(&v, None, None, None).unwrap();
    assert_eq!(prod.data, vec![1.0, 2.0, 6.0, 24.0]);
}

#[test]
fn reductions_and_reshape_pipeline() {
    let m = Tensor::matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    let col_sums = ops::sum(&m, Some(0), None).unwrap();
    assert_eq!(col_sums.data, vec![5.0, 7.0, 9.0]);

    let reshaped = ops::reshape(&m, Shape::new(vec![3, 2])).unwrap();
    assert_eq!(reshaped.shape.dims, vec![3, 2]);

    let flat = ops::flatten(&m).unwrap();
    assert_eq!(flat.rank(), 1);
    assert_eq!(flat.len(), 6);

    assert!(ops::reshape(&m, Shape::new(vec![4, 2])).is_err());
}

#[test]
fn comparison_logical_pipeline() {
    let a = Tensor::vector(vec![1.0, 5.0, 2.0]);
    let b = Tensor::vector(vec![3.0, 5.0, 1.0]);

    let lt = ops::less(&a, &b).unwrap();
    let eq = ops::equal(&a, &b).unwrap();
    let either = ops::logical_xor(&lt, &eq).unwrap();
    assert_eq!(either.data, vec![1.0, 1.0, 0.0]);

    let found = ops::any(&either, None, None).unwrap();
    assert_eq!(found.data, vec![1.0]);

    let all_match = ops::all(&eq, None, None).unwrap();
    assert_eq!(all_match.data, vec![0.0]);
}

#[test]
fn lrn_explicit_parameters() {
    let v = Tensor::vector(vec![2.0, 0.0, 0.0]);
    // radius 0: each element normalized only by itself
    let out = ops::local_response_normalization(&v, Some(0), Some(1.0), Some(1.0), Some(0.5))
        .unwrap();
    assert!((out.data[0] - 2.0 / 5f32.sqrt()).abs() < 1e-6);
    assert_eq!(out.data[1], 0.0);
}

#[test]
fn engine_errors_are_descriptive() {
    let a = Tensor::vector(vec![1.0, 2.0]);
    let b = Tensor::vector(vec![1.0, 2.0, 3.0]);

    let err = ops::add(&a, &b).unwrap_err();
    assert!(err.to_string().contains("Shape mismatch"));

    let err = ops::cumsum(&a, Some(3), None, None).unwrap_err();
    assert!(err.to_string().contains("Axis 3"));
}
