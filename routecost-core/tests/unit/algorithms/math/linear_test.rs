use super::*;

fn create_labeled_data() -> (Vec<Vec<Float>>, Vec<Float>) {
    let features: Vec<Vec<Float>> = vec![
        vec![1., 2.],
        vec![2., 1.],
        vec![3., 5.],
        vec![4., 2.],
        vec![5., 8.],
        vec![6., 3.],
        vec![0., 1.],
        vec![7., 7.],
        vec![2., 9.],
        vec![8., 4.],
    ];
    let labels = features.iter().map(|row| 2. * row[0] - 3. * row[1] + 7.).collect();

    (features, labels)
}

#[test]
fn can_recover_linear_function_exactly() {
    let (features, labels) = create_labeled_data();

    let model = LinearRegression::fit(&features, &labels).expect("cannot fit model");

    assert!((model.coefficients()[0] - 2.).abs() < 1E-6);
    assert!((model.coefficients()[1] + 3.).abs() < 1E-6);
    assert!((model.intercept() - 7.).abs() < 1E-6);
}

#[test]
fn can_fit_deterministically() {
    let (features, labels) = create_labeled_data();

    let first = LinearRegression::fit(&features, &labels).expect("cannot fit model");
    let second = LinearRegression::fit(&features, &labels).expect("cannot fit model");

    assert_eq!(first.coefficients(), second.coefficients());
    assert_eq!(first.intercept(), second.intercept());
}

#[test]
fn can_predict_with_known_weights() {
    let model = LinearRegression::new(vec![1., 2.], 3.);

    assert_eq!(model.predict(&[4., 5.]), 17.);
}

#[test]
fn can_reject_empty_input() {
    assert!(LinearRegression::fit(&[], &[]).is_err());
}

#[test]
fn can_reject_mismatched_labels() {
    assert!(LinearRegression::fit(&[vec![1.], vec![2.]], &[1.]).is_err());
}

#[test]
fn can_reject_ragged_rows() {
    assert!(LinearRegression::fit(&[vec![1., 2.], vec![3.]], &[1., 2.]).is_err());
}

#[test]
fn can_detect_singular_normal_matrix() {
    let features = vec![vec![1., 0.], vec![2., 0.], vec![3., 0.]];
    let labels = vec![1., 2., 3.];

    assert!(LinearRegression::fit(&features, &labels).is_err());
}
