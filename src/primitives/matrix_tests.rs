use super::*;

#[test]
fn test_from_vec() {
    let m: Matrix<f64> = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rows are uniform");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_from_rows_ragged() {
    // The second row is shorter than the first; construction is rejected
    // instead of silently trusting the first row's length.
    let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(
        result,
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows_empty() {
    let m = Matrix::<f64>::from_rows(vec![]).expect("no rows to validate");
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_ones() {
    let m = Matrix::ones(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert!(m.as_slice().iter().all(|&x| (x - 1.0).abs() < 1e-12));
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 1) - 1.0).abs() < 1e-12);
    assert!((m.get(2, 2) - 1.0).abs() < 1e-12);
    assert!((m.get(0, 1) - 0.0).abs() < 1e-12);
}

#[test]
fn test_get_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(0, 1, 5.0);
    assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row, Vector::from_slice(&[4.0, 5.0, 6.0]));
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.column(1);
    assert_eq!(col, Vector::from_slice(&[2.0, 5.0]));
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-12);
}

#[test]
fn test_add() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.add(&b).expect("both matrices are 2x2");

    assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
}

#[test]
fn test_add_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1.0; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(3, 2, vec![1.0; 6])
        .expect("test data has correct dimensions: 3*2=6 elements");
    assert!(matches!(
        a.add(&b),
        Err(LinealError::DimensionMismatch { .. })
    ));

    let c = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!(matches!(
        a.add(&c),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_sub() {
    let a = Matrix::from_vec(2, 2, vec![10.0, 8.0, 6.0, 12.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![4.0, 3.0, 2.0, 7.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.sub(&b).expect("both matrices are 2x2");

    assert_eq!(c.as_slice(), &[6.0, 5.0, 4.0, 5.0]);
}

#[test]
fn test_sub_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1.0; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!(matches!(
        a.sub(&b),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matmul() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rows are uniform");
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).expect("rows are uniform");
    let c = a.matmul(&b).expect("2x2 * 2x2 is well formed");

    // [1 2] [5 6]   [19 22]
    // [3 4] [7 8] = [43 50]
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_matmul_rectangular() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a.matmul(&b).expect("2x3 * 3x2 is well formed");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    assert!((c.get(0, 0) - 58.0).abs() < 1e-12);
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert!((c.get(0, 1) - 64.0).abs() < 1e-12);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1.0; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!(matches!(
        a.matmul(&b),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let result = m.matvec(&v).expect("matrix columns match vector length");

    // result[0] = 1*1 + 2*2 + 3*3 = 14
    // result[1] = 4*1 + 5*2 + 6*3 = 32
    assert_eq!(result, Vector::from_slice(&[14.0, 32.0]));
}

#[test]
fn test_matvec_dimension_mismatch() {
    let m = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let v = Vector::from_slice(&[1.0, 2.0]);
    assert!(matches!(
        m.matvec(&v),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let result = m.mul_scalar(2.0);
    assert_eq!(result.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_display() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).expect("rows are uniform");
    assert_eq!(format!("{m}"), "[1, 2]\n[3, 4.5]");
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let json = serde_json::to_string(&m).expect("matrix serializes");
    let back: Matrix<f64> = serde_json::from_str(&json).expect("matrix deserializes");
    assert_eq!(back, m);
}
