// =========================================================================
// FALSIFY-MAT: Matrix arithmetic contract (lineal primitives)
//
// References:
//   - Associativity of the matrix product: (AB)v = A(Bv)
//   - Identity law: I*A = A, I*v = v
// =========================================================================

use super::*;

/// FALSIFY-MAT-001: Matrix addition is commutative: A + B = B + A
#[test]
fn falsify_mat_001_add_commutative() {
    let a = Matrix::from_rows(vec![vec![1.0, -2.0], vec![0.5, 4.0]]).expect("rows are uniform");
    let b = Matrix::from_rows(vec![vec![3.0, 7.0], vec![-1.0, 2.5]]).expect("rows are uniform");

    let ab = a.add(&b).expect("equal shapes");
    let ba = b.add(&a).expect("equal shapes");

    for (x, y) in ab.as_slice().iter().zip(ba.as_slice()) {
        assert!(
            (x - y).abs() < 1e-12,
            "FALSIFIED MAT-001: A+B entry {x} != B+A entry {y}"
        );
    }
}

/// FALSIFY-MAT-002: (AB)v = A(Bv) for compatible shapes
#[test]
fn falsify_mat_002_product_associative() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 0.5, -2.0, 3.0, 1.0, 0.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![2.0, -1.0, 0.0, 4.0, 1.5, 1.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let v = Vector::from_slice(&[1.0, -3.0]);

    let grouped_left = a
        .matmul(&b)
        .expect("2x3 * 3x2 is well formed")
        .matvec(&v)
        .expect("matrix columns match vector length");
    let grouped_right = a
        .matvec(&b.matvec(&v).expect("matrix columns match vector length"))
        .expect("matrix columns match vector length");

    for i in 0..2 {
        assert!(
            (grouped_left[i] - grouped_right[i]).abs() < 1e-9,
            "FALSIFIED MAT-002: component {i}: {} != {}",
            grouped_left[i],
            grouped_right[i]
        );
    }
}

/// FALSIFY-MAT-003: The identity matrix is neutral for matmul and matvec
#[test]
fn falsify_mat_003_identity_neutral() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rows are uniform");
    let v = Vector::from_slice(&[5.0, -6.0]);
    let eye = Matrix::eye(2);

    let ia = eye.matmul(&a).expect("2x2 * 2x2 is well formed");
    assert_eq!(ia, a, "FALSIFIED MAT-003: I*A != A");

    let iv = eye.matvec(&v).expect("matrix columns match vector length");
    assert_eq!(iv, v, "FALSIFIED MAT-003: I*v != v");
}

/// FALSIFY-MAT-004: Transposing twice restores the matrix
#[test]
fn falsify_mat_004_transpose_involution() {
    let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let round_trip = m.transpose().transpose();
    assert_eq!(round_trip, m, "FALSIFIED MAT-004: (M^T)^T != M");
}
