// =========================================================================
// FALSIFY-VEC: Vector arithmetic contract (lineal primitives)
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
//   - Anti-commutativity of the cross product: u x v = -(v x u)
// =========================================================================

use super::*;

/// FALSIFY-VEC-001: Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn falsify_vec_001_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v).expect("equal dimensions");
    let vu = v.dot(&u).expect("equal dimensions");

    assert!(
        (uv - vu).abs() < 1e-12,
        "FALSIFIED VEC-001: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VEC-002: Norm is non-negative and matches the 3-4-5 triangle
#[test]
fn falsify_vec_002_norm_nonneg() {
    let v = Vector::from_slice(&[-3.0, 4.0]);
    let n = v.norm();

    assert!(n >= 0.0, "FALSIFIED VEC-002: norm={n}, expected >= 0.0");
    assert!(
        (n - 5.0).abs() < 1e-12,
        "FALSIFIED VEC-002: norm of (-3,4)={n}, expected 5.0"
    );
}

/// FALSIFY-VEC-003: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_vec_003_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("equal dimensions").abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-12,
        "FALSIFIED VEC-003: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VEC-004: 3D cross product is anti-commutative: u x v = -(v x u)
#[test]
fn falsify_vec_004_cross_anticommutative() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 0.5, -1.0]);

    let uv = u.cross(&v).expect("both operands are 3D");
    let vu = v.cross(&u).expect("both operands are 3D");

    let uv = uv.as_vector().expect("3D cross product is a vector");
    let negated_vu = vu
        .as_vector()
        .expect("3D cross product is a vector")
        .mul_scalar(-1.0);

    for i in 0..3 {
        assert!(
            (uv[i] - negated_vu[i]).abs() < 1e-12,
            "FALSIFIED VEC-004: component {i}: {} != {}",
            uv[i],
            negated_vu[i]
        );
    }
}

/// FALSIFY-VEC-005: 3D cross product is orthogonal to both operands
#[test]
fn falsify_vec_005_cross_orthogonal() {
    let u = Vector::from_slice(&[2.0, -1.0, 0.5]);
    let v = Vector::from_slice(&[-3.0, 4.0, 1.0]);

    let cross = u.cross(&v).expect("both operands are 3D");
    let cross = cross.as_vector().expect("3D cross product is a vector");

    let du = cross.dot(&u).expect("equal dimensions");
    let dv = cross.dot(&v).expect("equal dimensions");

    assert!(
        du.abs() < 1e-12,
        "FALSIFIED VEC-005: dot(u x v, u)={du}, expected 0"
    );
    assert!(
        dv.abs() < 1e-12,
        "FALSIFIED VEC-005: dot(u x v, v)={dv}, expected 0"
    );
}
