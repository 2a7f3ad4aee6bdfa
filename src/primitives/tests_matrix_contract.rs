// =========================================================================
// FALSIFY-MX: Matrix algebra contract (matriz primitives)
//
// Each test tries to falsify one algebraic law of the container; the
// proptest section repeats the laws over randomized shapes and contents.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

use num_complex::Complex;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let att = a.trans().expect("square").trans().expect("square");

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-6,
                "FALSIFIED MX-001: (A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Addition commutes: A + B = B + A
#[test]
fn falsify_mx_002_add_commutes() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.0, 0.5, 4.0, 7.0]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![9.0, 1.0, -3.5, 2.0, 0.0, 6.0]).expect("valid");

    assert_eq!(
        a.add(&b).expect("same shape"),
        b.add(&a).expect("same shape"),
        "FALSIFIED MX-002: A+B != B+A"
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::eye(3);
    let result = a.matmul(&eye).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (result.get(i, j) - a.get(i, j)).abs() < 1e-5,
                "FALSIFIED MX-004: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                result.get(i, j),
                a.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-005: Hermitian transpose: A^H[i,j] = conj(A[j,i]), (A^H)^H = A
#[test]
fn falsify_mx_005_hermitian_transpose() {
    let a = Matrix::from_vec(
        2,
        2,
        vec![
            Complex::new(1.0_f64, 2.0),
            Complex::new(-3.0, 0.5),
            Complex::new(0.0, -4.0),
            Complex::new(5.0, 6.0),
        ],
    )
    .expect("valid");
    let h = a.trans().expect("square");

    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(
                h.get(i, j),
                a.get(j, i).conj(),
                "FALSIFIED MX-005: A^H[{i},{j}] != conj(A[{j},{i}])"
            );
        }
    }
    assert_eq!(
        h.trans().expect("square"),
        a,
        "FALSIFIED MX-005: (A^H)^H != A"
    );
}

/// FALSIFY-MX-006: Failing operations leave both operands untouched
#[test]
fn falsify_mx_006_failed_ops_do_not_mutate() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 3, vec![2.0; 9]).expect("valid");
    let (a0, b0) = (a.clone(), b.clone());

    assert!(a.add(&b).is_err());
    assert!(b.sub(&a).is_err());
    assert!(b.matmul(&a).is_err());
    assert!(a.trans().is_err());

    assert_eq!(a, a0, "FALSIFIED MX-006: left operand mutated");
    assert_eq!(b, b0, "FALSIFIED MX-006: right operand mutated");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            n in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..n * n)
                .map(|i| (f64::from(i as u32 + seed) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let att = a.trans().expect("square").trans().expect("square");

            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-002-prop: Addition commutes for random shapes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_002_prop_add_commutes(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let fill = |offset: u32| -> Vec<f64> {
                (0..rows * cols)
                    .map(|i| (f64::from(i as u32 + seed + offset) * 0.59).cos() * 5.0)
                    .collect()
            };
            let a = Matrix::from_vec(rows, cols, fill(0)).expect("valid");
            let b = Matrix::from_vec(rows, cols, fill(1000)).expect("valid");

            prop_assert_eq!(
                a.add(&b).expect("same shape"),
                b.add(&a).expect("same shape"),
                "FALSIFIED MX-002-prop: A+B != B+A"
            );
        }
    }

    /// FALSIFY-MX-005-prop: Hermitian law for random square complex matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_005_prop_hermitian(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<Complex<f64>> = (0..n * n)
                .map(|i| {
                    let t = f64::from(i as u32 + seed) * 0.41;
                    Complex::new(t.sin() * 3.0, t.cos() * 3.0)
                })
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let h = a.trans().expect("square");

            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(
                        h.get(i, j),
                        a.get(j, i).conj(),
                        "FALSIFIED MX-005-prop: A^H[{},{}] != conj(A[{},{}])",
                        i, j, j, i
                    );
                }
            }
            prop_assert_eq!(h.trans().expect("square"), a, "FALSIFIED MX-005-prop: (A^H)^H != A");
        }
    }
}
