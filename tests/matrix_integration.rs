//! End-to-end tests through the public API.

use matriz::prelude::*;

#[test]
fn arithmetic_pipeline() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("2*2=4 elements");

    // ((A + B) - B) * B == A * B
    let left = a
        .add(&b)
        .and_then(|sum| sum.sub(&b))
        .and_then(|diff| diff.matmul(&b))
        .expect("shapes stay 2x2 throughout");
    let right = a.matmul(&b).expect("inner dimensions match");
    assert_eq!(left, right);

    assert_eq!(
        right,
        Matrix::from_vec(2, 2, vec![19.0, 22.0, 43.0, 50.0]).unwrap()
    );
}

#[test]
fn every_error_kind_is_reachable() {
    assert_eq!(
        Matrix::<f64>::zeros(0, 3).unwrap_err(),
        MatrizError::IllegalSize { rows: 0, cols: 3 }
    );
    assert_eq!(
        Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err(),
        MatrizError::Creation {
            rows: 2,
            cols: 2,
            len: 3
        }
    );

    let a = Matrix::<f64>::zeros(2, 2).unwrap();
    let wide = Matrix::<f64>::zeros(2, 3).unwrap();
    assert_eq!(
        a.add(&wide).unwrap_err(),
        MatrizError::Sum {
            left: (2, 2),
            right: (2, 3)
        }
    );
    assert_eq!(
        wide.matmul(&a).unwrap_err(),
        MatrizError::Mul {
            left: (2, 3),
            right: (2, 2)
        }
    );
    assert_eq!(
        wide.trans().unwrap_err(),
        MatrizError::Trans { rows: 2, cols: 3 }
    );
}

#[test]
fn hermitian_round_trip() {
    let m = Matrix::from_vec(
        3,
        3,
        vec![
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 1.0),
            Complex::new(0.0, -3.0),
            Complex::new(2.0, -1.0),
            Complex::new(4.0, 0.0),
            Complex::new(1.0, 1.0),
            Complex::new(0.0, 3.0),
            Complex::new(1.0, -1.0),
            Complex::new(-2.0, 0.0),
        ],
    )
    .expect("3*3=9 elements");

    // This matrix is Hermitian, so A^H == A.
    assert_eq!(m.trans().expect("square"), m);
}

#[test]
fn display_renders_tab_separated_rows() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("2*3=6 elements");
    let rendered = m.to_string();
    assert_eq!(rendered, "1\t2\t3\n4\t5\t6\n");
    assert_eq!(rendered.lines().count(), 2);
}

#[test]
fn iteration_supports_generic_traversal() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("2*2=4 elements");
    let doubled: Vec<i32> = m.iter().map(|&x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
    assert_eq!(m.iter().copied().max(), Some(4));
}
