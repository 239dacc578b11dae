/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

#[macro_use] extern crate fixmat_assert_close;

use fixmat::{Matrix, Vector, M22, M33, M44, MatrixError};
use fixmat::prelude::*;
use rand::Rng;

fn random_matrix<const R: usize, const C: usize>(rng: &mut impl Rng) -> Matrix<R, C> {
    Matrix::from_fn(|_, _| rng.gen_range(-10.0, 10.0))
}

#[test]
fn equality_is_reflexive_and_tolerance_is_monotone() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a: Matrix<3, 5> = random_matrix(&mut rng);
        let b: Matrix<3, 5> = random_matrix(&mut rng);
        assert!(a == a);
        assert!(!(a != a));
        assert_eq!(a.equals(&b, 0.0), a == b);

        let diff = a.max_abs_diff(&b);
        assert!(a.equals(&b, diff));
        assert!(a.equals(&b, diff * 2.0));
        assert!(!a.equals(&b, diff / 2.0));
    }
}

#[test]
fn transpose_and_identity() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a: Matrix<4, 2> = random_matrix(&mut rng);
        assert_eq!(a.t().t(), a);
        assert_eq!(fixmat::transpose(&a), a.t());
        assert_eq!(&a * &M22::IDENTITY, a);
        assert_eq!(&Matrix::<4, 4>::IDENTITY * &a, a);
    }
}

#[test]
fn product_transposes() {
    let mut rng = rand::thread_rng();
    let a: Matrix<2, 3> = random_matrix(&mut rng);
    let b: Matrix<3, 4> = random_matrix(&mut rng);
    // (AB)^T = B^T A^T, with identical summation order per element
    assert_eq!((&a * &b).t(), &b.t() * &a.t());
}

#[test]
fn random_inverses_round_trip() {
    let _ = env_logger::try_init();
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let m2: M22 = random_matrix(&mut rng);
        let m3: M33 = random_matrix(&mut rng);
        let m4: M44 = random_matrix(&mut rng);

        if m2.det().abs() > 1.0 {
            assert!((&m2 * &m2.inverse().unwrap()).equals(&M22::IDENTITY, 1e-9));
        }
        if m3.det().abs() > 10.0 {
            assert!((&m3 * &m3.inverse().unwrap()).equals(&M33::IDENTITY, 1e-9));
        }
        if m4.det().abs() > 100.0 {
            assert!((&m4 * &m4.inverse().unwrap()).equals(&M44::IDENTITY, 1e-9));
        }
    }
}

#[test]
fn inverse_of_inverse() {
    let m = Matrix([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    let back = fixmat::inv(&fixmat::inv(&m).unwrap()).unwrap();
    assert_close!(abs=1e-12, back, m);
}

#[test]
fn singular_inversion_is_an_error() {
    let m = Matrix([[2.0, 4.0], [1.0, 2.0]]);
    match m.inverse() {
        Err(MatrixError::SingularMatrix { det }) => assert_eq!(det, 0.0),
        other => panic!("{:?}", other),
    }
}

#[test]
fn direct_sum_blocks() {
    let mut rng = rand::thread_rng();
    let ul: Matrix<2, 3> = random_matrix(&mut rng);
    let lr: Matrix<3, 1> = random_matrix(&mut rng);
    let sum: Matrix<5, 4> = fixmat::direct_sum(&ul, &lr);

    let mut ul_back = Matrix::<2, 3>::ZERO;
    let mut lr_back = Matrix::<3, 1>::ZERO;
    sum.get_sub_matrix(&mut ul_back, 0, 0).unwrap();
    sum.get_sub_matrix(&mut lr_back, 2, 3).unwrap();
    assert_eq!(ul_back, ul);
    assert_eq!(lr_back, lr);

    let mut upper_right = Matrix([[9.0], [9.0]]);
    sum.get_sub_matrix(&mut upper_right, 0, 3).unwrap();
    assert_eq!(upper_right, Matrix::ZERO);
    let mut lower_left = Matrix::<3, 3>::IDENTITY;
    sum.get_sub_matrix(&mut lower_left, 2, 0).unwrap();
    assert_eq!(lower_left, Matrix::ZERO);
}

#[test]
fn rows_and_columns_round_trip() {
    let mut rng = rand::thread_rng();
    let m: Matrix<3, 4> = random_matrix(&mut rng);

    for r in 0..3 {
        let row = m.row(r).unwrap();
        let mut copy = Matrix::<3, 4>::ZERO;
        copy.set_row(r, &row).unwrap();
        assert_eq!(copy.row(r).unwrap(), row);
        assert_eq!(row.0[0], m.0[r]);
    }
    for c in 0..4 {
        let column = m.column(c).unwrap();
        let mut copy = m;
        copy.set_column(c, &Matrix::ZERO).unwrap();
        copy.set_column(c, &column).unwrap();
        assert_eq!(copy, m);
    }
    assert_eq!(m.column(4), Err(MatrixError::OutOfRange { row: 0, col: 4, rows: 3, cols: 4 }));
}

#[test]
fn row_views_write_through() {
    let mut m = Matrix([[1, 2, 3], [4, 5, 6]]);
    m[1][2] = 23;
    assert_eq!(*m.at(1, 2), 23);
    *m.at_mut(0, 0) = -1;
    assert_eq!(m[0], [-1, 2, 3]);
    assert!(m.try_at(2, 0).is_err());
}

#[test]
fn homogeneous_transform() {
    let mut t = M44::translation(&Vector([1.0, 2.0, 3.0]));
    t.rotate_z(std::f64::consts::PI);
    let p = t.mul_homogeneous(&Vector([1.0, 0.0, 0.0])).dehomogenize();
    assert_close!(abs=1e-12, p, Vector([0.0, 2.0, 3.0]));
}
