/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! The self-checks of the matrix kernel, one function per scenario.
//!
//! Every check dumps its operands with `Display` when it fails.

use fixmat_array_types::{Matrix, Vector, M22, M33, M44, MatrixError};
use fixmat_array_types::{transpose, Inverse};

use crate::config::Settings;
use crate::harness::{Check, Outcome};

/// All checks, in the order they are run.
pub const ALL: &[Check] = &[
    Check { name: "equality", run: equality },
    Check { name: "equals-with-tolerance", run: equals_with_tolerance },
    Check { name: "copy", run: copy },
    Check { name: "identity-and-zero", run: identity_and_zero },
    Check { name: "addition", run: addition },
    Check { name: "subtraction", run: subtraction },
    Check { name: "row-index", run: row_index },
    Check { name: "rows-and-columns", run: rows_and_columns },
    Check { name: "transpose", run: transpose_check },
    Check { name: "multiplication", run: multiplication },
    Check { name: "matrix-times-vector", run: matrix_times_vector },
    Check { name: "matrix4x4-times-vector3", run: matrix4x4_times_vector3 },
    Check { name: "checked-access", run: checked_access },
    Check { name: "get-sub-matrix", run: get_sub_matrix },
    Check { name: "set-sub-matrix", run: set_sub_matrix },
    Check { name: "inverse-2x2", run: inverse_2x2 },
    Check { name: "inverse-3x3", run: inverse_3x3 },
    Check { name: "inverse-4x4", run: inverse_4x4 },
    Check { name: "set-from-iter", run: set_from_iter },
    Check { name: "direct-sum", run: direct_sum },
    Check { name: "rotation", run: rotation },
];

const DATA_2X3: [[f64; 3]; 2] = [[1., 2., 3.], [4., 5., 6.]];

const TRANSFORM: M44 = Matrix([
    [0.6555, 0.2769, 0.6948, 0.4387],
    [0.1712, 0.0462, 0.3171, 0.3816],
    [0.7060, 0.0971, 0.9502, 0.7655],
    [0.0, 0.0, 0.0, 1.0],
]);

const TRANSFORMED: Vector<4> = Vector([
    1.0064414500000000707302660885034,
    0.57752579999999997806270357614267,
    1.3684200999999998060729922144674,
    1.0,
]);

fn equality(_: &Settings) -> Outcome {
    let m0 = Matrix(DATA_2X3);
    let m0_copy = Matrix(DATA_2X3);
    let ok = m0 == m0_copy && !(m0 != m0_copy);
    Outcome::from_bool(ok, || format!("m0\n{}m0_copy\n{}", m0, m0_copy))
}

fn equals_with_tolerance(settings: &Settings) -> Outcome {
    let tol = settings.tolerance.equals;
    let m0 = Matrix(DATA_2X3);
    let mut nudged = m0;
    nudged[1][2] += tol / 2.0;

    let ok = true
        && m0.equals(&m0, 0.0)
        && m0.equals(&nudged, tol)
        && !m0.equals(&nudged, tol / 4.0);
    Outcome::from_bool(ok, || format!("m0\n{}nudged\n{}tolerance: {:e}", m0, nudged, tol))
}

fn copy(_: &Settings) -> Outcome {
    let m0 = Matrix(DATA_2X3);
    let mut m1 = m0;
    let ok_before = m1 == m0;
    m1[0][0] = 42.0;
    let ok = ok_before && m0[0][0] == 1.0 && m1 != m0;
    Outcome::from_bool(ok, || format!("original\n{}copy\n{}", m0, m1))
}

fn identity_and_zero(_: &Settings) -> Outcome {
    let identity = Matrix::<5, 5>::IDENTITY;
    let zero = Matrix::<5, 2>::ZERO;

    let id_correct = Matrix::<5, 5>::from_fn(|r, c| if r == c { 1.0 } else { 0.0 });
    let zero_correct = Matrix([[0.0; 2]; 5]);

    let ok = identity == id_correct && zero == zero_correct;
    Outcome::from_bool(ok, || format!("identity\n{}zero\n{}", identity, zero))
}

fn addition(_: &Settings) -> Outcome {
    let m0 = Matrix([[1., 2.], [3., 4.]]);
    let m1 = Matrix([[2., 3.], [4., 5.]]);
    let expected = Matrix([[3., 5.], [7., 9.]]);

    let sum = m0 + m1;
    let mut accumulated = m0;
    accumulated += m1;
    Outcome::from_bool(sum == expected && accumulated == expected, || {
        format!("m0 + m1\n{}m0 += m1\n{}expected\n{}", sum, accumulated, expected)
    })
}

fn subtraction(_: &Settings) -> Outcome {
    let m0 = Matrix([[3., 5.], [7., 9.]]);
    let m1 = Matrix([[2., 3.], [4., 5.]]);
    let expected = Matrix([[1., 2.], [3., 4.]]);

    let difference = m0 - m1;
    let mut accumulated = m0;
    accumulated -= m1;
    Outcome::from_bool(difference == expected && accumulated == expected, || {
        format!("m0 - m1\n{}m0 -= m1\n{}expected\n{}", difference, accumulated, expected)
    })
}

fn row_index(_: &Settings) -> Outcome {
    let mut m0 = Matrix(DATA_2X3);
    let read_ok = m0[1][1] == 5.0 && m0[1][1] == *m0.at(1, 1);
    m0[1][2] = 23.0;
    let ok = read_ok && *m0.at(1, 2) == 23.0;
    Outcome::from_bool(ok, || format!("m0\n{}m0[1][1] = {}, m0.at(1, 1) = {}", m0, m0[1][1], m0.at(1, 1)))
}

fn rows_and_columns(_: &Settings) -> Outcome {
    Outcome::guard(|| -> Result<_, MatrixError> {
        let m = Matrix(DATA_2X3);

        let mut m_row = Matrix::<1, 3>::ZERO;
        m.get_row(1, &mut m_row)?;
        let mut m_column = Matrix::<2, 1>::ZERO;
        m.get_column(2, &mut m_column)?;
        let read_ok = m_row == Matrix([[4., 5., 6.]]) && m_column == Matrix([[3.], [6.]]);

        let mut mr = m;
        mr.set_row(0, &Matrix([[3., 2., 5.]]))?;
        let mut mc = m;
        mc.set_column(1, &Matrix([[5.], [2.]]))?;

        let expected_mr = Matrix([[3., 2., 5.], [4., 5., 6.]]);
        let expected_mc = Matrix([[1., 5., 3.], [4., 2., 6.]]);
        let out_of_range = m.row(2).is_err() && m.column(3).is_err();

        let ok = read_ok && mr == expected_mr && mc == expected_mc && out_of_range;
        Ok(Outcome::from_bool(ok, || format!(
            "M\n{}M_row\n{}M_column\n{}Mr\n{}Mc\n{}",
            m, m_row, m_column, mr, mc,
        )))
    })
}

fn transpose_check(_: &Settings) -> Outcome {
    Outcome::guard(|| -> Result<_, MatrixError> {
        let m0 = Matrix(DATA_2X3);
        let m0t = transpose(&m0);

        // a column-major load of the row-major data is the transpose
        let mut m1 = Matrix::<3, 2>::ZERO;
        m1.set_from_iter(DATA_2X3.iter().flatten().copied(), false)?;

        let ok = m1 == m0t && m0t.t() == m0;
        Ok(Outcome::from_bool(ok, || format!("column-major load\n{}transpose\n{}", m1, m0t)))
    })
}

fn multiplication(_: &Settings) -> Outcome {
    let mul0 = Matrix([[1., 0., 2.], [-1., 3., 1.]]);
    let mul1 = Matrix([[3., 1.], [2., 1.], [1., 0.]]);
    let expected = Matrix([[5., 1.], [4., 2.]]);

    let mut result = M22::ZERO;
    result.multiply(&mul0, &mul1);
    let by_operator = &mul0 * &mul1;

    let square0 = Matrix([[1., 0.], [2., -1.]]);
    let square1 = Matrix([[3., 1.], [2., 1.]]);
    let mut in_place = square0;
    in_place *= square1;

    let ok = true
        && result == expected
        && by_operator == expected
        && &result * &M22::IDENTITY == result
        && in_place == Matrix([[3., 1.], [4., 1.]]);

    Outcome::from_bool(ok, || format!(
        "M0\n{}M1\n{}result\n{}M0 * M1\n{}M0 *= M1 (2x2)\n{}",
        mul0, mul1, result, by_operator, in_place,
    ))
}

fn matrix_times_vector(settings: &Settings) -> Outcome {
    let v = Vector([0.1869, 0.4898, 0.4456, 1.0]);
    let result = &TRANSFORM * v;
    Outcome::from_bool(result.equals(&TRANSFORMED, settings.tolerance.homogeneous), || format!(
        "A\n{}v              {}\nresult         {}\ncorrect result {}",
        TRANSFORM, v, result, TRANSFORMED,
    ))
}

fn matrix4x4_times_vector3(settings: &Settings) -> Outcome {
    let v = Vector([0.1869, 0.4898, 0.4456]);
    let result = TRANSFORM.mul_homogeneous(&v);
    let projected = result.dehomogenize();

    let tol = settings.tolerance.homogeneous;
    let expected_xyz = Vector([TRANSFORMED[0], TRANSFORMED[1], TRANSFORMED[2]]);
    let ok = result.equals(&TRANSFORMED, tol) && projected.equals(&expected_xyz, tol);
    Outcome::from_bool(ok, || format!(
        "A\n{}v              {}\nresult         {}\ncorrect result {}\ndiff           {}",
        TRANSFORM, v, result, TRANSFORMED, result - TRANSFORMED,
    ))
}

fn checked_access(_: &Settings) -> Outcome {
    let m = Matrix::<3, 2>::ZERO;
    let expected_err = MatrixError::OutOfRange { row: 3, col: 2, rows: 3, cols: 2 };

    let ok = true
        && m.try_at(3, 2) == Err(expected_err.clone())
        && m.try_at(1, 1).is_ok()
        && m.get(3).is_none();
    Outcome::from_bool(ok, || format!("try_at(3, 2) gave {:?}, expected {}", m.try_at(3, 2), expected_err))
}

fn get_sub_matrix(_: &Settings) -> Outcome {
    Outcome::guard(|| -> Result<_, MatrixError> {
        let src = Matrix(DATA_2X3);
        let mut sub = Matrix::<1, 2>::ZERO;
        src.get_sub_matrix(&mut sub, 1, 1)?;

        let expected = Matrix([[5., 6.]]);
        Ok(Outcome::from_bool(sub == expected, || format!("sub\n{}expected\n{}", sub, expected)))
    })
}

fn set_sub_matrix(_: &Settings) -> Outcome {
    Outcome::guard(|| -> Result<_, MatrixError> {
        let mut dest = Matrix(DATA_2X3);
        dest.set_sub_matrix(&Matrix([[7., 8.], [9., 0.]]), 0, 1)?;

        let expected = Matrix([[1., 7., 8.], [4., 9., 0.]]);
        Ok(Outcome::from_bool(dest == expected, || format!("result\n{}expected\n{}", dest, expected)))
    })
}

/// Try for an exact match first; fall back to `tolerance`.
fn compare_inverse<const N: usize>(
    m: &Matrix<N, N>,
    expected: &Matrix<N, N>,
    tolerance: f64,
) -> Outcome
where Matrix<N, N>: Inverse<Scalar=f64>,
{
    Outcome::guard(|| -> Result<_, MatrixError> {
        let mut inverse = Matrix::ZERO;
        m.inverse_into(&mut inverse)?;

        if inverse == *expected {
            return Ok(Outcome::Pass);
        }
        info!("{}x{} inverse: not exact at maximum precision, retrying with tolerance {:e}", N, N, tolerance);
        Ok(Outcome::from_bool(inverse.equals(expected, tolerance), || format!(
            "M\n{}inverse (computed)\n{}inverse (correct)\n{}diff\n{:e}",
            m, inverse, expected, inverse - *expected,
        )))
    })
}

fn inverse_2x2(settings: &Settings) -> Outcome {
    let m = Matrix([[1., 3.], [4., 2.]]);
    let expected = Matrix([[-0.2, 0.3], [0.4, -0.1]]);
    compare_inverse(&m, &expected, settings.tolerance.inverse_2x2)
        .and_then(|| singular_is_rejected(&Matrix([[1., 2.], [2., 4.]])))
}

fn inverse_3x3(settings: &Settings) -> Outcome {
    let m: M33 = Matrix([[8., 1., 6.], [3., 5., 7.], [4., 9., 2.]]);
    let expected = Matrix([
        [ 0.14722222222222222222222222222222, -0.14444444444444444444444444444444,  0.063888888888888888888888888888889],
        [-0.061111111111111111111111111111111, 0.022222222222222222222222222222222, 0.10555555555555555555555555555556],
        [-0.019444444444444444444444444444444, 0.18888888888888888888888888888889, -0.10277777777777777777777777777778],
    ]);
    compare_inverse(&m, &expected, settings.tolerance.inverse_3x3)
        .and_then(|| singular_is_rejected(&Matrix([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]])))
}

fn inverse_4x4(settings: &Settings) -> Outcome {
    let m: M44 = Matrix([
        [17., 24.,  1.,  8.],
        [23.,  5.,  7., 14.],
        [ 4.,  6., 13., 20.],
        [10., 12., 19., 21.],
    ]);
    let expected = Matrix([
        [-5.780346820809248e-03,  4.962205424633170e-02, -4.811027123165852e-02,  1.493997332147622e-02],
        [ 4.277456647398844e-02, -3.797243219208537e-02, -1.013783903957314e-02,  1.867496665184526e-02],
        [-3.930635838150288e-02, -1.333926189417519e-02, -1.333036905291240e-01,  1.508225878168074e-01],
        [ 1.387283236994219e-02,  1.013783903957314e-02,  1.493108048021343e-01, -1.066251667407737e-01],
    ]);
    compare_inverse(&m, &expected, settings.tolerance.inverse_4x4)
        .and_then(|| singular_is_rejected(&M44::ZERO))
}

fn singular_is_rejected<const N: usize>(m: &Matrix<N, N>) -> Outcome
where Matrix<N, N>: Inverse<Scalar=f64>,
{
    let mut out = Matrix::IDENTITY;
    let result = m.inverse_into(&mut out);
    let ok = matches!(result, Err(MatrixError::SingularMatrix { .. })) && out == Matrix::IDENTITY;
    Outcome::from_bool(ok, || format!("singular matrix\n{}was not rejected ({:?})", m, result))
}

fn set_from_iter(_: &Settings) -> Outcome {
    Outcome::guard(|| -> Result<_, MatrixError> {
        let data: Vec<f64> = (0..16).map(f64::from).collect();
        let expected = Matrix::<4, 4>::from_fn(|r, c| (4 * r + c) as f64);

        let mut row_major = M44::ZERO;
        row_major.set_from_iter(data.iter().copied(), true)?;
        let mut column_major = M44::ZERO;
        column_major.set_from_iter(data.iter().copied(), false)?;

        let mut short = M44::IDENTITY;
        let short_err = short.set_from_iter(data[..15].iter().copied(), true);
        let short_ok = matches!(short_err, Err(MatrixError::TooFewElements { expected: 16, found: 15 }))
            && short == M44::IDENTITY;

        let ok = row_major == expected && column_major == expected.t() && short_ok;
        Ok(Outcome::from_bool(ok, || format!(
            "row-major\n{}column-major\n{}expected (row-major)\n{}",
            row_major, column_major, expected,
        )))
    })
}

fn direct_sum(_: &Settings) -> Outcome {
    let upper_left = Matrix([[1.], [2.]]);
    let lower_right = Matrix([[3., 4., 5.], [6., 7., 8.]]);
    let expected = Matrix([
        [1., 0., 0., 0.],
        [2., 0., 0., 0.],
        [0., 3., 4., 5.],
        [0., 6., 7., 8.],
    ]);

    let mut result = M44::IDENTITY;
    result.direct_sum(&upper_left, &lower_right);
    let by_function: M44 = fixmat_array_types::direct_sum(&upper_left, &lower_right);

    let ok = result == expected && by_function == expected;
    Outcome::from_bool(ok, || format!("result\n{}expected\n{}", result, expected))
}

fn rotation(settings: &Settings) -> Outcome {
    let mut m = M44::IDENTITY;
    m.pre_rotate_x(2.3);

    let tol = settings.tolerance.homogeneous;
    let orthogonal = &m * &m.t();
    let ok = true
        && m == M44::rotation_x(2.3)
        && orthogonal.equals(&M44::IDENTITY, tol)
        && m.get_translation() == Vector([0.0; 3])
        && m[0] == [1.0, 0.0, 0.0, 0.0];
    Outcome::from_bool(ok, || format!("rotated identity\n{}R * R^T\n{}", m, orthogonal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes_with_default_settings() {
        let _ = env_logger::try_init();

        let settings = Settings::default();
        for check in ALL {
            assert_eq!((check.run)(&settings), Outcome::Pass, "check '{}' failed", check.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn negative_tolerance_always_fails() {
        let mut settings = Settings::default();
        settings.tolerance.homogeneous = -1.0;
        match matrix_times_vector(&settings) {
            Outcome::Fail(diagnostic) => assert!(diagnostic.contains("correct result")),
            Outcome::Pass => panic!("negative tolerance cannot pass"),
        }
    }
}
