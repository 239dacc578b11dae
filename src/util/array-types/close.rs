/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */


use fixmat_assert_close::{CheckClose, CheckCloseError, Tolerances};

use crate::types::*;

impl<const R: usize, const C: usize> CheckClose for Matrix<R, C, f64> {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.0.check_close(&other.0, tol) }
}

impl<const N: usize> CheckClose for Vector<N, f64> {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.0.check_close(&other.0, tol) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_every_element() {
        let a = Matrix([[1.0, 2.0], [3.0, 4.0]]);
        let mut b = a;
        b[1][0] += 1e-3;

        let tol = Tolerances { abs: 1e-6, rel: 0.0 };
        let err = a.check_close(&b, tol).unwrap_err();
        assert_eq!(err.values.0, 3.0);
        assert!(a.check_close(&a, tol).is_ok());
        assert!(Vector([1.0, 2.0]).check_close(&Vector([1.0, 2.0 + 1e-9]), tol).is_ok());
    }
}
