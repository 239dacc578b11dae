/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */


//! Affine transforms in homogeneous 4x4 form.
//!
//! Transforms act on column vectors (`R * v`), with the translation
//! stored in the last column.  Angles are in radians and rotations are
//! right-handed.

use crate::traits::{Semiring, Float};
use crate::types::*;

impl<X: Float> Matrix<4, 4, X> {
    /// Rotation about the x axis.
    pub fn rotation_x(angle: X) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, i) = (X::ZERO, X::ONE);
        Matrix([
            [i, o,  o, o],
            [o, c, -s, o],
            [o, s,  c, o],
            [o, o,  o, i],
        ])
    }

    /// Rotation about the y axis.
    pub fn rotation_y(angle: X) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, i) = (X::ZERO, X::ONE);
        Matrix([
            [ c, o, s, o],
            [ o, i, o, o],
            [-s, o, c, o],
            [ o, o, o, i],
        ])
    }

    /// Rotation about the z axis.
    pub fn rotation_z(angle: X) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, i) = (X::ZERO, X::ONE);
        Matrix([
            [c, -s, o, o],
            [s,  c, o, o],
            [o,  o, i, o],
            [o,  o, o, i],
        ])
    }

    /// `self = rotation_x(angle) * self`
    pub fn pre_rotate_x(&mut self, angle: X)
    { *self = &Self::rotation_x(angle) * &*self; }

    /// `self = rotation_y(angle) * self`
    pub fn pre_rotate_y(&mut self, angle: X)
    { *self = &Self::rotation_y(angle) * &*self; }

    /// `self = rotation_z(angle) * self`
    pub fn pre_rotate_z(&mut self, angle: X)
    { *self = &Self::rotation_z(angle) * &*self; }

    /// `self = self * rotation_x(angle)`
    pub fn rotate_x(&mut self, angle: X)
    { *self = &*self * &Self::rotation_x(angle); }

    /// `self = self * rotation_y(angle)`
    pub fn rotate_y(&mut self, angle: X)
    { *self = &*self * &Self::rotation_y(angle); }

    /// `self = self * rotation_z(angle)`
    pub fn rotate_z(&mut self, angle: X)
    { *self = &*self * &Self::rotation_z(angle); }
}

impl<X: Semiring> Matrix<4, 4, X> {
    /// Axis-aligned scaling.
    pub fn scaling(factors: &Vector<3, X>) -> Self {
        let mut out = Self::IDENTITY;
        for k in 0..3 {
            out.0[k][k] = factors.0[k];
        }
        out
    }

    /// Pure translation.
    pub fn translation(offset: &Vector<3, X>) -> Self {
        let mut out = Self::IDENTITY;
        out.set_translation(offset);
        out
    }

    /// Overwrite the translation column, leaving the linear part alone.
    pub fn set_translation(&mut self, offset: &Vector<3, X>) {
        for k in 0..3 {
            self.0[k][3] = offset.0[k];
        }
    }

    pub fn get_translation(&self) -> Vector<3, X>
    { Vector::from_fn(|k| self.0[k][3]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turns() {
        let x = Vector([1.0, 0.0, 0.0]);
        let y = Vector([0.0, 1.0, 0.0]);
        let z = Vector([0.0, 0.0, 1.0]);

        let apply = |m: &M44, v: &V3| m.mul_homogeneous(v).dehomogenize();

        assert_close!(abs=1e-15, apply(&M44::rotation_z(FRAC_PI_2), &x), y);
        assert_close!(abs=1e-15, apply(&M44::rotation_x(FRAC_PI_2), &y), z);
        assert_close!(abs=1e-15, apply(&M44::rotation_y(FRAC_PI_2), &z), x);
    }

    #[test]
    fn pre_and_post_rotation() {
        let mut m = M44::IDENTITY;
        m.pre_rotate_x(2.3);
        assert_eq!(m, M44::rotation_x(2.3));

        // rotation is orthogonal
        assert!((&m * &m.t()).equals(&M44::IDENTITY, 1e-15));

        let base = M44::translation(&Vector([1.0, 2.0, 3.0]));
        let mut pre = base;
        let mut post = base;
        pre.pre_rotate_z(0.7);
        post.rotate_z(0.7);
        assert_eq!(pre, &M44::rotation_z(0.7) * &base);
        assert_eq!(post, &base * &M44::rotation_z(0.7));
        assert_ne!(pre, post);

        // rotations about one axis compose by adding angles
        let mut m = M44::IDENTITY;
        m.rotate_y(0.25);
        m.rotate_y(0.5);
        assert!(m.equals(&M44::rotation_y(0.75), 1e-15));
    }

    #[test]
    fn translation_and_scaling() {
        let offset = Vector([1.0, -2.0, 0.5]);
        let mut m = M44::scaling(&Vector([2.0, 3.0, 4.0]));
        assert_eq!(m.get_translation(), Vector([0.0; 3]));

        m.set_translation(&offset);
        assert_eq!(m.get_translation(), offset);
        assert_eq!(m.mul_homogeneous(&Vector([1.0, 1.0, 1.0])), Vector([3.0, 1.0, 4.5, 1.0]));

        let t = M44::translation(&offset);
        let back = M44::translation(&Vector([-1.0, 2.0, -0.5]));
        assert_eq!(&t * &back, M44::IDENTITY);
    }
}
