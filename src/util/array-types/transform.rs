/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Factories for the common 3D graphics transforms.
//!
//! All of these act on column vectors (`m * v`), follow the OpenGL
//! conventions (right-handed eye space looking down `-z`, clip space depth
//! in `[-1, 1]`), and exist only for float domains.

use crate::traits::Field;
use crate::types::*;

use num_traits::Zero;

impl<X: Field> M33<X> {
    /// Rotation by `angle` radians counterclockwise about `axis`.
    ///
    /// The axis does not need to be normalized. A zero axis produces the
    /// identity.
    pub fn rotation(axis: &V3<X>, angle: X) -> Self {
        if axis.is_zero() {
            return M33::eye();
        }
        let V3([x, y, z]) = axis.unit();
        let (s, c) = (angle.sin(), angle.cos());
        let t = X::one() - c;

        M33::from_rows([
            [t * x * x + c,     t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c,     t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c    ],
        ])
    }

    /// Scaling along each axis.
    pub fn scaling(factors: &V3<X>) -> Self
    { M33::from_fn(|r, c| if r == c { factors[r] } else { X::zero() }) }
}

impl<X: Field> M44<X> {
    /// Translation of points by `offset`.
    pub fn translation(offset: &V3<X>) -> Self {
        let mut out = M44::eye();
        out.0[3] = V4([offset[0], offset[1], offset[2], X::one()]);
        out
    }

    /// Scaling along each axis.
    pub fn scaling(factors: &V3<X>) -> Self
    { M44::from_linear(&M33::scaling(factors)) }

    /// Rotation by `angle` radians counterclockwise about `axis`.
    pub fn rotation(axis: &V3<X>, angle: X) -> Self
    { M44::from_linear(&M33::rotation(axis, angle)) }

    /// A viewing transform placing the camera at `eye`, looking toward
    /// `target`, with `up` pointing roughly upwards on screen.
    ///
    /// `eye` is mapped to the origin and `target` onto the negative z axis.
    pub fn look_at(eye: &V3<X>, target: &V3<X>, up: &V3<X>) -> Self {
        let f = (target - eye).unit();
        let s = f.cross(up).unit();
        let u = s.cross(&f);

        M44::from_rows([
            [ s[0],  s[1],  s[2], -s.dot(eye)],
            [ u[0],  u[1],  u[2], -u.dot(eye)],
            [-f[0], -f[1], -f[2],  f.dot(eye)],
            [X::zero(), X::zero(), X::zero(), X::one()],
        ])
    }

    /// A perspective projection onto the near plane of the given frustum.
    pub fn frustum(left: X, right: X, bottom: X, top: X, near: X, far: X) -> Self {
        let two = X::two();
        let o = X::zero();
        let (w, h, d) = (right - left, top - bottom, far - near);

        M44::from_rows([
            [two * near / w, o,              (right + left) / w,  o                    ],
            [o,              two * near / h, (top + bottom) / h,  o                    ],
            [o,              o,              -(far + near) / d,   -two * far * near / d],
            [o,              o,              -X::one(),           o                    ],
        ])
    }

    /// A symmetric perspective projection.
    ///
    /// `fov_y` is the full vertical field of view in radians, and `aspect`
    /// is width over height.
    pub fn perspective(fov_y: X, aspect: X, near: X, far: X) -> Self {
        let top = near * (fov_y / X::two()).tan();
        let right = top * aspect;
        M44::frustum(-right, right, -top, top, near, far)
    }

    fn from_linear(m: &M33<X>) -> Self {
        M44::from_fn(|r, c| match (r, c) {
            (3, 3) => X::one(),
            (3, _) | (_, 3) => X::zero(),
            _ => m[(r, c)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::Tolerances;
    use std::f64::consts::PI;

    fn apply(m: &M44<f64>, p: V3<f64>) -> V3<f64> {
        let V4([x, y, z, w]) = m * V4([p[0], p[1], p[2], 1.0]);
        V3([x / w, y / w, z / w])
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let m = M44::translation(&V3([1.0, -2.0, 3.0]));
        assert_eq!(V3([1.0, -1.0, 4.0]), apply(&m, V3([0.0, 1.0, 1.0])));
        assert_eq!(V4([0.0, 1.0, 1.0, 0.0]), &m * V4([0.0, 1.0, 1.0, 0.0]));
    }

    #[test]
    fn scaling() {
        let m = M44::scaling(&V3([2.0, 3.0, 4.0]));
        assert_eq!(V3([2.0, 3.0, 4.0]), apply(&m, V3([1.0, 1.0, 1.0])));
        assert_eq!(24.0, M33::scaling(&V3([2.0, 3.0, 4.0])).det());
    }

    #[test]
    fn rotation_quarter_turns() {
        let m = M33::rotation(&V3([0.0, 0.0, 2.0]), PI / 2.0);
        assert_close!(abs=1e-12, [0.0, 1.0, 0.0], (&m * V3([1.0, 0.0, 0.0])).0);
        assert_close!(abs=1e-12, [-1.0, 0.0, 0.0], (&m * V3([0.0, 1.0, 0.0])).0);

        let m = M44::rotation(&V3([1.0, 0.0, 0.0]), PI / 2.0);
        assert_close!(abs=1e-12, [0.0, 0.0, 1.0], apply(&m, V3([0.0, 1.0, 0.0])).0);
    }

    #[test]
    fn rotation_is_orthogonal() {
        for _ in 0..10 {
            let axis = V3::<f64>::random_unit();
            let angle = ::rand::random::<f64>() * 2.0 * PI;
            let m = M33::rotation(&axis, angle);
            assert_close!(abs=1e-12, 1.0, m.det());
            assert!((&m * &m.t()).approx_eq(&M33::eye(), Tolerances::abs(1e-12)));
            // the axis is fixed
            assert_close!(abs=1e-12, axis.0, (&m * &axis).0);
        }
        assert_eq!(M33::eye(), M33::rotation(&V3::zero(), 1.0));
    }

    #[test]
    fn look_at_frames_the_target() {
        let eye = V3([1.0, 2.0, 3.0]);
        let target = V3([1.0, 2.0, -7.0]);
        let m = M44::look_at(&eye, &target, &V3([0.0, 1.0, 0.0]));
        assert_close!(abs=1e-12, [0.0, 0.0, 0.0], apply(&m, eye).0);
        assert_close!(abs=1e-12, [0.0, 0.0, -10.0], apply(&m, target).0);
        assert_close!(abs=1e-12, [0.0, 1.0, -10.0], apply(&m, V3([1.0, 3.0, -7.0])).0);
    }

    #[test]
    fn frustum_maps_near_and_far_planes() {
        let m = M44::frustum(-1.0, 3.0, -2.0, 2.0, 1.0, 10.0);
        assert_close!(abs=1e-12, [-1.0, -1.0, -1.0], apply(&m, V3([-1.0, -2.0, -1.0])).0);
        assert_close!(abs=1e-12, [1.0, 1.0, -1.0], apply(&m, V3([3.0, 2.0, -1.0])).0);
        assert_close!(abs=1e-12, 1.0, apply(&m, V3([0.0, 0.0, -10.0]))[2]);
    }

    #[test]
    fn perspective_is_a_symmetric_frustum() {
        let m = M44::perspective(PI / 2.0, 2.0, 1.0, 100.0);
        let expected = M44::frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0);
        assert!(m.approx_eq(&expected, Tolerances::abs(1e-12)));
    }

    #[test]
    fn f32_transforms() {
        let m = M44::<f32>::translation(&V3([1.0, 0.0, 0.0]));
        let ctx = &mut crate::context::Context4::new();
        let inv = m.inv(ctx).unwrap();
        assert_eq!(M44::translation(&V3([-1.0, 0.0, 0.0])), inv);
    }
}
