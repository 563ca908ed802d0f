/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::{Ring, Field};
use crate::errors::{AxisError, check_axis};
use crate::approx::Tolerances;
use crate::context::{Context2, Context3, Context4};

use super::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    @{Vn_n_Ctx}
    impl_vector_inherent!(
        {$Vn:ident $n:tt $Ctx:ident}
    ) => {
        impl<X> $Vn<X> {
            /// Construct a fixed-size vector from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn(std::array::from_fn(f)) }

            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            { $Vn(self.0.map(f)) }

            /// Read the component on an axis.
            #[inline]
            pub fn get(&self, axis: usize) -> Result<X, AxisError>
            where X: Copy,
            {
                check_axis(axis, $n)?;
                Ok(self.0[axis])
            }

            /// Write the component on an axis.
            ///
            /// On error, the vector is left untouched.
            #[inline]
            pub fn set(&mut self, axis: usize, value: X) -> Result<(), AxisError> {
                check_axis(axis, $n)?;
                self.0[axis] = value;
                Ok(())
            }
        }

        impl<X: Ring> $Vn<X> {
            /// Get a zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            /// Get a basis vector.
            #[inline]
            pub fn axis_unit(axis: usize) -> Result<Self, AxisError> {
                let mut v = Self::zero();
                v.set(axis, X::one())?;
                Ok(v)
            }

            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> X
            { Dot::dot(self, other) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> X
            { Dot::dot(self, self) }

            /// Get the vector's magnitude.
            ///
            /// For integer vectors, the square root is truncated.
            #[inline(always)]
            pub fn norm(&self) -> X
            { self.sqnorm().sqrt_trunc() }

            /// Get the magnitude of `self - other`.
            #[inline]
            pub fn distance(&self, other: &Self) -> X
            { (self - other).norm() }

            /// Compute `self + w * r`.
            #[inline]
            pub fn add_scaled(&self, w: &Self, r: X) -> Self
            { Self::from_fn(|k| self[k] + w[k] * r) }

            /// Linear interpolation, `self + (b - self) * alpha`.
            ///
            /// `alpha = 0` produces `self` and `alpha = 1` produces `b`.
            /// Integer vectors take a float `alpha` and truncate the
            /// intermediate values.
            #[inline]
            pub fn lerp(&self, b: &Self, alpha: X::Alpha) -> Self
            { Self::from_fn(|k| X::lerp(self[k], b[k], alpha)) }

            /// Bilinear interpolation between four corners.
            ///
            /// Interpolates along x on both rows (in the context's scratch
            /// space), and then along y between the results.
            pub fn lerp_bilinear(
                ctx: &mut $Ctx<X>,
                x0y0: &Self,
                x1y0: &Self,
                x0y1: &Self,
                x1y1: &Self,
                px: X::Alpha,
                py: X::Alpha,
            ) -> Self {
                ctx.vs[0] = x0y0.lerp(x1y0, px);
                ctx.vs[1] = x0y1.lerp(x1y1, px);
                ctx.vs[0].lerp(&ctx.vs[1], py)
            }

            /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
            /// matrix.
            #[inline(always)]
            pub fn mul_diag(&self, other: &Self) -> Self
            { Self::from_fn(|k| self[k] * other[k]) }

            /// Elementwise absolute value.
            #[inline]
            pub fn abs(&self) -> Self
            { Self::from_fn(|k| X::abs(self[k])) }

            /// Raise every component to at least `lo`.
            #[inline]
            pub fn clamp_min(&self, lo: X) -> Self
            { Self::from_fn(|k| X::max(self[k], lo)) }

            /// Lower every component to at most `hi`.
            #[inline]
            pub fn clamp_max(&self, hi: X) -> Self
            { Self::from_fn(|k| X::min(self[k], hi)) }

            /// Clamp every component into `[lo, hi]`.
            #[inline]
            pub fn clamp(&self, lo: X, hi: X) -> Self
            { self.clamp_min(lo).clamp_max(hi) }

            /// Raise each component to at least the corresponding component of `lo`.
            #[inline]
            pub fn clamp_min_by(&self, lo: &Self) -> Self
            { Self::from_fn(|k| X::max(self[k], lo[k])) }

            /// Lower each component to at most the corresponding component of `hi`.
            #[inline]
            pub fn clamp_max_by(&self, hi: &Self) -> Self
            { Self::from_fn(|k| X::min(self[k], hi[k])) }

            /// Clamp each component into the range given by the corresponding
            /// components of `lo` and `hi`.
            #[inline]
            pub fn clamp_by(&self, lo: &Self, hi: &Self) -> Self
            { self.clamp_min_by(lo).clamp_max_by(hi) }

            /// Componentwise comparison with absolute and relative tolerances.
            ///
            /// This is deliberately not `PartialEq`, which is always exact.
            #[inline]
            pub fn approx_eq(&self, other: &Self, tol: Tolerances<X>) -> bool
            { (0..$n).all(|k| X::is_close(self[k], other[k], tol.abs, tol.rel)) }

            /// Normalize the vector.
            ///
            /// The zero vector is returned unchanged, rather than
            /// producing NaN. Integer vectors divide by their truncated
            /// norm and truncate again.
            #[inline]
            pub fn unit(&self) -> Self {
                let norm = self.norm();
                Self::from_fn(|k| self[k].div_trunc(norm))
            }

            /// Get the part of the vector that is parallel to `r`.
            ///
            /// (i.e. the projection of `self` onto `r`.)
            /// This is zero when the vectors are perpendicular, or when `r` is zero.
            #[inline]
            pub fn par(&self, r: &Self) -> Self {
                let r_sqnorm = r.sqnorm();
                let dot = $Vn::dot(self, r);
                Self::from_fn(|k| (r[k] * dot).div_trunc(r_sqnorm))
            }

            /// Get the part of the vector that is perpendicular to `r`.
            ///
            /// Be aware that chained calls to `perp` can have **spectacularly bad**
            /// numerical stability issues; you cannot trust that `c.perp(a).perp(b)`
            /// is even *remotely* orthogonal to `a` unless `b` is orthogonal to `a`.
            #[inline]
            pub fn perp(&self, r: &Self) -> Self
            { self - self.par(r) }

            /// One Gram-Schmidt step.
            ///
            /// `v0` must already be a unit vector. It is returned as-is, along with
            /// the normalized part of `v1` perpendicular to it.
            #[inline]
            pub fn ortho_normalize(v0: &Self, v1: &Self) -> (Self, Self)
            { (*v0, v1.perp(v0).unit()) }

            /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
            ///
            /// Integer vectors produce the angle as an `f64`.
            #[inline]
            pub fn angle_to(&self, other: &Self) -> X::Alpha
            { X::angle_between($Vn::dot(self, other), self.sqnorm(), other.sqnorm()) }
        }
    }
}

impl<X: Field> V3<X> {
    /// Right-handed cross product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Inner product of vectors.
///
/// This is basically just `{V2,V3,V4}::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;
/// Trait that provides associated types for `V2, V3, V4`.
pub trait IsV {
    type Scalar;
    const DIM: usize;
}

gen_each!{
    @{Vn_n}
    impl_is_v!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X> IsV for $Vn<X> {
            type Scalar = X;
            const DIM: usize = $n;
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

gen_each!{
    @{Vn_n}
    impl_num_zero!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: Ring> Zero for $Vn<X> {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3,V4}::dot`.
///
/// Without this, the free function `dot` could not be generic over different
/// sizes of V.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

gen_each!{
    @{Vn_n}
    impl_dot!( {$Vn:ident $n:tt} ) => {
        impl<X: Ring> Dot for $Vn<X> {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> X
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3}::random_unit`.
pub trait RandomUnit: IsV + Sized {
    #[inline]
    fn random_unit() -> Self
    { RandomUnit::random_unit_with(&mut rand::thread_rng()) }

    fn random_unit_with<R: rand::Rng>(rng: &mut R) -> Self;
}

gen_each!{
    [{V2} {V3}]
    impl_random_unit_inherent!( {$Vn:ident} ) => {
        impl<X: Field> $Vn<X> {
            /// Generate a randomly-oriented unit vector whose direction comes from a uniform
            /// distribution.
            #[inline(always)]
            pub fn random_unit() -> Self
            { RandomUnit::random_unit() }

            /// Generate a randomly-oriented unit vector whose direction comes from a uniform
            /// distribution.
            #[inline(always)]
            pub fn random_unit_with<R: rand::Rng>(rng: &mut R) -> Self
            { RandomUnit::random_unit_with(rng) }
        }
    }
}

// http://mathworld.wolfram.com/CirclePointPicking.html
impl<X: Field> RandomUnit for V2<X> {
    #[inline]
    fn random_unit_with<R: rand::Rng>(rng: &mut R) -> Self {
        loop {
            let x1 = X::uniform_with(rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(rng, (-X::one(), X::one()));
            let denom = x1*x1 + x2*x2;
            if denom >= X::one() || denom == X::zero() {
                continue;
            }
            let x = (x1*x1 - x2*x2) / denom;
            let y = X::two()*x1*x2 / denom;
            return V2([x, y]);
        }
    }
}

// http://mathworld.wolfram.com/SpherePointPicking.html
impl<X: Field> RandomUnit for V3<X> {
    #[inline]
    fn random_unit_with<R: rand::Rng>(rng: &mut R) -> Self {
        loop {
            let x1 = X::uniform_with(rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(rng, (-X::one(), X::one()));
            let sqsum = x1*x1 + x2*x2;
            if sqsum >= X::one() {
                continue;
            }
            let root = X::sqrt(X::one() - sqsum);
            let x = X::two() * x1 * root;
            let y = X::two() * x2 * root;
            let z = X::one() - X::two() * sqsum;
            return V3([x, y, z]);
        }
    }
}

// ---------------------------------------------------------------------------

// stdlib integration

gen_each!{
    @{Vn}
    impl_sum!( {$Vn:ident} ) => {
        impl<X: Ring> std::iter::Sum for $Vn<X> {
            fn sum<I: Iterator<Item=$Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }

        impl<'a, X: Ring> std::iter::Sum<&'a $Vn<X>> for $Vn<X> {
            fn sum<I: Iterator<Item=&'a $Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context3;

    #[test]
    fn angle() {
        let a: V3 = V3([0.5, 0.0,  0.0]);
        let b: V3 = V3([8.0, 0.0, -8.0]);

        assert_close!(45.0, a.angle_to(&b).to_degrees());
        assert_close!(abs=1e-12, 0.0, a.angle_to(&a));
        assert_close!(180.0, a.angle_to(&-a).to_degrees());
    }

    #[test]
    fn prop_perp_plus_par() {
        for _ in 0..10 {
            let a: V3 = V3(::rand::random());
            let b: V3 = V3(::rand::random());
            (a.perp(&b) + a.par(&b) - a).iter().for_each(|&x| {
                assert_close!(abs=1e-10, 0.0, x);
            });
        }
    }

    #[test]
    fn prop_par_is_par() {
        for _ in 0..10 {
            let a: V3 = V3(::rand::random());
            let b: V3 = V3(::rand::random());
            let par = a.par(&b);
            assert_close!(abs=1e-4, 0.0, par.angle_to(&b));
        }
    }

    #[test]
    fn prop_perp_is_perp() {
        for _ in 0..10 {
            let a: V3 = V3(::rand::random());
            let b: V3 = V3(::rand::random());
            assert_close!(abs=1e-10, 0.0, dot(&a.perp(&b), &b));
        }
    }

    #[test]
    fn par_degenerate() {
        let a = V2([1.0, 0.0]);
        let b = V2([0.0, 3.0]);
        assert_eq!(V2::zero(), a.par(&b));
        assert_eq!(V2::zero(), a.par(&V2::zero()));
    }

    #[test]
    fn random_unit_norm() {
        for _ in 0..10 {
            assert_close!(abs=1e-10, 1.0, V2::<f64>::random_unit().sqnorm());
            assert_close!(abs=1e-10, 1.0, V3::<f64>::random_unit().sqnorm());
        }
    }

    #[test]
    fn unit() {
        for _ in 0..10 {
            let v: V4 = V4(::rand::random());
            assert_close!(abs=1e-12, 1.0, v.unit().norm());
        }
        assert_eq!(V3::<f32>::zero(), V3::<f32>::zero().unit());
        assert_eq!(V4::<f64>::zero(), V4::<f64>::zero().unit());
    }

    #[test]
    fn ortho_normalize() {
        for _ in 0..10 {
            let v0: V3 = V3::random_unit();
            let v1: V3 = V3(::rand::random());
            let (out0, out1) = V3::ortho_normalize(&v0, &v1);
            assert_eq!(v0, out0);
            assert_close!(abs=1e-10, 0.0, dot(&out0, &out1));
            assert_close!(abs=1e-10, 1.0, out0.norm());
            assert_close!(abs=1e-10, 1.0, out1.norm());
        }
    }

    #[test]
    fn cross() {
        let x = V3([1.0, 0.0, 0.0]);
        let y = V3([0.0, 1.0, 0.0]);
        let z = V3([0.0, 0.0, 1.0]);
        assert_eq!(z, x.cross(&y));
        assert_eq!(-z, y.cross(&x));

        for _ in 0..10 {
            let a: V3 = V3(::rand::random());
            let b: V3 = V3(::rand::random());
            let c = a.cross(&b);
            assert_close!(abs=1e-10, 0.0, dot(&a, &c));
            assert_close!(abs=1e-10, 0.0, dot(&b, &c));
        }
    }

    #[test]
    fn magnitude() {
        assert_eq!(5.0, V2([3.0, 4.0]).norm());
        assert_eq!(25, V2([3, 4]).sqnorm());
        assert_eq!(5, V2([3i64, 4]).norm());
        // truncated
        assert_eq!(1, V2([1i32, 1]).norm());
        assert_eq!(5, V3([1, 2, 3]).distance(&V3([4, 6, 3])));
    }

    #[test]
    fn get_set() {
        let mut v = V4([1, 2, 3, 4]);
        assert_eq!(Ok(3), v.get(2));
        v.set(2, 10).unwrap();
        assert_eq!(Ok(10), v.get(2));
        assert_eq!(Err(AxisError { axis: 4, dim: 4 }), v.get(4));
        assert_eq!(Err(AxisError { axis: 7, dim: 4 }), v.set(7, 0));
        assert_eq!(V4([1, 2, 10, 4]), v);
        assert_eq!(Ok(V3([0, 1, 0])), V3::axis_unit(1));
        assert!(V2::<f32>::axis_unit(2).is_err());
    }

    #[test]
    fn lerp() {
        let a = V3([1.0, -2.0, 3.5]);
        let b = V3([-4.0, 8.0, 0.25]);
        assert_eq!(a, a.lerp(&b, 0.0));
        assert_close!(abs=1e-12, b.0, a.lerp(&b, 1.0).0);
        assert_close!(abs=1e-12, [-1.5, 3.0, 1.875], a.lerp(&b, 0.5).0);

        let a = V2([0, 10]);
        let b = V2([5, -10]);
        assert_eq!(a, a.lerp(&b, 0.0));
        assert_eq!(b, a.lerp(&b, 1.0));
        assert_eq!(V2([2, 0]), a.lerp(&b, 0.5));
    }

    #[test]
    fn lerp_bilinear() {
        let ctx = &mut Context3::new();
        let x0y0 = V3([0.0, 0.0, 0.0]);
        let x1y0 = V3([2.0, 0.0, 0.0]);
        let x0y1 = V3([0.0, 4.0, 0.0]);
        let x1y1 = V3([2.0, 4.0, 8.0]);

        assert_eq!(x0y0, V3::lerp_bilinear(ctx, &x0y0, &x1y0, &x0y1, &x1y1, 0.0, 0.0));
        assert_eq!(x1y1, V3::lerp_bilinear(ctx, &x0y0, &x1y0, &x0y1, &x1y1, 1.0, 1.0));
        assert_eq!(V3([1.0, 2.0, 2.0]), V3::lerp_bilinear(ctx, &x0y0, &x1y0, &x0y1, &x1y1, 0.5, 0.5));
    }

    #[test]
    fn clamps() {
        let v = V3([-5, 0, 5]);
        assert_eq!(V3([-1, 0, 5]), v.clamp_min(-1));
        assert_eq!(V3([-5, 0, 1]), v.clamp_max(1));
        assert_eq!(V3([-1, 0, 1]), v.clamp(-1, 1));
        assert_eq!(V3([-2, 1, 5]), v.clamp_min_by(&V3([-2, 1, 2])));
        assert_eq!(V3([-5, -1, 3]), v.clamp_max_by(&V3([0, -1, 3])));
        assert_eq!(V3([-3, 0, 4]), v.clamp_by(&V3([-3, -3, -3]), &V3([4, 4, 4])));
        assert_eq!(V3([5, 0, 5]), v.abs());
    }

    #[test]
    fn integer_clamps_are_elementwise() {
        let v = V3([5i32, -5, 0]);
        assert_eq!(V3([1, 0, 0]), v.clamp_by(&V3([0, 0, 0]), &V3([1, 1, 1])));
        assert_eq!(V3([1, -1, 0]), v.clamp(-1, 1));
        let v = V2([i64::max_value(), i64::min_value()]);
        assert_eq!(V2([3, -3]), v.clamp(-3, 3));
    }

    #[test]
    fn integer_lerp_wide_span() {
        let a = V2([-2_000_000_000i32, 0]);
        let b = V2([2_000_000_000, 0]);
        assert_eq!(a, a.lerp(&b, 0.0));
        assert_eq!(b, a.lerp(&b, 1.0));
        assert_eq!(V2([0, 0]), a.lerp(&b, 0.5));

        let a = V3([i64::min_value(), 0, i64::max_value()]);
        let b = V3([i64::max_value(), 0, i64::min_value()]);
        assert_eq!(a, a.lerp(&b, 0.0));
        assert_eq!(b, a.lerp(&b, 1.0));
    }

    #[test]
    fn integer_normalize_and_project() {
        // truncated norm, truncated division
        assert_eq!(V3([0, 1, 0]), V3([0i32, 9, 0]).unit());
        assert_eq!(V2([0, 0]), V2([3i32, 4]).unit());
        assert_eq!(V2::<i64>::zero(), V2::<i64>::zero().unit());

        assert_eq!(V2([3, 0]), V2([3, 4]).par(&V2([10, 0])));
        assert_eq!(V2([0, 4]), V2([3, 4]).perp(&V2([10, 0])));
        assert_eq!(V2([0, 0]), V2([3, 4]).par(&V2([0, 0])));

        let x = V3([1i64, 0, 0]);
        let (out0, out1) = V3::ortho_normalize(&x, &V3([5, 7, 0]));
        assert_eq!(x, out0);
        assert_eq!(V3([0, 1, 0]), out1);
    }

    #[test]
    fn integer_angle() {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

        let a = V2([2i32, 0]);
        assert_close!(FRAC_PI_4, a.angle_to(&V2([3, 3])));
        assert_close!(FRAC_PI_2, a.angle_to(&V2([0, -5])));
        assert_close!(PI, a.angle_to(&V2([-1, 0])));
        assert_eq!(0.0, a.angle_to(&a));
        assert_close!(FRAC_PI_2, V4([0i64; 4]).angle_to(&V4([1, 2, 3, 4])));
    }

    #[test]
    fn approx_eq_is_separate_from_eq() {
        let a = V2([1.0, 2.0]);
        let b = V2([1.0, 2.0 + 1e-13]);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, Tolerances::default()));
        assert!(!a.approx_eq(&V2([1.0, 2.1]), Tolerances::default()));
    }

    #[test]
    fn add_scaled() {
        let v = V4([1, 2, 3, 4]);
        let w = V4([1, 0, -1, 2]);
        assert_eq!(V4([4, 2, 0, 10]), v.add_scaled(&w, 3));
        assert_eq!(v + w * 3, v.add_scaled(&w, 3));
    }
}
