/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Sub, Neg, Mul};

use spatial_array_types::{M33, M44, V3, V4, Context3, Context4, Ring, Field, Tolerances};

use crate::PV;

/// A matrix `M` that maps vectors in space `S0` to vectors in space `S1`.
///
/// Products compose maps the way matrix products do: if `b` maps `S1 -> S2`
/// and `a` maps `S0 -> S1`, then `&b * &a` maps `S0 -> S2`.  `a.then(&b)`
/// is the same product, written in the order the maps are applied.
#[repr(transparent)]
pub struct PM<M, S0, S1> {
    m: M,
    _spaces: PhantomData<fn(S0, S1) -> (S0, S1)>,
}

pub type PM33<X, S0, S1> = PM<M33<X>, S0, S1>;
pub type PM44<X, S0, S1> = PM<M44<X>, S0, S1>;

impl<M, S0, S1> PM<M, S0, S1> {
    /// Tag a matrix with its source and target spaces.
    #[inline(always)]
    pub fn new(m: M) -> Self
    { PM { m, _spaces: PhantomData } }

    /// Discard the spaces.
    #[inline(always)]
    pub fn untyped(self) -> M
    { self.m }

    #[inline(always)]
    pub fn as_untyped(&self) -> &M
    { &self.m }

    #[inline(always)]
    pub fn as_untyped_mut(&mut self) -> &mut M
    { &mut self.m }

    /// Reinterpret the matrix as mapping between different spaces.
    #[inline(always)]
    pub fn retag<T0, T1>(self) -> PM<M, T0, T1>
    { PM::new(self.m) }
}

impl<M: Clone, S0, S1> Clone for PM<M, S0, S1> {
    #[inline(always)]
    fn clone(&self) -> Self
    { PM::new(self.m.clone()) }
}

impl<M: Copy, S0, S1> Copy for PM<M, S0, S1> { }

impl<M: PartialEq, S0, S1> PartialEq for PM<M, S0, S1> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool
    { self.m == other.m }
}

impl<M: Eq, S0, S1> Eq for PM<M, S0, S1> { }

impl<M: Hash, S0, S1> Hash for PM<M, S0, S1> {
    fn hash<H: Hasher>(&self, state: &mut H)
    { self.m.hash(state) }
}

impl<M: Default, S0, S1> Default for PM<M, S0, S1> {
    fn default() -> Self
    { PM::new(M::default()) }
}

impl<M: fmt::Debug, S0, S1> fmt::Debug for PM<M, S0, S1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.m, f) }
}

macro_rules! impl_tagged_matrix {
    ($({$Mnn:ident $Vn:ident $Ctx:ident})*) => {$(
        impl<X: Ring, S> PM<$Mnn<X>, S, S> {
            /// The identity map on a space.
            #[inline]
            pub fn eye() -> Self
            { PM::new($Mnn::eye()) }
        }

        impl<X: Ring, S0, S1> PM<$Mnn<X>, S0, S1> {
            #[inline]
            pub fn zero() -> Self
            { PM::new($Mnn::zero()) }

            /// Matrix transpose.  The source and target spaces trade places.
            #[inline]
            pub fn t(&self) -> PM<$Mnn<X>, S1, S0>
            { PM::new(self.m.t()) }

            #[inline]
            pub fn det(&self) -> X
            { self.m.det() }

            #[inline]
            pub fn trace(&self) -> X
            { self.m.trace() }

            /// The composite map that applies `self`, then `next`.
            #[inline]
            pub fn then<S2>(&self, next: &PM<$Mnn<X>, S1, S2>) -> PM<$Mnn<X>, S0, S2>
            { PM::<$Mnn<X>, S0, S2>::mul(next, self) }

            /// The composite map that applies `inner`, then `outer`, i.e. the
            /// product `outer * inner`.
            #[inline]
            pub fn mul<Sm>(outer: &PM<$Mnn<X>, Sm, S1>, inner: &PM<$Mnn<X>, S0, Sm>) -> Self {
                let mut out = Self::zero();
                Self::mul_into(outer, inner, &mut out);
                out
            }

            /// `outer * inner`, written to `out`.
            #[inline]
            pub fn mul_into<'o, Sm>(
                outer: &PM<$Mnn<X>, Sm, S1>,
                inner: &PM<$Mnn<X>, S0, Sm>,
                out: &'o mut Self,
            ) -> &'o mut Self {
                $Mnn::mul_into(&outer.m, &inner.m, &mut out.m);
                out
            }

            /// Map a vector from `S0` into `S1`, writing to `out`.
            #[inline]
            pub fn mul_vec<'o>(
                ctx: &mut $Ctx<X>,
                m: &Self,
                v: &PV<$Vn<X>, S0>,
                out: &'o mut PV<$Vn<X>, S1>,
            ) -> &'o mut PV<$Vn<X>, S1> {
                $Mnn::mul_vec(ctx, &m.m, v.as_untyped(), out.as_untyped_mut());
                out
            }

            #[inline]
            pub fn approx_eq(&self, other: &Self, tol: Tolerances<X>) -> bool
            { self.m.approx_eq(&other.m, tol) }
        }

        impl<X: Field, S0, S1> PM<$Mnn<X>, S0, S1> {
            /// The inverse map, or `None` if the matrix is singular.
            #[inline]
            pub fn inv(&self, ctx: &mut $Ctx<X>) -> Option<PM<$Mnn<X>, S1, S0>>
            { self.m.inv(ctx).map(PM::new) }

            /// Write the inverse map to `out`.
            ///
            /// Returns `false` and leaves `out` untouched if the matrix is singular.
            #[inline]
            pub fn inv_into(ctx: &mut $Ctx<X>, a: &Self, out: &mut PM<$Mnn<X>, S1, S0>) -> bool
            { $Mnn::inv_into(ctx, &a.m, &mut out.m) }
        }

        impl<X: Field, S> PM<$Mnn<X>, S, S> {
            /// Invert a map from a space to itself in place.
            #[inline]
            pub fn inv_in_place(&mut self, ctx: &mut $Ctx<X>) -> bool
            { self.m.inv_in_place(ctx) }
        }

        impl<'a, 'b, X: Ring, S0, S1, S2> Mul<&'b PM<$Mnn<X>, S0, S1>> for &'a PM<$Mnn<X>, S1, S2> {
            type Output = PM<$Mnn<X>, S0, S2>;

            #[inline(always)]
            fn mul(self, inner: &'b PM<$Mnn<X>, S0, S1>) -> Self::Output
            { PM::<$Mnn<X>, S0, S2>::mul(self, inner) }
        }

        impl<X: Ring, S0, S1, S2> Mul<PM<$Mnn<X>, S0, S1>> for PM<$Mnn<X>, S1, S2> {
            type Output = PM<$Mnn<X>, S0, S2>;

            #[inline(always)]
            fn mul(self, inner: PM<$Mnn<X>, S0, S1>) -> Self::Output
            { PM::<$Mnn<X>, S0, S2>::mul(&self, &inner) }
        }

        impl<'a, 'b, X: Ring, S0, S1> Mul<&'b PV<$Vn<X>, S0>> for &'a PM<$Mnn<X>, S0, S1> {
            type Output = PV<$Vn<X>, S1>;

            #[inline(always)]
            fn mul(self, v: &'b PV<$Vn<X>, S0>) -> Self::Output
            { PV::new(&self.m * v.as_untyped()) }
        }

        impl<X: Ring, S0, S1> Mul<X> for PM<$Mnn<X>, S0, S1> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, r: X) -> Self
            { PM::new(self.m * r) }
        }

        impl<X: Ring, S0, S1> Add for PM<$Mnn<X>, S0, S1> {
            type Output = Self;

            #[inline(always)]
            fn add(self, other: Self) -> Self
            { PM::new(self.m + other.m) }
        }

        impl<X: Ring, S0, S1> Sub for PM<$Mnn<X>, S0, S1> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, other: Self) -> Self
            { PM::new(self.m - other.m) }
        }

        impl<X: Ring, S0, S1> Neg for PM<$Mnn<X>, S0, S1> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self
            { PM::new(-self.m) }
        }

        impl<X: fmt::Display, S0, S1> fmt::Display for PM<$Mnn<X>, S0, S1> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { self.m.fmt_named(concat!("P", stringify!($Mnn)), f) }
        }
    )*};
}

impl_tagged_matrix!{
    {M33 V3 Context3}
    {M44 V4 Context4}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PV3;

    enum A {}
    enum B {}
    enum C {}

    fn scenario_a() -> M33<f64> {
        M33::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn composition_matches_untyped_product() {
        let a_to_b: PM33<f64, A, B> = PM::new(scenario_a());
        let b_to_c: PM33<f64, B, C> = PM::new(M33::from_fn(|r, c| (r + 2 * c) as f64));

        let a_to_c: PM33<f64, A, C> = &b_to_c * &a_to_b;
        assert_eq!(&b_to_c.untyped() * &a_to_b.untyped(), a_to_c.untyped());
        assert_eq!(a_to_c, a_to_b.then(&b_to_c));
        assert_eq!(a_to_c, b_to_c * a_to_b);
        assert_eq!(a_to_b, &PM33::<f64, B, B>::eye() * &a_to_b);
        assert_eq!(a_to_b, &a_to_b * &PM33::<f64, A, A>::eye());
    }

    #[test]
    fn vectors_follow_the_map() {
        let ctx = &mut Context3::new();
        let a_to_b: PM33<f64, A, B> = PM::new(scenario_a());
        let v: PV3<f64, A> = PV::new(V3([1.0, 2.0, 3.0]));

        let mut out = PV3::<f64, B>::zero();
        PM33::mul_vec(ctx, &a_to_b, &v, &mut out);
        assert_eq!(V3([14.0, 32.0, 50.0]), out.untyped());
        assert_eq!(out, &a_to_b * &v);
    }

    #[test]
    fn inverse_swaps_spaces() {
        let ctx = &mut Context4::new();
        let a_to_b: PM44<f64, A, B> = PM::new(M44::translation(&V3([1.0, 2.0, 3.0])) * 2.0);
        let b_to_a: PM44<f64, B, A> = a_to_b.inv(ctx).unwrap();
        assert!((&b_to_a * &a_to_b).approx_eq(&PM44::eye(), Tolerances::abs(1e-12)));

        let mut out = PM44::<f64, B, A>::zero();
        assert!(PM44::inv_into(ctx, &a_to_b, &mut out));
        assert_eq!(b_to_a, out);

        let singular = PM44::<f64, A, B>::zero();
        assert_eq!(None, singular.inv(ctx));
        assert!(!PM44::inv_into(ctx, &singular, &mut out));
        assert_eq!(b_to_a, out);

        let mut round_trip: PM44<f64, A, A> = b_to_a.then(&a_to_b).retag();
        assert!(round_trip.inv_in_place(ctx));
    }

    #[test]
    fn transpose_swaps_spaces() {
        let a_to_b: PM33<f64, A, B> = PM::new(scenario_a());
        let b_to_a: PM33<f64, B, A> = a_to_b.t();
        assert_eq!(scenario_a().t(), b_to_a.untyped());
        assert_eq!(0.0, a_to_b.det());
        assert_eq!(15.0, b_to_a.trace());
    }

    #[test]
    fn display() {
        let m: PM33<i32, A, B> = PM::new(M33::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
        assert_eq!("[PM33 1 2 3 4 5 6 7 8 9]", format!("{}", m));
        let m = PM44::<i32, A, A>::eye();
        assert_eq!("[PM44 1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1]", format!("{}", m));
    }
}
