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
use std::ops::{Add, Sub, Neg, Mul, Div};

use spatial_array_types::{V2, V3, V4, Ring, Field, Tolerances};

/// A vector `V` whose coordinates are expressed in space `S`.
///
/// Arithmetic between two `PV`s requires them to share a space.
#[repr(transparent)]
pub struct PV<V, S> {
    v: V,
    // invariant in S, and Send/Sync regardless of S
    _space: PhantomData<fn(S) -> S>,
}

pub type PV2<X, S> = PV<V2<X>, S>;
pub type PV3<X, S> = PV<V3<X>, S>;
pub type PV4<X, S> = PV<V4<X>, S>;

impl<V, S> PV<V, S> {
    /// Tag a vector with a space.
    #[inline(always)]
    pub fn new(v: V) -> Self
    { PV { v, _space: PhantomData } }

    /// Discard the space.
    #[inline(always)]
    pub fn untyped(self) -> V
    { self.v }

    #[inline(always)]
    pub fn as_untyped(&self) -> &V
    { &self.v }

    #[inline(always)]
    pub fn as_untyped_mut(&mut self) -> &mut V
    { &mut self.v }

    /// Reinterpret the coordinates as belonging to a different space.
    #[inline(always)]
    pub fn retag<S2>(self) -> PV<V, S2>
    { PV::new(self.v) }
}

// Manual impls, to avoid placing bounds on S.
impl<V: Clone, S> Clone for PV<V, S> {
    #[inline(always)]
    fn clone(&self) -> Self
    { PV::new(self.v.clone()) }
}

impl<V: Copy, S> Copy for PV<V, S> { }

impl<V: PartialEq, S> PartialEq for PV<V, S> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool
    { self.v == other.v }
}

impl<V: Eq, S> Eq for PV<V, S> { }

impl<V: Hash, S> Hash for PV<V, S> {
    fn hash<H: Hasher>(&self, state: &mut H)
    { self.v.hash(state) }
}

impl<V: Default, S> Default for PV<V, S> {
    fn default() -> Self
    { PV::new(V::default()) }
}

impl<V: fmt::Debug, S> fmt::Debug for PV<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.v, f) }
}

macro_rules! impl_tagged_vector {
    ($($Vn:ident)*) => {$(
        impl<X: Ring, S> PV<$Vn<X>, S> {
            #[inline]
            pub fn zero() -> Self
            { PV::new($Vn::zero()) }

            #[inline]
            pub fn dot(&self, other: &Self) -> X
            { self.v.dot(&other.v) }

            #[inline]
            pub fn sqnorm(&self) -> X
            { self.v.sqnorm() }

            #[inline]
            pub fn norm(&self) -> X
            { self.v.norm() }

            #[inline]
            pub fn distance(&self, other: &Self) -> X
            { self.v.distance(&other.v) }

            #[inline]
            pub fn add_scaled(&self, w: &Self, r: X) -> Self
            { PV::new(self.v.add_scaled(&w.v, r)) }

            #[inline]
            pub fn lerp(&self, b: &Self, alpha: X::Alpha) -> Self
            { PV::new(self.v.lerp(&b.v, alpha)) }

            #[inline]
            pub fn approx_eq(&self, other: &Self, tol: Tolerances<X>) -> bool
            { self.v.approx_eq(&other.v, tol) }

            #[inline]
            pub fn add_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self
            { $Vn::add_into(&a.v, &b.v, &mut out.v); out }

            #[inline]
            pub fn sub_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self
            { $Vn::sub_into(&a.v, &b.v, &mut out.v); out }

            #[inline]
            pub fn add_in_place(&mut self, b: &Self) -> &mut Self
            { self.v.add_in_place(&b.v); self }

            #[inline]
            pub fn sub_in_place(&mut self, b: &Self) -> &mut Self
            { self.v.sub_in_place(&b.v); self }

            #[inline]
            pub fn scale_in_place(&mut self, r: X) -> &mut Self
            { self.v.scale_in_place(r); self }

            #[inline]
            pub fn lerp_into<'o>(a: &Self, b: &Self, alpha: X::Alpha, out: &'o mut Self) -> &'o mut Self
            { $Vn::lerp_into(&a.v, &b.v, alpha, &mut out.v); out }

            #[inline]
            pub fn lerp_in_place(&mut self, b: &Self, alpha: X::Alpha) -> &mut Self
            { self.v.lerp_in_place(&b.v, alpha); self }

            #[inline]
            pub fn abs(&self) -> Self
            { PV::new(self.v.abs()) }

            #[inline]
            pub fn clamp_min(&self, lo: X) -> Self
            { PV::new(self.v.clamp_min(lo)) }

            #[inline]
            pub fn clamp_max(&self, hi: X) -> Self
            { PV::new(self.v.clamp_max(hi)) }

            #[inline]
            pub fn clamp(&self, lo: X, hi: X) -> Self
            { PV::new(self.v.clamp(lo, hi)) }

            /// Bounds must be in the same space as the vector.
            #[inline]
            pub fn clamp_min_by(&self, lo: &Self) -> Self
            { PV::new(self.v.clamp_min_by(&lo.v)) }

            #[inline]
            pub fn clamp_max_by(&self, hi: &Self) -> Self
            { PV::new(self.v.clamp_max_by(&hi.v)) }

            #[inline]
            pub fn clamp_by(&self, lo: &Self, hi: &Self) -> Self
            { PV::new(self.v.clamp_by(&lo.v, &hi.v)) }

            #[inline]
            pub fn unit(&self) -> Self
            { PV::new(self.v.unit()) }

            #[inline]
            pub fn unit_in_place(&mut self) -> &mut Self
            { self.v.unit_in_place(); self }

            #[inline]
            pub fn par(&self, r: &Self) -> Self
            { PV::new(self.v.par(&r.v)) }

            #[inline]
            pub fn par_into<'o>(a: &Self, r: &Self, out: &'o mut Self) -> &'o mut Self
            { $Vn::par_into(&a.v, &r.v, &mut out.v); out }

            #[inline]
            pub fn perp(&self, r: &Self) -> Self
            { PV::new(self.v.perp(&r.v)) }

            #[inline]
            pub fn ortho_normalize(v0: &Self, v1: &Self) -> (Self, Self) {
                let (out0, out1) = $Vn::ortho_normalize(&v0.v, &v1.v);
                (PV::new(out0), PV::new(out1))
            }

            #[inline]
            pub fn angle_to(&self, other: &Self) -> X::Alpha
            { self.v.angle_to(&other.v) }
        }

        impl<X: Ring, S> Add for PV<$Vn<X>, S> {
            type Output = Self;

            #[inline(always)]
            fn add(self, other: Self) -> Self
            { PV::new(self.v + other.v) }
        }

        impl<'a, 'b, X: Ring, S> Add<&'b PV<$Vn<X>, S>> for &'a PV<$Vn<X>, S> {
            type Output = PV<$Vn<X>, S>;

            #[inline(always)]
            fn add(self, other: &'b PV<$Vn<X>, S>) -> Self::Output
            { PV::new(&self.v + &other.v) }
        }

        impl<X: Ring, S> Sub for PV<$Vn<X>, S> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, other: Self) -> Self
            { PV::new(self.v - other.v) }
        }

        impl<'a, 'b, X: Ring, S> Sub<&'b PV<$Vn<X>, S>> for &'a PV<$Vn<X>, S> {
            type Output = PV<$Vn<X>, S>;

            #[inline(always)]
            fn sub(self, other: &'b PV<$Vn<X>, S>) -> Self::Output
            { PV::new(&self.v - &other.v) }
        }

        impl<X: Ring, S> Neg for PV<$Vn<X>, S> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self
            { PV::new(-self.v) }
        }

        impl<X: Ring, S> Mul<X> for PV<$Vn<X>, S> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, r: X) -> Self
            { PV::new(self.v * r) }
        }

        impl<X: Field, S> Div<X> for PV<$Vn<X>, S> {
            type Output = Self;

            #[inline(always)]
            fn div(self, r: X) -> Self
            { PV::new(self.v / r) }
        }

        impl<X: fmt::Display, S> fmt::Display for PV<$Vn<X>, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { self.v.fmt_named(concat!("P", stringify!($Vn)), f) }
        }
    )*};
}

impl_tagged_vector!{ V2 V3 V4 }

impl<X: Field, S> PV<V3<X>, S> {
    #[inline]
    pub fn cross(&self, other: &Self) -> Self
    { PV::new(self.v.cross(&other.v)) }
}
