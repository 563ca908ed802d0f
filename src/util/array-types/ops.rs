/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Ring, Field};

use super::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//       Nothing is ever implicitly converted between scalar domains.
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_add_sub!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Ring> Add<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { $Vn::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { $Vn::from_fn(|k| self[k] - other[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_unops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { $Vn::from_fn(|k| -self.0[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar `op` vector
gen_each!{
    @{Vn}
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each scalar type rather than
    //       being generic over X: Ring
    @{ring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_v_ops!(
        {$Vn:ident}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)*> Mul<$($ref_a)* $Vn<$X>> for $X {
            type Output = $Vn<$X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* $Vn<$X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar_ops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)* X: Ring> Mul<X> for $($ref_a)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { $Vn::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        impl<$($lt_a)* X: Field> Div<X> for $($ref_a)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { $Vn::from_fn(|k| self[k] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

gen_each!{
    [ {V2} {V3} {V4} {M33} {M44} ]
    impl_assign_ops!(
        {$Cn:ident}
    ) => {
        // thing += thing;
        impl<X, B> AddAssign<B> for $Cn<X> where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // thing -= thing;
        impl<X, B> SubAssign<B> for $Cn<X> where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // thing *= scalar;
        // matrix *= matrix;
        impl<X, B> MulAssign<B> for $Cn<X> where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // thing /= scalar;
        impl<X, B> DivAssign<B> for $Cn<X> where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix and matrix-scalar ops.

gen_each!{
    @{Mnn_Vn_n_nn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_binops!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Ring> Add<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn add(self, other: $($ref_b)* $Mnn<X>) -> Self::Output
            { $Mnn(std::array::from_fn(|c| &self.0[c] + &other.0[c])) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Mnn<X>) -> Self::Output
            { $Mnn(std::array::from_fn(|c| &self.0[c] - &other.0[c])) }
        }

        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* X: Ring> Mul<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn mul(self, other: $($ref_b)* $Mnn<X>) -> Self::Output {
                let mut out = $Mnn::zero();
                $Mnn::mul_into(&self, &other, &mut out);
                out
            }
        }
    }
}

gen_each!{
    @{Mnn_Vn_n_nn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_unops!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { $Mnn(std::array::from_fn(|c| -&self.0[c])) }
        }

        // matrix * scalar
        impl<$($lt_a)* X: Ring> Mul<X> for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { $Mnn(std::array::from_fn(|c| &self.0[c] * scalar)) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Field> Div<X> for $($ref_a)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { $Mnn(std::array::from_fn(|c| &self.0[c] / scalar)) }
        }

        // matrix * column vector
        impl<'v, $($lt_a)* X: Ring> Mul<&'v $Vn<X>> for $($ref_a)* $Mnn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, vector: &'v $Vn<X>) -> Self::Output
            { $Mnn::mul_vec_impl(&self, vector) }
        }

        impl<$($lt_a)* X: Ring> Mul<$Vn<X>> for $($ref_a)* $Mnn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, vector: $Vn<X>) -> Self::Output
            { $Mnn::mul_vec_impl(&self, &vector) }
        }
    }
}

// ---------------------------------------------------------------------------

// The Display format is a fixed diagnostic rendering of the form
// `[V3 1 2 3]`, or `[M33 r0c0 r0c1 ... r2c2]` in row-major reading order.
// The format spec (e.g. `{:.3}`) is applied to each element.
gen_each!{
    @{Vn_n}
    impl_v_display!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: fmt::Display> fmt::Display for $Vn<X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt_named(stringify!($Vn), self.0.iter(), f) }
        }
    }
}

gen_each!{
    @{Mnn_Vn_n_nn}
    impl_m_display!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt}
    ) => {
        impl<X: fmt::Display> fmt::Display for $Mnn<X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { self.fmt_named(stringify!($Mnn), f) }
        }

        impl<X: fmt::Display> $Mnn<X> {
            /// Write the diagnostic format under a different type name.
            #[doc(hidden)]
            pub fn fmt_named(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let row_major = (0..$n).flat_map(|r| (0..$n).map(move |c| (r, c)));
                fmt_named(name, row_major.map(|(r, c)| &self.0[c].0[r]), f)
            }
        }
    }
}

gen_each!{
    @{Vn_n}
    impl_v_display_named!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: fmt::Display> $Vn<X> {
            /// Write the diagnostic format under a different type name.
            #[doc(hidden)]
            pub fn fmt_named(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt_named(name, self.0.iter(), f) }
        }
    }
}

fn fmt_named<'a, X, I>(name: &str, elems: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    X: fmt::Display + 'a,
    I: Iterator<Item=&'a X>,
{
    write!(f, "[{}", name)?;
    for x in elems {
        write!(f, " ")?;
        fmt::Display::fmt(x, f)?;
    }
    write!(f, "]")
}

// ---------------------------------------------------------------------------
