/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::ring::Ring;
mod ring {
    /// Trait for the scalar domains: scalars with addition, multiplication,
    /// and subtraction.
    ///
    /// You get `f32`, `f64`, `i32` and `i64`. Every operation on a vector or
    /// matrix stays inside the domain of its scalars; nothing is silently
    /// widened to a larger type.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Ring: crate::traits::internal::PrimitiveRing + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// It's currently just primitive, real floating point types.
    /// Cross products and inversion are only defined for these.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Field: Ring + crate::traits::internal::PrimitiveFloat + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field and Ring.
gen_each!{
    @{field}
    impl_field!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    impl_ring!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

/// Arithmetic required of the scalar domains.
///
/// These are supertraits of `Ring` and `Field`, so any generic code bounded
/// by those can use them freely. They are not meant to be implemented
/// elsewhere and their contents may change at any time.
#[doc(hidden)]
pub mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};
    use std::fmt;

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveRing
        : Sized + Copy + Clone + Default
        + PartialEq + PartialOrd
        + fmt::Debug + fmt::Display
        + SelfAdd + SelfSub + SelfMul + SelfNeg
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
        + 'static
    {
        /// `|det|` at or below this value makes a matrix singular.
        const SINGULAR_EPSILON: Self;

        /// Default tolerance for approximate comparisons, as `(abs, rel)`.
        const DEFAULT_TOLERANCES: (Self, Self);

        /// The type of the parameter to linear interpolation.
        ///
        /// Integer domains interpolate with a float parameter and truncate.
        type Alpha: Copy + fmt::Debug;

        fn from_int(i: i8) -> Self;
        #[inline(always)] fn two() -> Self { Self::from_int(2) }

        fn abs(self) -> Self;
        fn min(self, b: Self) -> Self;
        fn max(self, b: Self) -> Self;

        /// Square root, truncated to the domain. (exact for floats)
        fn sqrt_trunc(self) -> Self;

        /// `a + (b - a) * alpha`
        fn lerp(a: Self, b: Self, alpha: Self::Alpha) -> Self;

        /// Division, truncated to the domain. Dividing by zero gives zero.
        fn div_trunc(self, b: Self) -> Self;

        /// The angle in `[0, pi]` whose cosine is `dot / sqrt(sqnorm_a * sqnorm_b)`.
        ///
        /// This is `pi / 2` when either norm is zero.
        fn angle_between(dot: Self, sqnorm_a: Self, sqnorm_b: Self) -> Self::Alpha;

        /// Comparison of two values with absolute and relative tolerances.
        fn is_close(a: Self, b: Self, abs: Self, rel: Self) -> bool;

        /// Feed the value to a hasher. Values that compare equal hash equally.
        fn hash_bits<H: std::hash::Hasher>(self, state: &mut H);
    }

    gen_each!{
        @{field}
        impl_primitive_ring_float!({$T:ident}) => {
            impl PrimitiveRing for $T {
                const SINGULAR_EPSILON: $T = singular_epsilon::$T;
                const DEFAULT_TOLERANCES: ($T, $T) = default_tolerances::$T;

                type Alpha = $T;

                #[inline(always)] fn from_int(i: i8) -> $T { i as $T }
                #[inline(always)] fn abs(self) -> $T { self.abs() }
                #[inline(always)] fn min(self, b: Self) -> $T { self.min(b) }
                #[inline(always)] fn max(self, b: Self) -> $T { self.max(b) }
                #[inline(always)] fn sqrt_trunc(self) -> $T { self.sqrt() }

                #[inline(always)]
                fn lerp(a: $T, b: $T, alpha: $T) -> $T
                { a + (b - a) * alpha }

                #[inline]
                fn div_trunc(self, b: $T) -> $T {
                    match b == 0.0 {
                        true => 0.0,
                        false => self / b,
                    }
                }

                #[inline]
                fn angle_between(dot: $T, sqnorm_a: $T, sqnorm_b: $T) -> $T {
                    let denom = sqnorm_a.sqrt() * sqnorm_b.sqrt();
                    if denom == 0.0 {
                        return std::$T::consts::FRAC_PI_2;
                    }
                    (dot / denom).max(-1.0).min(1.0).acos()
                }

                #[inline]
                fn is_close(a: $T, b: $T, abs: $T, rel: $T) -> bool {
                    // catch infinities of same sign
                    if a == b { return true; }
                    // catch infinities of opposite sign, avoiding infinite relative tolerance
                    if a.is_infinite() || b.is_infinite() { return false; }
                    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
                }

                // -0.0 == 0.0, so they must hash alike
                #[inline]
                fn hash_bits<H: std::hash::Hasher>(self, state: &mut H) {
                    let x = if self == 0.0 { 0.0 } else { self };
                    std::hash::Hash::hash(&x.to_bits(), state)
                }
            }
        };
    }

    gen_each!{
        @{int}
        impl_primitive_ring_int!({$T:ident}) => {
            impl PrimitiveRing for $T {
                const SINGULAR_EPSILON: $T = 0;
                const DEFAULT_TOLERANCES: ($T, $T) = (0, 0);

                type Alpha = f64;

                #[inline(always)] fn from_int(i: i8) -> $T { i as $T }
                #[inline(always)] fn abs(self) -> $T { self.wrapping_abs() }
                #[inline(always)] fn min(self, b: Self) -> $T { std::cmp::min(self, b) }
                #[inline(always)] fn max(self, b: Self) -> $T { std::cmp::max(self, b) }

                // Newton's method, done entirely in the integer domain.
                fn sqrt_trunc(self) -> $T {
                    if self <= 0 {
                        return 0;
                    }
                    let mut x = self / 2 + 1;
                    let mut y = (x + self / x) / 2;
                    while y < x {
                        x = y;
                        y = (x + self / x) / 2;
                    }
                    x
                }

                // Only the step is computed in floating point; the endpoints
                // are exact, so `alpha == 0` gives `a` and `alpha == 1` gives `b`.
                // `b - a` can exceed the domain, so the step is taken in i128
                // and the result saturates.
                #[inline]
                fn lerp(a: $T, b: $T, alpha: f64) -> $T {
                    if alpha == 0.0 {
                        return a;
                    }
                    if alpha == 1.0 {
                        return b;
                    }
                    let step = ((b as i128 - a as i128) as f64 * alpha) as i128;
                    let out = a as i128 + step;
                    out.max($T::MIN as i128).min($T::MAX as i128) as $T
                }

                #[inline]
                fn div_trunc(self, b: $T) -> $T {
                    match b {
                        0 => 0,
                        _ => self.wrapping_div(b),
                    }
                }

                fn angle_between(dot: $T, sqnorm_a: $T, sqnorm_b: $T) -> f64 {
                    let denom = (sqnorm_a as f64).sqrt() * (sqnorm_b as f64).sqrt();
                    if denom == 0.0 {
                        return std::f64::consts::FRAC_PI_2;
                    }
                    (dot as f64 / denom).max(-1.0).min(1.0).acos()
                }

                #[inline]
                fn is_close(a: $T, b: $T, abs: $T, _rel: $T) -> bool
                { (a as i128 - b as i128).abs() <= abs as i128 }

                #[inline(always)]
                fn hash_bits<H: std::hash::Hasher>(self, state: &mut H)
                { std::hash::Hash::hash(&self, state) }
            }
        };
    }

    #[allow(non_upper_case_globals)]
    mod singular_epsilon {
        pub const f32: f32 = 1e-6;
        pub const f64: f64 = 1e-12;
    }

    #[allow(non_upper_case_globals)]
    mod default_tolerances {
        pub const f32: (f32, f32) = (1e-6, 1e-5);
        pub const f64: (f64, f64) = (1e-12, 1e-9);
    }

    pub trait PrimitiveFloat
        : PrimitiveRing<Alpha=Self>
        + SelfDiv
        + rand::Rand
    {
        // (allow(unused) because these are arbitrarily added as they're needed,
        //  and it's annoying to have to remove them only to possibly later have
        //  to add them back)
        #[allow(unused)] fn sqrt(self) -> Self;
        #[allow(unused)] fn acos(self) -> Self;
        #[allow(unused)] fn sin(self) -> Self;
        #[allow(unused)] fn cos(self) -> Self;
        #[allow(unused)] fn tan(self) -> Self;
        #[allow(unused)] fn pi() -> Self;

        #[allow(unused)] fn uniform_with<R: rand::Rng>(rng: &mut R, _: (Self, Self)) -> Self;
    }

    gen_each!{
        @{field}
        impl_primitive_float!({$T:ident}) => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
                #[inline(always)] fn acos(self) -> $T { self.acos() }
                #[inline(always)] fn sin(self) -> $T { self.sin() }
                #[inline(always)] fn cos(self) -> $T { self.cos() }
                #[inline(always)] fn tan(self) -> $T { self.tan() }
                #[inline(always)] fn pi() -> $T { std::$T::consts::PI }

                #[inline(always)]
                fn uniform_with<R: rand::Rng>(rng: &mut R, (lo, hi): (Self, Self)) -> Self {
                    let alpha: Self = rng.gen();
                    lo + (hi - lo) * alpha
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::internal::PrimitiveRing;

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(0, PrimitiveRing::sqrt_trunc(0i32));
        assert_eq!(0, PrimitiveRing::sqrt_trunc(-4i32));
        assert_eq!(1, PrimitiveRing::sqrt_trunc(3i32));
        assert_eq!(2, PrimitiveRing::sqrt_trunc(4i32));
        assert_eq!(5, PrimitiveRing::sqrt_trunc(35i64));
        assert_eq!(46340, PrimitiveRing::sqrt_trunc(i32::max_value()));
        assert_eq!(3037000499, PrimitiveRing::sqrt_trunc(i64::max_value()));
    }

    #[test]
    fn integer_lerp_endpoints() {
        assert_eq!(-7, <i32 as PrimitiveRing>::lerp(-7, 12, 0.0));
        assert_eq!(12, <i32 as PrimitiveRing>::lerp(-7, 12, 1.0));
        // truncates toward zero in between
        assert_eq!(2, <i32 as PrimitiveRing>::lerp(0, 5, 0.5));
        assert_eq!(-2, <i64 as PrimitiveRing>::lerp(0, -5, 0.5));
    }

    #[test]
    fn integer_lerp_wide_span() {
        let (a, b) = (-2_000_000_000i32, 2_000_000_000i32);
        assert_eq!(a, <i32 as PrimitiveRing>::lerp(a, b, 0.0));
        assert_eq!(b, <i32 as PrimitiveRing>::lerp(a, b, 1.0));
        assert_eq!(0, <i32 as PrimitiveRing>::lerp(a, b, 0.5));
        assert_eq!(-1_000_000_000, <i32 as PrimitiveRing>::lerp(a, b, 0.25));
        assert_eq!(i32::max_value(), <i32 as PrimitiveRing>::lerp(i32::max_value(), i32::min_value(), 0.0));

        let (a, b) = (i64::min_value(), i64::max_value());
        assert_eq!(a, <i64 as PrimitiveRing>::lerp(a, b, 0.0));
        assert_eq!(b, <i64 as PrimitiveRing>::lerp(a, b, 1.0));
        assert_eq!(0, <i64 as PrimitiveRing>::lerp(a, b, 0.5));
        // extrapolation saturates
        assert_eq!(i32::max_value(), <i32 as PrimitiveRing>::lerp(0, 2_000_000_000, 2.0));
    }

    #[test]
    fn integer_close_wide_span() {
        assert!(!i32::is_close(i32::min_value(), i32::max_value(), 0, 0));
        assert!(i64::is_close(i64::max_value(), i64::max_value() - 2, 2, 0));
    }

    #[test]
    fn div_trunc() {
        assert_eq!(2, PrimitiveRing::div_trunc(7i32, 3));
        assert_eq!(-2, PrimitiveRing::div_trunc(-7i64, 3));
        assert_eq!(0, PrimitiveRing::div_trunc(7i32, 0));
        assert_eq!(0.0, PrimitiveRing::div_trunc(7.0f64, 0.0));
        assert_eq!(3.5, PrimitiveRing::div_trunc(7.0f32, 2.0));
    }

    #[test]
    fn angle_between() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert_eq!(half_pi, <i32 as PrimitiveRing>::angle_between(0, 0, 25));
        assert_eq!(half_pi, <f64 as PrimitiveRing>::angle_between(0.0, 4.0, 0.0));
        assert_eq!(0.0, <i64 as PrimitiveRing>::angle_between(6, 4, 9));
        assert_eq!(std::f64::consts::PI, <i32 as PrimitiveRing>::angle_between(-6, 4, 9));
    }

    #[test]
    fn float_close() {
        assert!(f64::is_close(1.0, 1.0 + 1e-12, 0.0, 1e-9));
        assert!(!f64::is_close(1.0, 1.001, 0.0, 1e-9));
        assert!(f32::is_close(0.0, 1e-7, 1e-6, 0.0));
        assert!(!f64::is_close(std::f64::INFINITY, std::f64::NEG_INFINITY, 1.0, 1.0));
    }
}
