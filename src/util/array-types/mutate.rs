/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Out-parameter (`*_into`) and in-place (`*_in_place`) forms of vector ops.
//!
//! Each of these is a thin wrapper around the value-returning method of the
//! same name, so all three forms produce bit-identical results.
//! Both forms return the written vector for chaining.

use crate::traits::{Ring, Field};
use crate::types::*;

gen_each!{
    @{Vn}
    impl_mutating_forms!(
        {$Vn:ident}
    ) => {
        impl<X: Ring> $Vn<X> {
            #[inline]
            pub fn add_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a + b; out }

            #[inline]
            pub fn add_in_place(&mut self, b: &Self) -> &mut Self
            { *self = &*self + b; self }

            #[inline]
            pub fn sub_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a - b; out }

            #[inline]
            pub fn sub_in_place(&mut self, b: &Self) -> &mut Self
            { *self = &*self - b; self }

            #[inline]
            pub fn scale_into<'o>(a: &Self, r: X, out: &'o mut Self) -> &'o mut Self
            { *out = a * r; out }

            #[inline]
            pub fn scale_in_place(&mut self, r: X) -> &mut Self
            { *self = &*self * r; self }

            #[inline]
            pub fn add_scaled_into<'o>(a: &Self, w: &Self, r: X, out: &'o mut Self) -> &'o mut Self
            { *out = a.add_scaled(w, r); out }

            #[inline]
            pub fn add_scaled_in_place(&mut self, w: &Self, r: X) -> &mut Self
            { *self = self.add_scaled(w, r); self }

            #[inline]
            pub fn lerp_into<'o>(a: &Self, b: &Self, alpha: X::Alpha, out: &'o mut Self) -> &'o mut Self
            { *out = a.lerp(b, alpha); out }

            #[inline]
            pub fn lerp_in_place(&mut self, b: &Self, alpha: X::Alpha) -> &mut Self
            { *self = self.lerp(b, alpha); self }

            #[inline]
            pub fn abs_into<'o>(a: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a.abs(); out }

            #[inline]
            pub fn abs_in_place(&mut self) -> &mut Self
            { *self = self.abs(); self }

            #[inline]
            pub fn clamp_into<'o>(a: &Self, lo: X, hi: X, out: &'o mut Self) -> &'o mut Self
            { *out = a.clamp(lo, hi); out }

            #[inline]
            pub fn clamp_in_place(&mut self, lo: X, hi: X) -> &mut Self
            { *self = self.clamp(lo, hi); self }

            #[inline]
            pub fn clamp_min_in_place(&mut self, lo: X) -> &mut Self
            { *self = self.clamp_min(lo); self }

            #[inline]
            pub fn clamp_max_in_place(&mut self, hi: X) -> &mut Self
            { *self = self.clamp_max(hi); self }

            #[inline]
            pub fn clamp_by_into<'o>(a: &Self, lo: &Self, hi: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a.clamp_by(lo, hi); out }

            #[inline]
            pub fn clamp_by_in_place(&mut self, lo: &Self, hi: &Self) -> &mut Self
            { *self = self.clamp_by(lo, hi); self }

            #[inline]
            pub fn clamp_min_by_in_place(&mut self, lo: &Self) -> &mut Self
            { *self = self.clamp_min_by(lo); self }

            #[inline]
            pub fn clamp_max_by_in_place(&mut self, hi: &Self) -> &mut Self
            { *self = self.clamp_max_by(hi); self }

            #[inline]
            pub fn unit_into<'o>(a: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a.unit(); out }

            #[inline]
            pub fn unit_in_place(&mut self) -> &mut Self
            { *self = self.unit(); self }

            #[inline]
            pub fn par_into<'o>(a: &Self, r: &Self, out: &'o mut Self) -> &'o mut Self
            { *out = a.par(r); out }

            #[inline]
            pub fn par_in_place(&mut self, r: &Self) -> &mut Self
            { *self = self.par(r); self }
        }
    }
}

impl<X: Field> V3<X> {
    #[inline]
    pub fn cross_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self
    { *out = a.cross(b); out }

    #[inline]
    pub fn cross_in_place(&mut self, b: &Self) -> &mut Self
    { *self = self.cross(b); self }
}
