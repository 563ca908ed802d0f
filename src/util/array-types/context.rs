/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Scratch space for operations that need temporaries.
//!
//! A context is created once per logical computation and handed by `&mut`
//! to every operation that needs scratch space.  Its contents carry no
//! meaning between calls.
//!
//! Because every consumer borrows the context mutably, two threads can't
//! share one, and an operation can't hand the context it is currently
//! using to a nested operation.  Both mistakes are compile errors.

use crate::traits::Ring;
use crate::types::*;

/// Scratch space for operations on 2-dimensional vectors.
#[derive(Debug, Clone, Default)]
pub struct Context2<X=f64> {
    pub(crate) vs: [V2<X>; 2],
}

/// Scratch space for operations on 3-dimensional vectors and 3x3 matrices.
#[derive(Debug, Clone, Default)]
pub struct Context3<X=f64> {
    pub(crate) vs: [V3<X>; 2],
    pub(crate) cofactors: M33<X>,
}

/// Scratch space for operations on 4-dimensional vectors and 4x4 matrices.
#[derive(Debug, Clone, Default)]
pub struct Context4<X=f64> {
    pub(crate) vs: [V4<X>; 2],
    pub(crate) cofactors: M44<X>,
    pub(crate) minor: M33<X>,
}

pub type Context2F = Context2<f32>;
pub type Context2D = Context2<f64>;
pub type Context2I = Context2<i32>;
pub type Context2L = Context2<i64>;
pub type Context3F = Context3<f32>;
pub type Context3D = Context3<f64>;
pub type Context3I = Context3<i32>;
pub type Context3L = Context3<i64>;
pub type Context4F = Context4<f32>;
pub type Context4D = Context4<f64>;
pub type Context4I = Context4<i32>;
pub type Context4L = Context4<i64>;

gen_each!{
    [{Context2} {Context3} {Context4}]
    impl_context_new!({$Ctx:ident}) => {
        impl<X: Ring> $Ctx<X> {
            pub fn new() -> Self
            { Default::default() }
        }
    }
}
