/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vectors and square matrices for linear algebra.
//!
//! `V2`, `V3`, `V4`, `M33` and `M44` are plain `Copy` newtypes over arrays.
//! Every operation is written once, generically over the scalar domain
//! (`f32`, `f64`, `i32` or `i64`), and operations that need division,
//! square roots or trigonometry are only available on the float domains.
//!
//! Operations come in up to three forms:
//!
//! * a value-returning form (`a.unit()`, `&a * &b`, `m.inv(ctx)`),
//! * an out-parameter form writing to a caller-supplied instance
//!   (`V3::unit_into(&a, &mut out)`, `M33::mul_into(&a, &b, &mut out)`),
//! * an in-place form (`a.unit_in_place()`, `m.inv_in_place(ctx)`).
//!
//! Operations that need temporaries borrow them from a `Context`.

#[cfg(test)]
#[macro_use]
extern crate spatial_assert_close;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub use self::traits::{Ring, Field};
mod traits;

pub use self::types::*;
mod types;

pub use self::errors::{AxisError, IndexError};
mod errors;

pub use self::approx::Tolerances;
mod approx;

pub use self::context::*;
mod context;

mod ops;
mod mutate;
mod transform;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::{dot, Dot, IsV, ScalarT, RandomUnit};
