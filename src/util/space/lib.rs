/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Vectors and matrices tagged with the coordinate space they live in.
//!
//! `PV<V, S>` is a vector `V` in space `S`, and `PM<M, S0, S1>` is a matrix
//! `M` mapping vectors from space `S0` into space `S1`.  The tags are
//! zero-sized and exist only at compile time; a tagged value has exactly
//! the layout of the untagged one.
//!
//! Spaces are just types. Uninhabited enums work well:
//!
//! ```
//! use spatial_array_types::{M33, V3};
//! use spatial_space::{PM33, PV3};
//!
//! enum Model {}
//! enum World {}
//! enum View {}
//!
//! let model_to_world: PM33<f64, Model, World> = PM33::new(M33::eye() * 2.0);
//! let world_to_view: PM33<f64, World, View> = PM33::new(M33::eye());
//!
//! // composition reads right to left, like the matrix product it performs
//! let model_to_view: PM33<f64, Model, View> = &world_to_view * &model_to_world;
//! assert_eq!(model_to_view, model_to_world.then(&world_to_view));
//!
//! let p: PV3<f64, Model> = PV3::new(V3([1.0, 2.0, 3.0]));
//! let q: PV3<f64, View> = &model_to_view * &p;
//! assert_eq!(&V3([2.0, 4.0, 6.0]), q.as_untyped());
//! ```
//!
//! Mixing up spaces is a compile error:
//!
//! ```compile_fail
//! use spatial_array_types::M33;
//! use spatial_space::PM33;
//!
//! enum A {}
//! enum B {}
//! enum C {}
//! enum D {}
//!
//! let a_to_b: PM33<f64, A, B> = PM33::new(M33::eye());
//! let c_to_d: PM33<f64, C, D> = PM33::new(M33::eye());
//! let _ = a_to_b.then(&c_to_d);
//! ```
//!
//! ```compile_fail
//! use spatial_array_types::V3;
//! use spatial_space::PV3;
//!
//! enum A {}
//! enum B {}
//!
//! let a: PV3<f64, A> = PV3::new(V3([1.0, 2.0, 3.0]));
//! let b: PV3<f64, B> = PV3::new(V3([1.0, 2.0, 3.0]));
//! let _ = a + b;
//! ```
//!
//! Values in different spaces cannot even be compared; drop the tags first.
//!
//! ```compile_fail
//! use spatial_array_types::V3;
//! use spatial_space::PV3;
//!
//! enum A {}
//! enum B {}
//!
//! let a: PV3<f64, A> = PV3::new(V3([1.0, 2.0, 3.0]));
//! let b: PV3<f64, B> = PV3::new(V3([1.0, 2.0, 3.0]));
//! let _ = a == b;
//! ```

#[cfg(test)]
#[macro_use]
extern crate spatial_assert_close;

pub use self::vector::{PV, PV2, PV3, PV4};
mod vector;

pub use self::matrix::{PM, PM33, PM44};
mod matrix;
