/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size linear algebra for 2, 3 and 4 dimensions.
//!
//! This crate gathers the workspace's member crates:
//!
//! * [`array_types`]: `V2`/`V3`/`V4` vectors and `M33`/`M44` matrices over
//!   `f32`, `f64`, `i32` and `i64`, with contexts for scratch space.
//! * [`space`]: `PV`/`PM`, the same types tagged with coordinate spaces.
//! * [`direct`]: views of vectors and matrices stored in byte buffers.
//!
//! The most commonly used items are re-exported at the root.

pub use spatial_array_types as array_types;
pub use spatial_space as space;
pub use spatial_direct as direct;

pub use spatial_array_types::{V2, V3, V4, M33, M44};
pub use spatial_array_types::{Context2, Context3, Context4};
pub use spatial_array_types::{Ring, Field, Tolerances, AxisError, IndexError};
pub use spatial_space::{PV, PM, PV2, PV3, PV4, PM33, PM44};
pub use spatial_direct::{Direct, DirectRef, BufferError};
