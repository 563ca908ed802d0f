/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Vectors and matrices stored in caller-owned byte buffers.
//!
//! A `Direct` (or read-only `DirectRef`) is a view of one `V2`/`V3`/`V4`/
//! `M33`/`M44` packed at some byte offset into a `[u8]`, as it would be in
//! a vertex or uniform buffer.  Components are stored in native byte order
//! with no alignment requirement, and matrices are column-major.
//!
//! Every access recomputes its address from the view's fixed base and
//! offset, and is checked against the buffer.  Views never allocate, and
//! have no read/write cursor.
//!
//! ```
//! use spatial_array_types::{V3, M33};
//! use spatial_direct::{Direct, DirectRef};
//!
//! let mut bytes = vec![0u8; 3 * 12];
//! let mut second = Direct::<V3<f32>>::at_index(&mut bytes, 1)?;
//! second.store(&V3([1.0, 2.0, 3.0]));
//! second.set(2, 4.0)?;
//!
//! let view = DirectRef::<V3<f32>>::new(&bytes, 12)?;
//! assert_eq!(V3([1.0, 2.0, 4.0]), view.load());
//!
//! // a 3x3 matrix of floats fills all 36 bytes, so it cannot start at 12
//! assert!(DirectRef::<M33<f32>>::new(&bytes, 0).is_ok());
//! assert!(DirectRef::<M33<f32>>::new(&bytes, 12).is_err());
//! # Ok::<(), spatial_direct::BufferError>(())
//! ```

#[macro_use]
extern crate log;

pub use self::scalar::{BufferScalar, Element, MatrixElement};
mod scalar;

pub use self::view::{Direct, DirectRef};
mod view;

pub use self::errors::BufferError;
mod errors;
