/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use spatial_array_types::{Ring, V2, V3, V4, M33, M44};

/// Scalar types that can be stored in a byte buffer.
///
/// Values are stored in native byte order, with no alignment requirement.
pub trait BufferScalar: Ring + bytemuck::Pod + private::Sealed {
    /// Size in bytes.
    const SIZE: usize;

    /// Read a value from exactly `SIZE` bytes.
    #[inline]
    fn read(bytes: &[u8]) -> Self
    { bytemuck::pod_read_unaligned(bytes) }

    /// Write a value to exactly `SIZE` bytes.
    #[inline]
    fn write(self, bytes: &mut [u8])
    { bytes.copy_from_slice(bytemuck::bytes_of(&self)) }
}

mod private {
    pub trait Sealed { }
}

macro_rules! impl_buffer_scalar {
    ($($T:ident)*) => {$(
        impl private::Sealed for $T { }
        impl BufferScalar for $T {
            const SIZE: usize = std::mem::size_of::<$T>();
        }
    )*};
}

impl_buffer_scalar!{ f32 f64 i32 i64 }

/// A vector or matrix type that can be viewed in a byte buffer.
///
/// The element is stored as `LEN` consecutive scalars, in the flat order of
/// the type (column-major for matrices).
pub trait Element: Copy {
    type Scalar: BufferScalar;

    /// Number of scalar components.
    const LEN: usize;

    /// Build an element from its flat components.
    fn from_flat_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// The flat components.
    fn flat(&self) -> &[Self::Scalar];
}

/// Square matrices, whose components can also be addressed by row and column.
pub trait MatrixElement: Element {
    /// Number of rows (and columns).
    const N: usize;
}

macro_rules! impl_vector_element {
    ($({$Vn:ident $n:tt})*) => {$(
        impl<X: BufferScalar> Element for $Vn<X> {
            type Scalar = X;
            const LEN: usize = $n;

            #[inline]
            fn from_flat_fn<F: FnMut(usize) -> X>(f: F) -> Self
            { $Vn::from_fn(f) }

            #[inline]
            fn flat(&self) -> &[X]
            { &self.0[..] }
        }
    )*};
}

impl_vector_element!{ {V2 2} {V3 3} {V4 4} }

macro_rules! impl_matrix_element {
    ($({$Mnn:ident $n:tt $nn:tt})*) => {$(
        impl<X: BufferScalar> Element for $Mnn<X> {
            type Scalar = X;
            const LEN: usize = $nn;

            #[inline]
            fn from_flat_fn<F: FnMut(usize) -> X>(f: F) -> Self
            { $Mnn::from_flat(std::array::from_fn(f)) }

            #[inline]
            fn flat(&self) -> &[X]
            { self.as_flat() }
        }

        impl<X: BufferScalar> MatrixElement for $Mnn<X> {
            const N: usize = $n;
        }
    )*};
}

impl_matrix_element!{ {M33 3 9} {M44 4 16} }
