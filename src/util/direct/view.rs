/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::marker::PhantomData;

use crate::errors::{BufferError, checked_add, checked_mul, check_component};
use crate::scalar::{BufferScalar, Element, MatrixElement};

type ScalarOf<T> = <T as Element>::Scalar;

/// A read-only view of an element of type `T` stored in a byte buffer.
pub struct DirectRef<'a, T> {
    // invariant: exactly `LEN * SIZE` bytes
    elem: &'a [u8],
    offset: usize,
    _element: PhantomData<fn() -> T>,
}

/// A mutable view of an element of type `T` stored in a byte buffer.
pub struct Direct<'a, T> {
    // invariant: exactly `LEN * SIZE` bytes
    elem: &'a mut [u8],
    offset: usize,
    _element: PhantomData<fn() -> T>,
}

#[inline]
fn element_size<T: Element>() -> usize
{ T::LEN * <ScalarOf<T>>::SIZE }

/// Validate that an element fits at `offset`, returning its byte range.
fn element_span<T: Element>(available: usize, offset: usize) -> Result<(usize, usize), BufferError> {
    let end = checked_add(offset, element_size::<T>())?;
    if end > available {
        trace!("rejected buffer view: bytes {}..{} of {}", offset, end, available);
        return Err(BufferError::Length { start: offset, end, available });
    }
    Ok((offset, end))
}

/// Byte range of flat component `index`, relative to the start of the element.
fn component_span<T: Element>(index: usize) -> Result<(usize, usize), BufferError> {
    check_component(index, T::LEN)?;
    let size = <ScalarOf<T>>::SIZE;
    let start = checked_mul(index, size)?;
    Ok((start, checked_add(start, size)?))
}

fn matrix_component<T: MatrixElement>(row: usize, col: usize) -> Result<usize, BufferError> {
    check_component(row, T::N)?;
    check_component(col, T::N)?;
    Ok(col * T::N + row)
}

impl<'a, T: Element> DirectRef<'a, T> {
    /// View the element stored at byte `offset`.
    pub fn new(bytes: &'a [u8], offset: usize) -> Result<Self, BufferError> {
        let (start, end) = element_span::<T>(bytes.len(), offset)?;
        Ok(DirectRef { elem: &bytes[start..end], offset, _element: PhantomData })
    }

    /// View the `index`th element of a buffer of tightly packed elements.
    pub fn at_index(bytes: &'a [u8], index: usize) -> Result<Self, BufferError> {
        let offset = checked_mul(index, element_size::<T>())?;
        DirectRef::new(bytes, offset)
    }

    /// Byte offset of the element within the buffer.
    #[inline]
    pub fn offset(&self) -> usize
    { self.offset }

    /// Read a flat component.
    pub fn get(&self, index: usize) -> Result<ScalarOf<T>, BufferError> {
        let (start, end) = component_span::<T>(index)?;
        Ok(<ScalarOf<T>>::read(&self.elem[start..end]))
    }

    /// Read the whole element.
    pub fn load(&self) -> T {
        let size = <ScalarOf<T>>::SIZE;
        T::from_flat_fn(|i| <ScalarOf<T>>::read(&self.elem[i * size..(i + 1) * size]))
    }
}

impl<'a, T: MatrixElement> DirectRef<'a, T> {
    /// Read the matrix element at `(row, col)`.
    pub fn get_rc(&self, row: usize, col: usize) -> Result<ScalarOf<T>, BufferError>
    { self.get(matrix_component::<T>(row, col)?) }
}

impl<'a, T: Element> Direct<'a, T> {
    /// View the element stored at byte `offset`.
    pub fn new(bytes: &'a mut [u8], offset: usize) -> Result<Self, BufferError> {
        let (start, end) = element_span::<T>(bytes.len(), offset)?;
        Ok(Direct { elem: &mut bytes[start..end], offset, _element: PhantomData })
    }

    /// View the `index`th element of a buffer of tightly packed elements.
    pub fn at_index(bytes: &'a mut [u8], index: usize) -> Result<Self, BufferError> {
        let offset = checked_mul(index, element_size::<T>())?;
        Direct::new(bytes, offset)
    }

    /// Borrow as a read-only view.
    #[inline]
    pub fn as_ref(&self) -> DirectRef<'_, T>
    { DirectRef { elem: &*self.elem, offset: self.offset, _element: PhantomData } }

    #[inline]
    pub fn offset(&self) -> usize
    { self.offset }

    #[inline]
    pub fn get(&self, index: usize) -> Result<ScalarOf<T>, BufferError>
    { self.as_ref().get(index) }

    #[inline]
    pub fn load(&self) -> T
    { self.as_ref().load() }

    /// Write a flat component.
    pub fn set(&mut self, index: usize, value: ScalarOf<T>) -> Result<(), BufferError> {
        let (start, end) = component_span::<T>(index)?;
        value.write(&mut self.elem[start..end]);
        Ok(())
    }

    /// Write the whole element.
    pub fn store(&mut self, value: &T) {
        let size = <ScalarOf<T>>::SIZE;
        for (chunk, &x) in self.elem.chunks_exact_mut(size).zip(value.flat()) {
            x.write(chunk);
        }
    }

    /// Set every component to `value`.
    pub fn fill(&mut self, value: ScalarOf<T>) {
        let size = <ScalarOf<T>>::SIZE;
        for chunk in self.elem.chunks_exact_mut(size) {
            value.write(chunk);
        }
    }

    /// Copy the element viewed by `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &DirectRef<'_, T>)
    { self.elem.copy_from_slice(src.elem) }
}

impl<'a, T: MatrixElement> Direct<'a, T> {
    #[inline]
    pub fn get_rc(&self, row: usize, col: usize) -> Result<ScalarOf<T>, BufferError>
    { self.as_ref().get_rc(row, col) }

    /// Write the matrix element at `(row, col)`.
    pub fn set_rc(&mut self, row: usize, col: usize, value: ScalarOf<T>) -> Result<(), BufferError>
    { self.set(matrix_component::<T>(row, col)?, value) }
}

impl<'a, T> Clone for DirectRef<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for DirectRef<'a, T> { }

impl<'a, T: Element + fmt::Debug> fmt::Debug for DirectRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectRef")
            .field("offset", &self.offset)
            .field("value", &self.load())
            .finish()
    }
}

impl<'a, T: Element + fmt::Debug> fmt::Debug for Direct<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Direct")
            .field("offset", &self.offset)
            .field("value", &self.load())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatial_array_types::{V2, V3, V4, M33, M44};

    #[test]
    fn construction_is_checked() {
        let bytes = [0u8; 20];
        assert!(DirectRef::<V4<f32>>::new(&bytes, 4).is_ok());
        assert_eq!(
            Err(BufferError::Length { start: 5, end: 21, available: 20 }),
            DirectRef::<V4<f32>>::new(&bytes, 5).map(|v| v.load()),
        );
        assert_eq!(
            Err(BufferError::Overflow { offset: usize::max_value() - 4, extra: 16 }),
            DirectRef::<V4<i32>>::new(&bytes, usize::max_value() - 4).map(|v| v.load()),
        );
        assert!(matches!(
            DirectRef::<V2<f64>>::at_index(&bytes, usize::max_value() / 2),
            Err(BufferError::Overflow { .. }),
        ));
        assert!(DirectRef::<V2<f64>>::at_index(&bytes, 0).is_ok());
        assert!(DirectRef::<V2<f64>>::at_index(&bytes, 1).is_err());
    }

    #[test]
    fn matrix_fills_buffer_exactly() {
        let bytes = [0u8; 36];
        assert_eq!(M33::zero(), DirectRef::<M33<f32>>::new(&bytes, 0).unwrap().load());
        assert_eq!(
            Err(BufferError::Length { start: 12, end: 48, available: 36 }),
            DirectRef::<M33<f32>>::new(&bytes, 12).map(|v| v.load()),
        );
        assert!(DirectRef::<M44<f32>>::new(&bytes, 0).is_err());
    }

    #[test]
    fn component_access() {
        let mut bytes = vec![0u8; 1 + 3 * 8];
        let mut v = Direct::<V3<i64>>::new(&mut bytes, 1).unwrap();
        v.set(0, 7).unwrap();
        v.set(2, -3).unwrap();
        assert_eq!(Err(BufferError::OutOfRange { index: 3, len: 3 }), v.set(3, 1));
        assert_eq!(Ok(-3), v.get(2));
        assert!(v.get(3).is_err());
        assert_eq!(V3([7, 0, -3]), v.load());

        assert_eq!(&7i64.to_ne_bytes()[..], &bytes[1..9]);
        assert_eq!(0, bytes[0]);
    }

    #[test]
    fn store_load_copy_fill() {
        let mut bytes = vec![0u8; 2 * 16 * 4];
        let m = M44::from_fn(|r, c| (r * 4 + c) as f32);

        Direct::<M44<f32>>::at_index(&mut bytes, 0).unwrap().store(&m);
        {
            let (first, second) = bytes.split_at_mut(16 * 4);
            let src = DirectRef::<M44<f32>>::new(first, 0).unwrap();
            let mut dest = Direct::<M44<f32>>::new(second, 0).unwrap();
            dest.copy_from(&src);
            assert_eq!(m, dest.load());
            dest.fill(1.5);
            assert_eq!(M44::from_fn(|_, _| 1.5), dest.load());
        }
        assert_eq!(m, DirectRef::<M44<f32>>::at_index(&bytes, 0).unwrap().load());
    }

    #[test]
    fn matrices_by_row_and_column() {
        let mut bytes = vec![0u8; 9 * 8];
        let mut view = Direct::<M33<f64>>::new(&mut bytes, 0).unwrap();
        view.store(&M33::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]));
        assert_eq!(Ok(6.0), view.get_rc(1, 2));
        // column-major
        assert_eq!(Ok(6.0), view.get(2 * 3 + 1));

        view.set_rc(2, 0, -1.0).unwrap();
        assert_eq!(Err(BufferError::OutOfRange { index: 3, len: 3 }), view.set_rc(0, 3, 0.0));
        assert_eq!(-1.0, view.load()[(2, 0)]);
        assert_eq!(&(-1.0f64).to_ne_bytes()[..], &bytes[2 * 8..3 * 8]);
    }
}
