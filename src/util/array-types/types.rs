/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::hash::{Hash, Hasher};
use std::fmt;

use crate::traits::Ring;

// ---------------------------------------------------------------------------

/// A 2-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct V2<X=f64>(pub [X; 2]);

/// A 3-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct V3<X=f64>(pub [X; 3]);

/// A 4-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct V4<X=f64>(pub [X; 4]);

// ---------------------------------------------------------------------------

/// A square dense 3x3 matrix.
///
/// The matrix is stored as an array of **columns**, so that its memory
/// layout is the flat column-major layout expected by graphics APIs
/// (element `(r, c)` lives at flat index `3 * c + r`).  Construct it with
/// `from_rows` if you want to write it down the way it looks on paper.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct M33<X=f64>(pub [V3<X>; 3]);

/// A square dense 4x4 matrix.
///
/// Stored column-major, like `M33`.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct M44<X=f64>(pub [V4<X>; 4]);

// ---------------------------------------------------------------------------
// Names for each domain.
//
// Every domain variant is spelled the same way with a different suffix
// (F = f32, D = f64, I = i32, L = i64), and all of them share one generic
// implementation.

pub type V2F = V2<f32>;
pub type V2D = V2<f64>;
pub type V2I = V2<i32>;
pub type V2L = V2<i64>;
pub type V3F = V3<f32>;
pub type V3D = V3<f64>;
pub type V3I = V3<i32>;
pub type V3L = V3<i64>;
pub type V4F = V4<f32>;
pub type V4D = V4<f64>;
pub type V4I = V4<i32>;
pub type V4L = V4<i64>;
pub type M33F = M33<f32>;
pub type M33D = M33<f64>;
pub type M33I = M33<i32>;
pub type M33L = M33<i64>;
pub type M44F = M44<f32>;
pub type M44D = M44<f64>;
pub type M44I = M44<i32>;
pub type M44L = M44<i64>;

// ---------------------------------------------------------------------------
// Vectors behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

gen_each!{
    @{Vn_n}
    impl_array_like!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X> Deref for $Vn<X> {
            type Target = [X; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<X> DerefMut for $Vn<X> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, X> IntoIterator for &'a $Vn<X> {
            type Item = &'a X;
            type IntoIter = Iter<'a, X>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, X> IntoIterator for &'a mut $Vn<X> {
            type Item = &'a mut X;
            type IntoIter = IterMut<'a, X>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "V3(...)"; it makes
        // the debug output valid JSON and Python for many types.
        impl<X: fmt::Debug> fmt::Debug for $Vn<X> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }

        // Hashes the bits of each component, so float vectors are hashable too.
        impl<X: Ring> Hash for $Vn<X> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for &x in &self.0 {
                    x.hash_bits(state);
                }
            }
        }

        // slice-of-array integration, so that `&[V3<X>]` can be viewed as `&[X]`.
        unsafe impl<X> slice_of_array::IsSliceomorphic for $Vn<X> {
            type Element = X;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------
// Matrices are indexed by `(row, col)`.

gen_each!{
    @{Mnn_Vn_n_nn}
    impl_matrix_index!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt}
    ) => {
        /// Panics on an out-of-range `(row, col)`, just like slice indexing.
        /// Use `get`/`set` for a checked alternative.
        impl<X> Index<(usize, usize)> for $Mnn<X> {
            type Output = X;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &X {
                crate::errors::check_index(row, col, $n)
                    .unwrap_or_else(|e| panic!("{}", e));
                &self.0[col].0[row]
            }
        }

        impl<X> IndexMut<(usize, usize)> for $Mnn<X> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut X {
                crate::errors::check_index(row, col, $n)
                    .unwrap_or_else(|e| panic!("{}", e));
                &mut self.0[col].0[row]
            }
        }

        // All n*n components, in column-major order.
        impl<X: Ring> Hash for $Mnn<X> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for col in &self.0 {
                    col.hash(state);
                }
            }
        }

        // Debug output is a list of rows, so that it reads like the matrix.
        impl<X: fmt::Debug> fmt::Debug for $Mnn<X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let rows: [[&X; $n]; $n] = std::array::from_fn(|r| {
                    std::array::from_fn(|c| &self.0[c].0[r])
                });
                fmt::Debug::fmt(&rows, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut state = DefaultHasher::new();
        x.hash(&mut state);
        state.finish()
    }

    #[test]
    fn float_types_hash_like_they_compare() {
        assert_eq!(hash_of(&V3([0.0, 1.5, -2.0])), hash_of(&V3([-0.0, 1.5, -2.0])));
        assert_ne!(hash_of(&V2([1.0f32, 2.0])), hash_of(&V2([2.0f32, 1.0])));

        let m = M33([V3([1.0, 2.0, 3.0]), V3([4.0, 5.0, 6.0]), V3([7.0, 8.0, 9.0])]);
        let mut other = m;
        assert_eq!(hash_of(&m), hash_of(&other));
        other[(2, 2)] = 10.0;
        assert_ne!(hash_of(&m), hash_of(&other));

        let set: std::collections::HashSet<M44<i64>> = vec![M44::default(); 3].into_iter().collect();
        assert_eq!(1, set.len());
    }
}
