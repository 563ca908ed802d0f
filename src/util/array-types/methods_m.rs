/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Square matrix operations for `M33` and `M44`.
//!
//! Matrices are stored as arrays of columns, but every public API that
//! takes a pair of indices takes them as `(row, col)`.

use crate::traits::{Ring, Field};
use crate::errors::{IndexError, check_index};
use crate::approx::Tolerances;
use crate::context::{Context3, Context4};
use crate::types::*;

use num_traits::{Zero, One};
use slice_of_array::prelude::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    @{Mnn_Vn_n_nn_Ctx}
    impl_matrix_inherent!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt $Ctx:ident}
    ) => {
        impl<X> $Mnn<X> {
            /// Construct a matrix from its columns.
            #[inline(always)]
            pub fn from_cols(cols: [$Vn<X>; $n]) -> Self
            { $Mnn(cols) }

            /// Construct a matrix from a function on `(row, col)`.
            #[inline]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { $Mnn(std::array::from_fn(|c| $Vn(std::array::from_fn(|r| f(r, c))))) }

            /// Construct a matrix from a 2D array of rows, i.e. written the way
            /// it looks on paper.
            #[inline]
            pub fn from_rows(rows: [[X; $n]; $n]) -> Self
            where X: Copy,
            { Self::from_fn(|r, c| rows[r][c]) }

            /// Construct a matrix from its flat column-major representation.
            #[inline]
            pub fn from_flat(flat: [X; $nn]) -> Self
            where X: Copy,
            { Self::from_fn(|r, c| flat[$n * c + r]) }

            /// Borrow the columns.
            #[inline(always)]
            pub fn cols(&self) -> &[$Vn<X>; $n]
            { &self.0 }

            /// View the matrix in its flat column-major layout.
            ///
            /// Element `(r, c)` is at index `n * c + r`.
            #[inline(always)]
            pub fn as_flat(&self) -> &[X]
            { self.0[..].flat() }

            /// Mutably view the matrix in its flat column-major layout.
            #[inline(always)]
            pub fn as_flat_mut(&mut self) -> &mut [X]
            { self.0[..].flat_mut() }

            /// Read the element at `(row, col)`.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> Result<X, IndexError>
            where X: Copy,
            {
                check_index(row, col, $n)?;
                Ok(self.0[col].0[row])
            }

            /// Write the element at `(row, col)`.
            ///
            /// On error, the matrix is left untouched.
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: X) -> Result<(), IndexError> {
                check_index(row, col, $n)?;
                self.0[col].0[row] = value;
                Ok(())
            }

            /// Copy out a row.
            #[inline]
            pub fn row(&self, row: usize) -> Result<$Vn<X>, IndexError>
            where X: Copy,
            {
                check_index(row, 0, $n)?;
                Ok($Vn::from_fn(|c| self.0[c].0[row]))
            }

            /// Copy a row into an existing vector.
            #[inline]
            pub fn row_into(&self, row: usize, out: &mut $Vn<X>) -> Result<(), IndexError>
            where X: Copy,
            {
                *out = self.row(row)?;
                Ok(())
            }

            /// Overwrite a row.
            #[inline]
            pub fn set_row(&mut self, row: usize, value: &$Vn<X>) -> Result<(), IndexError>
            where X: Copy,
            {
                check_index(row, 0, $n)?;
                for c in 0..$n {
                    self.0[c].0[row] = value.0[c];
                }
                Ok(())
            }

            /// Copy out a column.
            #[inline]
            pub fn col(&self, col: usize) -> Result<$Vn<X>, IndexError>
            where X: Copy,
            {
                check_index(0, col, $n)?;
                Ok(self.0[col])
            }

            /// Overwrite a column.
            #[inline]
            pub fn set_col(&mut self, col: usize, value: &$Vn<X>) -> Result<(), IndexError>
            where X: Copy,
            {
                check_index(0, col, $n)?;
                self.0[col] = *value;
                Ok(())
            }

            /// Overwrite every element with those of `src`.
            #[inline(always)]
            pub fn copy_from(&mut self, src: &Self)
            where X: Copy,
            { *self = *src; }

            /// Map each scalar element of a matrix.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Mnn<B>
            where F: FnMut(X) -> B,
            { $Mnn(self.0.map(|col| col.map(&mut f))) }
        }

        impl<X: Ring> $Mnn<X> {
            /// Construct the zero matrix.
            #[inline(always)]
            pub fn zero() -> Self
            { $Mnn([$Vn::zero(); $n]) }

            /// Construct the identity matrix.
            #[inline]
            pub fn eye() -> Self
            { Self::from_fn(|r, c| match r == c {
                true => X::one(),
                false => X::zero(),
            })}

            /// Matrix transpose.
            #[inline]
            pub fn t(&self) -> Self
            { Self::from_fn(|r, c| self.0[r].0[c]) }

            /// Transpose the matrix in place.
            #[inline]
            pub fn transpose_in_place(&mut self) -> &mut Self {
                *self = self.t();
                self
            }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> X
            { (0..$n).map(|i| self.0[i].0[i]).sum() }

            /// Matrix product `a * b`, written to `out`.
            ///
            /// The borrow checker guarantees that `out` is neither `a` nor `b`,
            /// and the product is fully computed before `out` is written.
            #[inline]
            pub fn mul_into<'o>(a: &Self, b: &Self, out: &'o mut Self) -> &'o mut Self {
                let product = Self::from_fn(|r, c| {
                    (0..$n).map(|k| a.0[k].0[r] * b.0[c].0[k]).sum()
                });
                *out = product;
                out
            }

            /// Replace `self` with the product `self * b`.
            #[inline]
            pub fn mul_in_place(&mut self, b: &Self) -> &mut Self {
                let a = *self;
                Self::mul_into(&a, b, self)
            }

            /// Matrix-vector product `a * v`, written to `out`.
            ///
            /// The product is accumulated in the context's scratch space.
            #[inline]
            pub fn mul_vec<'o>(
                ctx: &mut $Ctx<X>,
                a: &Self,
                v: &$Vn<X>,
                out: &'o mut $Vn<X>,
            ) -> &'o mut $Vn<X> {
                ctx.vs[0] = a.mul_vec_impl(v);
                *out = ctx.vs[0];
                out
            }

            #[inline]
            pub(crate) fn mul_vec_impl(&self, v: &$Vn<X>) -> $Vn<X>
            { $Vn::from_fn(|r| (0..$n).map(|k| self.0[k].0[r] * v.0[k]).sum()) }

            /// Elementary row operation: exchange two rows.
            #[inline]
            pub fn row_swap(&mut self, row_a: usize, row_b: usize) -> Result<&mut Self, IndexError> {
                check_index(row_a, row_b, $n)?;
                for col in self.0.iter_mut() {
                    col.0.swap(row_a, row_b);
                }
                Ok(self)
            }

            /// Elementary row operation: multiply a row by a scalar.
            #[inline]
            pub fn row_scale(&mut self, row: usize, factor: X) -> Result<&mut Self, IndexError> {
                check_index(row, 0, $n)?;
                for col in self.0.iter_mut() {
                    col.0[row] = col.0[row] * factor;
                }
                Ok(self)
            }

            /// Elementary row operation: add a multiple of row `src` to row `dest`.
            #[inline]
            pub fn row_add_scaled(&mut self, src: usize, dest: usize, factor: X) -> Result<&mut Self, IndexError> {
                check_index(src, dest, $n)?;
                for col in self.0.iter_mut() {
                    col.0[dest] = col.0[dest] + col.0[src] * factor;
                }
                Ok(self)
            }

            /// Elementwise comparison with absolute and relative tolerances.
            ///
            /// This is deliberately not `PartialEq`, which is always exact.
            #[inline]
            pub fn approx_eq(&self, other: &Self, tol: Tolerances<X>) -> bool
            { (0..$n).all(|c| self.0[c].approx_eq(&other.0[c], tol)) }
        }

        impl<X: Field> $Mnn<X> {
            /// Matrix inverse, written to `out`.
            ///
            /// Computes the adjugate (transposed cofactor matrix) divided by the
            /// determinant.  If the determinant is within `SINGULAR_EPSILON` of
            /// zero, returns `false` and leaves `out` untouched.
            #[inline]
            pub fn inv_into(ctx: &mut $Ctx<X>, a: &Self, out: &mut Self) -> bool {
                match Self::prepare_inverse(ctx, a) {
                    None => false,
                    Some(rdet) => {
                        *out = Self::from_fn(|r, c| ctx.cofactors.0[r].0[c] * rdet);
                        true
                    },
                }
            }

            /// Matrix inverse, or `None` for a singular matrix.
            #[inline]
            pub fn inv(&self, ctx: &mut $Ctx<X>) -> Option<Self> {
                let mut out = Self::zero();
                match Self::inv_into(ctx, self, &mut out) {
                    true => Some(out),
                    false => None,
                }
            }

            /// Invert the matrix in place.
            ///
            /// Equivalent to `inv_into(ctx, &m, &mut m)`; the cofactors live in the
            /// context until `self` is overwritten.  A singular matrix is left
            /// untouched and `false` is returned.
            #[inline]
            pub fn inv_in_place(&mut self, ctx: &mut $Ctx<X>) -> bool {
                match Self::prepare_inverse(ctx, self) {
                    None => false,
                    Some(rdet) => {
                        *self = Self::from_fn(|r, c| ctx.cofactors.0[r].0[c] * rdet);
                        true
                    },
                }
            }
        }
    }
}

impl<X: Ring> M33<X> {
    /// Matrix determinant, by the rule of Sarrus.
    pub fn det(&self) -> X {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.rows_array();

        X::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }

    /// The signed cofactor of element `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<X, IndexError> {
        check_index(row, col, 3)?;
        Ok(self.cofactor_impl(row, col))
    }

    // The cyclic index trick produces the signed 2x2 minor directly.
    #[inline]
    fn cofactor_impl(&self, r: usize, c: usize) -> X {
        let m = |r: usize, c: usize| self.0[c % 3].0[r % 3];
        X::zero()
        + m(r + 1, c + 1) * m(r + 2, c + 2)
        - m(r + 1, c + 2) * m(r + 2, c + 1)
    }

    #[inline]
    fn rows_array(&self) -> [[X; 3]; 3]
    { std::array::from_fn(|r| std::array::from_fn(|c| self.0[c].0[r])) }
}

impl<X: Field> M33<X> {
    // Fills ctx.cofactors and produces the reciprocal determinant.
    fn prepare_inverse(ctx: &mut Context3<X>, a: &Self) -> Option<X> {
        let det = a.det();
        if det.abs() <= X::SINGULAR_EPSILON {
            trace!("refusing to invert singular 3x3 matrix (det = {})", det);
            return None;
        }
        ctx.cofactors = M33::from_fn(|r, c| a.cofactor_impl(r, c));
        Some(X::one() / det)
    }
}

impl<X: Ring> M44<X> {
    /// Matrix determinant, by cofactor expansion along the first row.
    pub fn det(&self) -> X {
        let mut minor = M33::zero();
        (0..4).map(|c| self.0[c].0[0] * self.cofactor_with(0, c, &mut minor)).sum()
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<M33<X>, IndexError> {
        check_index(row, col, 4)?;
        let mut out = M33::zero();
        self.minor_into(row, col, &mut out);
        Ok(out)
    }

    /// The signed cofactor of element `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<X, IndexError> {
        check_index(row, col, 4)?;
        Ok(self.cofactor_with(row, col, &mut M33::zero()))
    }

    #[inline]
    fn minor_into(&self, row: usize, col: usize, out: &mut M33<X>) {
        let skip = |i: usize, skipped: usize| if i < skipped { i } else { i + 1 };
        for c in 0..3 {
            for r in 0..3 {
                out.0[c].0[r] = self.0[skip(c, col)].0[skip(r, row)];
            }
        }
    }

    #[inline]
    fn cofactor_with(&self, row: usize, col: usize, minor: &mut M33<X>) -> X {
        self.minor_into(row, col, minor);
        match (row + col) % 2 {
            0 => minor.det(),
            _ => -minor.det(),
        }
    }
}

impl<X: Field> M44<X> {
    // Fills ctx.cofactors and produces the reciprocal determinant.
    fn prepare_inverse(ctx: &mut Context4<X>, a: &Self) -> Option<X> {
        let Context4 { cofactors, minor, .. } = ctx;
        for c in 0..4 {
            for r in 0..4 {
                cofactors.0[c].0[r] = a.cofactor_with(r, c, minor);
            }
        }
        // expansion along the first row, reusing the cofactors
        let det: X = (0..4).map(|c| a.0[c].0[0] * cofactors.0[c].0[0]).sum();
        if det.abs() <= X::SINGULAR_EPSILON {
            trace!("refusing to invert singular 4x4 matrix (det = {})", det);
            return None;
        }
        Some(X::one() / det)
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

gen_each!{
    @{Mnn_Vn_n_nn}
    impl_num_traits!(
        {$Mnn:ident $Vn:ident $n:tt $nn:tt}
    ) => {
        impl<X: Ring> Zero for $Mnn<X> {
            #[inline]
            fn zero() -> Self
            { $Mnn::zero() }

            #[inline]
            fn is_zero(&self) -> bool
            { self.0.iter().all(|col| col.is_zero()) }
        }

        impl<X: Ring> One for $Mnn<X> {
            #[inline]
            fn one() -> Self
            { $Mnn::eye() }
        }
    }
}

// ---------------------------------------------------------------------------
