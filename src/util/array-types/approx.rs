/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::Ring;

/// Tolerances for approximate comparison.
///
/// Two scalars `a` and `b` are close when
/// `|a - b| <= max(abs, rel * |a|, rel * |b|)`.
/// For integer domains only `abs` is consulted, and the default is exact
/// comparison.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<X=f64> {
    pub abs: X,
    pub rel: X,
}

impl<X: Ring> Tolerances<X> {
    /// Only an absolute tolerance.
    pub fn abs(abs: X) -> Self
    { Tolerances { abs, rel: X::zero() } }

    /// Only a relative tolerance.
    pub fn rel(rel: X) -> Self
    { Tolerances { abs: X::zero(), rel } }
}

impl<X: Ring> Default for Tolerances<X> {
    fn default() -> Self {
        let (abs, rel) = X::DEFAULT_TOLERANCES;
        Tolerances { abs, rel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Tolerances { abs: 1e-12, rel: 1e-9 }, Tolerances::<f64>::default());
        assert_eq!(Tolerances { abs: 0, rel: 0 }, Tolerances::<i64>::default());
        assert_eq!(Tolerances { abs: 0.5f32, rel: 0.0 }, Tolerances::abs(0.5));
    }
}
