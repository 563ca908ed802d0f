/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// A vector axis was out of range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("axis {axis} is out of range for a {dim}-dimensional vector")]
pub struct AxisError {
    pub axis: usize,
    pub dim: usize,
}

/// A matrix row or column was out of range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("element ({row}, {col}) is out of range for a {n}x{n} matrix")]
pub struct IndexError {
    pub row: usize,
    pub col: usize,
    pub n: usize,
}

#[inline]
pub(crate) fn check_axis(axis: usize, dim: usize) -> Result<(), AxisError> {
    match axis < dim {
        true => Ok(()),
        false => Err(AxisError { axis, dim }),
    }
}

#[inline]
pub(crate) fn check_index(row: usize, col: usize, n: usize) -> Result<(), IndexError> {
    match row < n && col < n {
        true => Ok(()),
        false => Err(IndexError { row, col, n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            AxisError { axis: 3, dim: 3 }.to_string(),
            "axis 3 is out of range for a 3-dimensional vector",
        );
        assert_eq!(
            IndexError { row: 0, col: 4, n: 4 }.to_string(),
            "element (0, 4) is out of range for a 4x4 matrix",
        );
    }

    #[test]
    fn checks() {
        assert!(check_axis(1, 2).is_ok());
        assert!(check_axis(2, 2).is_err());
        assert!(check_axis(usize::max_value(), 2).is_err());
        assert!(check_index(2, 2, 3).is_ok());
        assert_eq!(check_index(3, 0, 3), Err(IndexError { row: 3, col: 0, n: 3 }));
    }
}
