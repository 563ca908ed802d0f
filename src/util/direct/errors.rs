/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("component {index} is out of range for an element of {len} components")]
    OutOfRange { index: usize, len: usize },

    #[error("computing a byte address from {offset} and {extra} overflows")]
    Overflow { offset: usize, extra: usize },

    #[error("view needs bytes {start}..{end}, but the buffer is only {available} bytes long")]
    Length { start: usize, end: usize, available: usize },
}

pub(crate) fn checked_add(offset: usize, extra: usize) -> Result<usize, BufferError> {
    offset.checked_add(extra).ok_or_else(|| {
        trace!("rejected buffer address: {} + {} overflows", offset, extra);
        BufferError::Overflow { offset, extra }
    })
}

pub(crate) fn checked_mul(a: usize, b: usize) -> Result<usize, BufferError> {
    a.checked_mul(b).ok_or_else(|| {
        trace!("rejected buffer address: {} * {} overflows", a, b);
        BufferError::Overflow { offset: a, extra: b }
    })
}

pub(crate) fn check_component(index: usize, len: usize) -> Result<(), BufferError> {
    match index < len {
        true => Ok(()),
        false => {
            trace!("rejected buffer component {} of {}", index, len);
            Err(BufferError::OutOfRange { index, len })
        },
    }
}
