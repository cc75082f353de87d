//! A validated, 1-based handle for one of the fixed compression kernels.

use crate::error::EasyCompressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The number of kernels exposed by every codec provider.
pub const KERNEL_COUNT: usize = 11;

/// A kernel number in `[1, KERNEL_COUNT]`.
///
/// Holding a `KernelIndex` is proof that the index is in range, so the
/// dispatcher and codec providers never need to re-check it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct KernelIndex(u8);

impl KernelIndex {
    /// The first kernel.
    pub const FIRST: KernelIndex = KernelIndex(1);

    pub fn new(index: usize) -> Result<Self, EasyCompressError> {
        if (1..=KERNEL_COUNT).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(EasyCompressError::UnknownKernelIndex(index))
        }
    }

    /// The 1-based kernel number.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// The 0-based position of this kernel in per-kernel tables.
    pub(crate) fn slot(self) -> usize {
        self.get() - 1
    }

    /// Iterates over every kernel in ascending order.
    pub fn all() -> impl Iterator<Item = KernelIndex> {
        (1..=KERNEL_COUNT as u8).map(KernelIndex)
    }
}

impl TryFrom<usize> for KernelIndex {
    type Error = EasyCompressError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<KernelIndex> for usize {
    fn from(kernel: KernelIndex) -> usize {
        kernel.get()
    }
}

/// Parses a plain decimal kernel number, as written in profile files and artifact names.
impl FromStr for KernelIndex {
    type Err = EasyCompressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EasyCompressError::InvalidKernelIndex(s.to_string()));
        }
        // All digits, so the only possible failure is overflow.
        let index: usize = s
            .parse()
            .map_err(|_| EasyCompressError::UnknownKernelIndex(usize::MAX))?;
        Self::new(index)
    }
}

impl fmt::Display for KernelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
