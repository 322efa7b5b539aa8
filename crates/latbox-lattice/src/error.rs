//! Lattice-specific error types.

use std::error::Error;
use std::fmt;

use latbox_core::{Axis, BoxExtents};

/// Errors that can occur while sizing or allocating a lattice.
///
/// Coordinates never produce errors: every position is folded into the
/// periodic box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// An extent is zero, so the box has no sites.
    EmptyBox {
        /// The zero-sized axis.
        axis: Axis,
    },
    /// An extent does not fit the signed coordinate range.
    DimensionTooLarge {
        /// The offending axis.
        axis: Axis,
        /// The requested extent.
        value: u32,
        /// Largest extent the strategy accepts.
        max: u32,
    },
    /// The power-of-two strategy was given an extent that is not a power of two.
    NotPowerOfTwo {
        /// The offending axis.
        axis: Axis,
        /// The requested extent.
        value: u32,
    },
    /// `x * y * z` does not fit in `usize`.
    VolumeOverflow {
        /// The requested extents.
        extents: BoxExtents,
    },
    /// `setup()` was called before any extents were configured.
    Unconfigured,
    /// The site buffer could not be allocated.
    AllocationFailed {
        /// Number of sites requested.
        sites: usize,
        /// Number of bytes requested (saturating).
        bytes: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBox { axis } => {
                write!(f, "box extent along {axis} must be at least 1")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "box extent along {axis} is {value}, maximum is {max}")
            }
            Self::NotPowerOfTwo { axis, value } => {
                write!(
                    f,
                    "box extent along {axis} is {value}, power-of-two indexing requires a power of two"
                )
            }
            Self::VolumeOverflow { extents } => {
                write!(f, "box volume {extents} overflows usize")
            }
            Self::Unconfigured => write!(f, "lattice extents have not been configured"),
            Self::AllocationFailed { sites, bytes } => {
                write!(
                    f,
                    "failed to allocate lattice: {sites} sites ({bytes} bytes)"
                )
            }
        }
    }
}

impl Error for LatticeError {}
