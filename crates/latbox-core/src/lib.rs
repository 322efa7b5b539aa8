//! Core types for the latbox lattice store.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types that cross the lattice boundary: the [`VectorInt3`]
//! coordinate handed in by simulation features and the [`BoxExtents`] that
//! size a periodic simulation box.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod extents;

pub use coord::VectorInt3;
pub use extents::{Axis, BoxExtents};
