//! Periodic three-dimensional lattice storage for Monte-Carlo simulations.
//!
//! A [`Lattice`] owns one flat buffer with a value per site of a periodic
//! box. Positions are folded into the box and linearized on every access,
//! so lookup, update and [`move_site`](Lattice::move_site) cost a handful of
//! integer operations and one memory access each.
//!
//! # Architecture
//!
//! ```text
//! FeatureLattice<L: LatticeOps>   (facade, forwards at compile time)
//! └── Lattice<V, I: Indexing>     (indexed storage, owns Box<[V]>)
//!     ├── Linear                  x + y*X + z*X*Y, modulo folding
//!     └── PowerOfTwo              x + (y<<lx) + (z<<(lx+ly)), mask folding
//! ```
//!
//! The indexing strategy is a type parameter, never a trait object: there
//! is no virtual call on the hot path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod facade;
pub mod indexing;
pub mod storage;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::LatticeConfig;
pub use diagnostics::{SetupObserver, SetupReport};
pub use error::LatticeError;
pub use facade::{FeatureLattice, LatticeOps};
pub use indexing::{Indexing, Layout, Linear, PowerOfTwo};
pub use storage::{Lattice, LinearLattice, PowerOfTwoLattice};
