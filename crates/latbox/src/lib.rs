//! latbox: a periodic three-dimensional lattice store for lattice
//! Monte-Carlo simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the latbox sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use latbox::prelude::*;
//!
//! // An excluded-volume feature written once against the capability set.
//! fn try_move<L: LatticeOps<Value = u8>>(
//!     lattice: &mut L,
//!     from: VectorInt3,
//!     step: VectorInt3,
//! ) -> bool {
//!     let to = from + step;
//!     if lattice.get(to) != 0 {
//!         return false;
//!     }
//!     lattice.move_site(from, to);
//!     true
//! }
//!
//! let mut occupancy = FeatureLattice::new(PowerOfTwoLattice::<u8>::new());
//! occupancy.setup_box(32, 32, 32).unwrap();
//! occupancy.set_xyz(31, 0, 0, 1);
//!
//! // Periodic box: stepping +x from 31 lands on 0.
//! assert!(try_move(&mut occupancy, VectorInt3::new(31, 0, 0), VectorInt3::new(1, 0, 0)));
//! assert_eq!(occupancy.get_xyz(0, 0, 0), 1);
//! assert_eq!(occupancy.get_xyz(31, 0, 0), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `latbox-core` | `VectorInt3`, `BoxExtents`, `Axis` |
//! | [`lattice`] | `latbox-lattice` | `Lattice`, indexing strategies, facade, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and extent types (`latbox-core`).
pub use latbox_core as types;

/// Lattice storage, indexing strategies and the dispatch facade (`latbox-lattice`).
pub use latbox_lattice as lattice;

/// Common imports for simulation features.
pub mod prelude {
    pub use latbox_core::{Axis, BoxExtents, VectorInt3};
    pub use latbox_lattice::{
        FeatureLattice, Indexing, Lattice, LatticeConfig, LatticeError, LatticeOps, Linear,
        LinearLattice, PowerOfTwo, PowerOfTwoLattice, SetupObserver, SetupReport,
    };
}
