//! Benchmark profiles for the latbox lattice store.
//!
//! - [`reference_extents`]: 128³ box (2M sites), valid for both strategies
//! - [`seed_occupancy`]: deterministic monomer placement via seed
//! - [`MoveWorkload`]: pre-generated move attempts for the hot-path benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use latbox_core::{BoxExtents, VectorInt3};
use latbox_lattice::{LatticeError, LatticeOps};
use latbox_test_utils::{random_moves, random_positions};

/// Side of the reference box. A power of two so both strategies accept it.
pub const REFERENCE_SIDE: u32 = 128;

/// Reference benchmark box: 128 x 128 x 128.
pub fn reference_extents() -> BoxExtents {
    BoxExtents::cubic(REFERENCE_SIDE)
}

/// Set up `lattice` on `extents` and mark `count` seeded sites with `1`.
///
/// Returns the occupied positions (duplicates removed).
pub fn seed_occupancy<L>(
    lattice: &mut L,
    extents: BoxExtents,
    count: usize,
    seed: u64,
) -> Result<Vec<VectorInt3>, LatticeError>
where
    L: LatticeOps<Value = u8>,
{
    lattice.setup_box(extents.x, extents.y, extents.z)?;
    let mut occupied = random_positions(seed, count, extents, 1);
    occupied.sort();
    occupied.dedup();
    for &p in &occupied {
        lattice.set(p, 1);
    }
    Ok(occupied)
}

/// Pre-generated move attempts so benches time only lattice work.
pub struct MoveWorkload {
    /// `(from, to)` pairs, `to` within one step of `from`.
    pub moves: Vec<(VectorInt3, VectorInt3)>,
    /// Unfolded read positions spanning several periodic images.
    pub probes: Vec<VectorInt3>,
}

impl MoveWorkload {
    /// Build a workload of `count` moves and probes for `extents`.
    pub fn new(extents: BoxExtents, count: usize, seed: u64) -> Self {
        Self {
            moves: random_moves(seed, count, extents, 1),
            probes: random_positions(seed.wrapping_add(1), count, extents, 3),
        }
    }

    /// Run every move attempt with excluded-volume acceptance.
    ///
    /// Returns the number of accepted moves.
    pub fn run<L: LatticeOps<Value = u8>>(&self, lattice: &mut L) -> usize {
        let mut accepted = 0;
        for &(from, to) in &self.moves {
            if lattice.get(from) != 0 && lattice.get(to) == 0 {
                lattice.move_site(from, to);
                accepted += 1;
            }
        }
        accepted
    }
}
