//! Deterministic lattice workloads.
//!
//! - [`random_positions`]: seeded, possibly unfolded coordinates.
//! - [`random_moves`]: seeded local displacement pairs, the shape of a
//!   Monte-Carlo move attempt.
//! - [`tagged_lattice`]: a lattice with a distinct value on every site.

use latbox_core::{BoxExtents, VectorInt3};
use latbox_lattice::{Indexing, Lattice};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `count` coordinates drawn uniformly from `spread` periodic images of the box.
///
/// `spread == 1` keeps every coordinate inside the primary box; larger
/// values produce unfolded coordinates in `[-(spread-1)*L, spread*L)` per
/// axis. The sequence depends only on the arguments.
pub fn random_positions(
    seed: u64,
    count: usize,
    extents: BoxExtents,
    spread: i32,
) -> Vec<VectorInt3> {
    assert!(spread >= 1, "spread must be at least 1");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let axis = |rng: &mut ChaCha8Rng, len: u32| {
        let len = len as i32;
        rng.random_range(-(spread - 1) * len..spread * len)
    };
    (0..count)
        .map(|_| {
            VectorInt3::new(
                axis(&mut rng, extents.x),
                axis(&mut rng, extents.y),
                axis(&mut rng, extents.z),
            )
        })
        .collect()
}

/// `count` `(from, to)` pairs where `to` is `from` displaced by at most
/// `max_step` along each axis.
pub fn random_moves(
    seed: u64,
    count: usize,
    extents: BoxExtents,
    max_step: i32,
) -> Vec<(VectorInt3, VectorInt3)> {
    let from = random_positions(seed, count, extents, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    from.into_iter()
        .map(|p| {
            let step = VectorInt3::new(
                rng.random_range(-max_step..=max_step),
                rng.random_range(-max_step..=max_step),
                rng.random_range(-max_step..=max_step),
            );
            (p, p + step)
        })
        .collect()
}

/// An allocated lattice whose site at linear index `i` holds `i + 1`.
///
/// # Panics
///
/// Panics if `extents` are invalid for `I`.
pub fn tagged_lattice<I: Indexing>(extents: BoxExtents) -> Lattice<u64, I> {
    let mut lattice = Lattice::new();
    lattice
        .setup_box(extents.x, extents.y, extents.z)
        .expect("fixture extents must be valid");
    for z in 0..extents.z as i32 {
        for y in 0..extents.y as i32 {
            for x in 0..extents.x as i32 {
                let i = lattice.index_of((x, y, z));
                lattice.set_xyz(x, y, z, i as u64 + 1);
            }
        }
    }
    lattice
}
