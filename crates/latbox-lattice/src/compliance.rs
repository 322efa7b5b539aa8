//! Lattice contract compliance helpers.
//!
//! These functions check the storage invariants every indexing strategy
//! must uphold. Reused by the strategy and storage test modules.

use indexmap::IndexSet;
use latbox_core::{BoxExtents, VectorInt3};

use crate::indexing::Indexing;
use crate::storage::Lattice;

fn lattice<I: Indexing>(extents: BoxExtents) -> Lattice<u64, I> {
    let mut l = Lattice::new();
    l.setup_box(extents.x, extents.y, extents.z)
        .expect("compliance extents must be valid for the strategy");
    l
}

fn in_box(extents: BoxExtents) -> impl Iterator<Item = VectorInt3> {
    let (bx, by, bz) = (extents.x as i32, extents.y as i32, extents.z as i32);
    (0..bz).flat_map(move |z| {
        (0..by).flat_map(move |y| (0..bx).map(move |x| VectorInt3::new(x, y, z)))
    })
}

/// Distinct tag for each in-box coordinate.
fn tag(extents: BoxExtents, p: VectorInt3) -> u64 {
    1 + p.x as u64 + extents.x as u64 * (p.y as u64 + extents.y as u64 * p.z as u64)
}

/// Assert that in-box coordinates map one-to-one onto `0..sites`.
pub fn assert_index_bijective<I: Indexing>(extents: BoxExtents) {
    let l = lattice::<I>(extents);
    let indices: IndexSet<usize> = in_box(extents).map(|p| l.index_of(p)).collect();
    assert_eq!(indices.len(), l.len(), "index collision in {extents}");
    assert!(
        indices.iter().all(|&i| i < l.len()),
        "index out of buffer in {extents}"
    );
}

/// Assert set-then-get returns the written value and leaves others untouched.
pub fn assert_round_trip_isolated<I: Indexing>(extents: BoxExtents) {
    let mut l = lattice::<I>(extents);
    for p in in_box(extents) {
        l.set(p, tag(extents, p));
    }
    for p in in_box(extents) {
        assert_eq!(l.get(p), tag(extents, p), "round trip failed at {p}");
    }
}

/// Assert that shifting any axis by a multiple of its extent reads the same site.
pub fn assert_fold_invariant<I: Indexing>(extents: BoxExtents) {
    let mut l = lattice::<I>(extents);
    for p in in_box(extents) {
        l.set(p, tag(extents, p));
    }
    let (bx, by, bz) = (extents.x as i32, extents.y as i32, extents.z as i32);
    for p in in_box(extents) {
        let expected = tag(extents, p);
        for k in [-3, -1, 1, 2] {
            assert_eq!(l.get(p + VectorInt3::new(k * bx, 0, 0)), expected);
            assert_eq!(l.get(p + VectorInt3::new(0, k * by, 0)), expected);
            assert_eq!(l.get(p + VectorInt3::new(0, 0, k * bz)), expected);
        }
    }
}

/// Assert that `clear` resets every site to the neutral value.
pub fn assert_clear_resets<I: Indexing>(extents: BoxExtents) {
    let mut l = lattice::<I>(extents);
    for p in in_box(extents) {
        l.set(p, tag(extents, p));
    }
    l.clear();
    assert!(
        in_box(extents).all(|p| l.get(p) == 0),
        "clear left values in {extents}"
    );
}

/// Assert move semantics between every pair of a sample of sites.
pub fn assert_move_semantics<I: Indexing>(extents: BoxExtents) {
    let sample: Vec<VectorInt3> = in_box(extents).step_by(3).take(12).collect();
    for &old in &sample {
        for &new in &sample {
            let mut l = lattice::<I>(extents);
            l.set(old, 42);
            l.move_site(old, new);
            assert_eq!(l.get(new), 42, "value lost moving {old} -> {new}");
            if old != new {
                assert_eq!(l.get(old), 0, "source not cleared moving {old} -> {new}");
            }
        }
    }
}

/// Assert that vector and three-integer forms are interchangeable.
pub fn assert_forms_equivalent<I: Indexing>(extents: BoxExtents) {
    let mut by_vec = lattice::<I>(extents);
    let mut by_xyz = lattice::<I>(extents);
    for p in in_box(extents) {
        let v = tag(extents, p);
        by_vec.set(p, v);
        by_xyz.set_xyz(p.x, p.y, p.z, v);
    }
    assert_eq!(by_vec.as_slice(), by_xyz.as_slice());
    for p in in_box(extents) {
        assert_eq!(by_vec.get(p), by_xyz.get_xyz(p.x, p.y, p.z));
    }
    let a = VectorInt3::ZERO;
    let b = VectorInt3::new(
        extents.x as i32 - 1,
        extents.y as i32 - 1,
        extents.z as i32 - 1,
    );
    by_vec.move_site(a, b);
    by_xyz.move_site_xyz(a.x, a.y, a.z, b.x, b.y, b.z);
    assert_eq!(by_vec.as_slice(), by_xyz.as_slice());
}

/// Run all compliance checks for one strategy and box.
pub fn run_full_compliance<I: Indexing>(extents: BoxExtents) {
    assert_index_bijective::<I>(extents);
    assert_round_trip_isolated::<I>(extents);
    assert_fold_invariant::<I>(extents);
    assert_clear_resets::<I>(extents);
    assert_move_semantics::<I>(extents);
    assert_forms_equivalent::<I>(extents);
}
