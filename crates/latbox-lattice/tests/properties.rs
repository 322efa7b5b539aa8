//! Property tests of the storage contract on both indexing strategies.

use latbox_core::{BoxExtents, VectorInt3};
use latbox_lattice::{Indexing, Lattice, Linear, PowerOfTwo};
use proptest::prelude::*;

fn setup<I: Indexing>(extents: BoxExtents) -> Lattice<u32, I> {
    let mut lattice = Lattice::new();
    lattice.setup_box(extents.x, extents.y, extents.z).unwrap();
    lattice
}

fn arb_linear_box() -> impl Strategy<Value = BoxExtents> {
    (1u32..10, 1u32..10, 1u32..10).prop_map(BoxExtents::from)
}

fn arb_pow2_box() -> impl Strategy<Value = BoxExtents> {
    (0u32..4, 0u32..4, 0u32..4).prop_map(|(a, b, c)| BoxExtents::new(1 << a, 1 << b, 1 << c))
}

fn arb_pos() -> impl Strategy<Value = VectorInt3> {
    (-64i32..64, -64i32..64, -64i32..64).prop_map(VectorInt3::from)
}

fn check_round_trip<I: Indexing>(
    e: BoxExtents,
    p: VectorInt3,
    v: u32,
) -> Result<(), TestCaseError> {
    let mut l = setup::<I>(e);
    l.set(p, v);
    prop_assert_eq!(l.get(p), v);
    prop_assert_eq!(l.get_xyz(p.x, p.y, p.z), v);
    Ok(())
}

fn check_isolation<I: Indexing>(
    e: BoxExtents,
    p1: VectorInt3,
    p2: VectorInt3,
    v: u32,
) -> Result<(), TestCaseError> {
    let mut l = setup::<I>(e);
    let before = l.get(p2);
    l.set(p1, v);
    if l.fold(p1) != l.fold(p2) {
        prop_assert_eq!(l.get(p2), before);
    }
    Ok(())
}

fn check_periodic<I: Indexing>(
    e: BoxExtents,
    p: VectorInt3,
    k: i32,
    v: u32,
) -> Result<(), TestCaseError> {
    let mut l = setup::<I>(e);
    l.set(p, v);
    let (bx, by, bz) = (e.x as i32, e.y as i32, e.z as i32);
    prop_assert_eq!(l.get_xyz(p.x + k * bx, p.y, p.z), v);
    prop_assert_eq!(l.get_xyz(p.x, p.y + k * by, p.z), v);
    prop_assert_eq!(l.get_xyz(p.x, p.y, p.z + k * bz), v);
    Ok(())
}

fn check_move<I: Indexing>(
    e: BoxExtents,
    old: VectorInt3,
    new: VectorInt3,
    v: u32,
) -> Result<(), TestCaseError> {
    let mut l = setup::<I>(e);
    l.set(old, v);
    l.move_site(old, new);
    prop_assert_eq!(l.get(new), v);
    if l.fold(old) != l.fold(new) {
        prop_assert_eq!(l.get(old), 0);
    }
    Ok(())
}

proptest! {
    // ── Linear ──────────────────────────────────────────────────

    #[test]
    fn linear_round_trip(e in arb_linear_box(), p in arb_pos(), v in 1u32..) {
        check_round_trip::<Linear>(e, p, v)?;
    }

    #[test]
    fn linear_isolation(e in arb_linear_box(), p1 in arb_pos(), p2 in arb_pos(), v in 1u32..) {
        check_isolation::<Linear>(e, p1, p2, v)?;
    }

    #[test]
    fn linear_periodic(e in arb_linear_box(), p in arb_pos(), k in -8i32..8, v in 1u32..) {
        check_periodic::<Linear>(e, p, k, v)?;
    }

    #[test]
    fn linear_move(e in arb_linear_box(), a in arb_pos(), b in arb_pos(), v in 1u32..) {
        check_move::<Linear>(e, a, b, v)?;
    }

    // ── Power of two ────────────────────────────────────────────

    #[test]
    fn pow2_round_trip(e in arb_pow2_box(), p in arb_pos(), v in 1u32..) {
        check_round_trip::<PowerOfTwo>(e, p, v)?;
    }

    #[test]
    fn pow2_isolation(e in arb_pow2_box(), p1 in arb_pos(), p2 in arb_pos(), v in 1u32..) {
        check_isolation::<PowerOfTwo>(e, p1, p2, v)?;
    }

    #[test]
    fn pow2_periodic(e in arb_pow2_box(), p in arb_pos(), k in -8i32..8, v in 1u32..) {
        check_periodic::<PowerOfTwo>(e, p, k, v)?;
    }

    #[test]
    fn pow2_move(e in arb_pow2_box(), a in arb_pos(), b in arb_pos(), v in 1u32..) {
        check_move::<PowerOfTwo>(e, a, b, v)?;
    }

    // ── Cross-strategy ──────────────────────────────────────────

    #[test]
    fn strategies_store_identically(
        e in arb_pow2_box(),
        writes in proptest::collection::vec((arb_pos(), 1u32..1000), 0..40),
    ) {
        let mut lin = setup::<Linear>(e);
        let mut pow = setup::<PowerOfTwo>(e);
        for (p, v) in writes {
            lin.set(p, v);
            pow.set(p, v);
        }
        prop_assert_eq!(lin.as_slice(), pow.as_slice());
    }
}
