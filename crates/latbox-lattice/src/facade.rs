//! Static dispatch facade.
//!
//! [`LatticeOps`] is the capability set simulation features program
//! against. It is implemented by every [`Lattice<V, I>`] and by the
//! forwarding wrapper [`FeatureLattice`]. The trait takes `impl Into<_>`
//! arguments, so it is not object safe: callers are generic over the
//! concrete lattice and every call is resolved at compile time.

use latbox_core::VectorInt3;

use crate::error::LatticeError;
use crate::indexing::Indexing;
use crate::storage::Lattice;

/// Operations shared by all lattice indexing strategies.
pub trait LatticeOps {
    /// Stored value type.
    type Value;

    /// Allocate for the stored extents, e.g. after [`delete`](LatticeOps::delete).
    fn setup(&mut self) -> Result<(), LatticeError>;

    /// Configure extents `(x, y, z)` and allocate.
    fn setup_box(&mut self, x: u32, y: u32, z: u32) -> Result<(), LatticeError>;

    /// Reset all sites to the neutral value.
    fn clear(&mut self);

    /// Release the buffer, keeping extents.
    fn delete(&mut self);

    /// Move the value at `old` to `new`, leaving the neutral value behind.
    fn move_site(&mut self, old: impl Into<VectorInt3>, new: impl Into<VectorInt3>);

    /// Three-integer form of [`move_site`](LatticeOps::move_site).
    fn move_site_xyz(
        &mut self,
        x_old: i32,
        y_old: i32,
        z_old: i32,
        x_new: i32,
        y_new: i32,
        z_new: i32,
    );

    /// Value at `pos`.
    fn get(&self, pos: impl Into<VectorInt3>) -> Self::Value;

    /// Value at `(x, y, z)`.
    fn get_xyz(&self, x: i32, y: i32, z: i32) -> Self::Value;

    /// Overwrite the value at `pos`.
    fn set(&mut self, pos: impl Into<VectorInt3>, val: Self::Value);

    /// Overwrite the value at `(x, y, z)`.
    fn set_xyz(&mut self, x: i32, y: i32, z: i32, val: Self::Value);
}

// Inherent methods take precedence, so each body calls the storage method
// of the same name.
impl<V: Default + Clone, I: Indexing> LatticeOps for Lattice<V, I> {
    type Value = V;

    #[inline]
    fn setup(&mut self) -> Result<(), LatticeError> {
        Lattice::setup(self)
    }

    #[inline]
    fn setup_box(&mut self, x: u32, y: u32, z: u32) -> Result<(), LatticeError> {
        Lattice::setup_box(self, x, y, z)
    }

    #[inline]
    fn clear(&mut self) {
        Lattice::clear(self)
    }

    #[inline]
    fn delete(&mut self) {
        Lattice::delete(self)
    }

    #[inline]
    fn move_site(&mut self, old: impl Into<VectorInt3>, new: impl Into<VectorInt3>) {
        Lattice::move_site(self, old, new)
    }

    #[inline]
    fn move_site_xyz(
        &mut self,
        x_old: i32,
        y_old: i32,
        z_old: i32,
        x_new: i32,
        y_new: i32,
        z_new: i32,
    ) {
        Lattice::move_site_xyz(self, x_old, y_old, z_old, x_new, y_new, z_new)
    }

    #[inline]
    fn get(&self, pos: impl Into<VectorInt3>) -> V {
        Lattice::get(self, pos)
    }

    #[inline]
    fn get_xyz(&self, x: i32, y: i32, z: i32) -> V {
        Lattice::get_xyz(self, x, y, z)
    }

    #[inline]
    fn set(&mut self, pos: impl Into<VectorInt3>, val: V) {
        Lattice::set(self, pos, val)
    }

    #[inline]
    fn set_xyz(&mut self, x: i32, y: i32, z: i32, val: V) {
        Lattice::set_xyz(self, x, y, z, val)
    }
}

/// Compile-time bound facade over a concrete lattice.
///
/// Holds nothing but the lattice it forwards to. A simulation feature that
/// owns a `FeatureLattice<PowerOfTwoLattice<u8>>` gets the bit-shift
/// arithmetic inlined into its hot loop; switching to
/// `FeatureLattice<LinearLattice<u8>>` changes only the type.
///
/// # Examples
///
/// ```
/// use latbox_lattice::{FeatureLattice, LatticeOps, PowerOfTwoLattice};
///
/// let mut occupancy = FeatureLattice::new(PowerOfTwoLattice::<u8>::new());
/// occupancy.setup_box(8, 8, 8).unwrap();
/// occupancy.set_xyz(0, 0, 0, 5);
/// occupancy.set_xyz(8, 0, 0, 9);
/// assert_eq!(occupancy.get_xyz(0, 0, 0), 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FeatureLattice<L> {
    lattice: L,
}

impl<L: LatticeOps> FeatureLattice<L> {
    /// Bind `lattice` into the facade.
    pub fn new(lattice: L) -> Self {
        Self { lattice }
    }

    /// The bound lattice.
    pub fn inner(&self) -> &L {
        &self.lattice
    }

    /// The bound lattice, mutably.
    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.lattice
    }

    /// Unwrap the bound lattice.
    pub fn into_inner(self) -> L {
        self.lattice
    }
}

impl<L: LatticeOps> LatticeOps for FeatureLattice<L> {
    type Value = L::Value;

    #[inline]
    fn setup(&mut self) -> Result<(), LatticeError> {
        self.lattice.setup()
    }

    #[inline]
    fn setup_box(&mut self, x: u32, y: u32, z: u32) -> Result<(), LatticeError> {
        self.lattice.setup_box(x, y, z)
    }

    #[inline]
    fn clear(&mut self) {
        self.lattice.clear()
    }

    #[inline]
    fn delete(&mut self) {
        self.lattice.delete()
    }

    #[inline]
    fn move_site(&mut self, old: impl Into<VectorInt3>, new: impl Into<VectorInt3>) {
        self.lattice.move_site(old, new)
    }

    #[inline]
    fn move_site_xyz(
        &mut self,
        x_old: i32,
        y_old: i32,
        z_old: i32,
        x_new: i32,
        y_new: i32,
        z_new: i32,
    ) {
        self.lattice
            .move_site_xyz(x_old, y_old, z_old, x_new, y_new, z_new)
    }

    #[inline]
    fn get(&self, pos: impl Into<VectorInt3>) -> L::Value {
        self.lattice.get(pos)
    }

    #[inline]
    fn get_xyz(&self, x: i32, y: i32, z: i32) -> L::Value {
        self.lattice.get_xyz(x, y, z)
    }

    #[inline]
    fn set(&mut self, pos: impl Into<VectorInt3>, val: L::Value) {
        self.lattice.set(pos, val)
    }

    #[inline]
    fn set_xyz(&mut self, x: i32, y: i32, z: i32, val: L::Value) {
        self.lattice.set_xyz(x, y, z, val)
    }
}
