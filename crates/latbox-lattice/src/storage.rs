//! Indexed storage: the owned site buffer and its primitive operations.
//!
//! A [`Lattice`] owns one contiguous `Box<[V]>` of `x * y * z` sites. Every
//! position is folded into the periodic box and linearized by the indexing
//! strategy `I` before it touches the buffer, so there is no out-of-bounds
//! coordinate: the box is a torus.
//!
//! Lifecycle:
//!
//! ```text
//! new() ──configure()──▶ configured ──setup()──▶ allocated ◀──clear()
//!   └───────────────setup_box(x, y, z)──────────────▶ │
//!                        ▲                            │
//!                        └──────────delete()──────────┘
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use latbox_core::{BoxExtents, VectorInt3};

use crate::config::LatticeConfig;
use crate::diagnostics::{self, SetupObserver, SetupReport};
use crate::error::LatticeError;
use crate::indexing::{Indexing, Layout, Linear, PowerOfTwo};

/// A periodic three-dimensional lattice of `V` values.
///
/// The indexing strategy is fixed by the type parameter `I` and resolved at
/// compile time; see [`indexing`](crate::indexing). Unset, cleared, and
/// moved-away-from sites hold `V::default()`.
///
/// Calling [`get`](Lattice::get), [`set`](Lattice::set) or
/// [`move_site`](Lattice::move_site) before setup (or after
/// [`delete`](Lattice::delete)) is a precondition violation and panics.
///
/// # Examples
///
/// ```
/// use latbox_lattice::LinearLattice;
///
/// let mut lattice: LinearLattice<u32> = LinearLattice::new();
/// lattice.setup_box(4, 4, 4).unwrap();
/// lattice.set_xyz(1, 2, 3, 7);
/// assert_eq!(lattice.get_xyz(5, 2, 3), 7); // 5 folds to 1
/// lattice.move_site_xyz(1, 2, 3, 2, 2, 3);
/// assert_eq!(lattice.get((2, 2, 3)), 7);
/// assert_eq!(lattice.get((1, 2, 3)), 0);
/// ```
pub struct Lattice<V, I = Linear> {
    layout: Layout,
    /// Empty while unallocated.
    sites: Box<[V]>,
    observer: Option<Arc<dyn SetupObserver>>,
    _indexing: PhantomData<I>,
}

/// Lattice with multiplicative indexing.
pub type LinearLattice<V> = Lattice<V, Linear>;

/// Lattice with bit-shift indexing; extents must be powers of two.
pub type PowerOfTwoLattice<V> = Lattice<V, PowerOfTwo>;

impl<V, I: Indexing> Lattice<V, I> {
    /// An unconfigured, unallocated lattice.
    pub fn new() -> Self {
        Self {
            layout: Layout::UNCONFIGURED,
            sites: Box::default(),
            observer: None,
            _indexing: PhantomData,
        }
    }

    /// Install a setup observer.
    pub fn with_observer(mut self, observer: impl SetupObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Replace (or remove) the setup observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn SetupObserver>>) {
        self.observer = observer;
    }

    /// Validate and store extents without allocating.
    ///
    /// Any existing buffer is released; call [`setup`](Lattice::setup)
    /// afterwards. On error the lattice is left unchanged.
    pub fn configure(&mut self, extents: BoxExtents) -> Result<(), LatticeError> {
        self.layout = I::layout(extents)?;
        self.delete();
        Ok(())
    }

    /// Release the site buffer, keeping the configured extents.
    ///
    /// Idempotent.
    pub fn delete(&mut self) {
        if !self.sites.is_empty() {
            tracing::trace!(
                strategy = I::NAME,
                extents = %self.layout.extents(),
                "lattice buffer released"
            );
            self.sites = Box::default();
        }
    }

    /// Name of the indexing strategy.
    pub fn strategy(&self) -> &'static str {
        I::NAME
    }

    /// Configured layout (sizes and strides).
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Configured box extents; all zero before configuration.
    pub fn extents(&self) -> BoxExtents {
        self.layout.extents()
    }

    /// Extent along x.
    pub fn box_x(&self) -> u32 {
        self.layout.extents().x
    }

    /// Extent along y.
    pub fn box_y(&self) -> u32 {
        self.layout.extents().y
    }

    /// Extent along z.
    pub fn box_z(&self) -> u32 {
        self.layout.extents().z
    }

    /// Whether the site buffer is allocated.
    pub fn is_allocated(&self) -> bool {
        !self.sites.is_empty()
    }

    /// Number of allocated sites (0 when unallocated).
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns `true` when no buffer is allocated.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Memory used by the site buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.sites.len() * std::mem::size_of::<V>()
    }

    /// All sites in linear-index order.
    pub fn as_slice(&self) -> &[V] {
        &self.sites
    }

    /// Fold `pos` into the primary box.
    ///
    /// Requires configured extents.
    pub fn fold(&self, pos: impl Into<VectorInt3>) -> VectorInt3 {
        let p = pos.into();
        let (x, y, z) = I::fold(&self.layout, p.x, p.y, p.z);
        VectorInt3::new(x as i32, y as i32, z as i32)
    }

    /// Linear buffer index that `pos` maps to.
    ///
    /// Requires configured extents.
    #[inline]
    pub fn index_of(&self, pos: impl Into<VectorInt3>) -> usize {
        let p = pos.into();
        I::index(&self.layout, p.x, p.y, p.z)
    }

    #[inline]
    fn site(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(
            !self.sites.is_empty(),
            "lattice accessed before setup (or after delete)"
        );
        I::index(&self.layout, x, y, z)
    }

    /// Borrow the value at `pos`.
    #[inline]
    pub fn get_ref(&self, pos: impl Into<VectorInt3>) -> &V {
        let p = pos.into();
        self.get_ref_xyz(p.x, p.y, p.z)
    }

    /// Borrow the value at `(x, y, z)`.
    #[inline]
    pub fn get_ref_xyz(&self, x: i32, y: i32, z: i32) -> &V {
        &self.sites[self.site(x, y, z)]
    }
}

impl<V: Default, I: Indexing> Lattice<V, I> {
    /// Build and allocate a lattice from `config`.
    pub fn from_config(config: LatticeConfig) -> Result<Self, LatticeError> {
        let mut lattice = Self::new();
        lattice.observer = config.observer;
        lattice.configure(config.extents)?;
        lattice.setup()?;
        Ok(lattice)
    }

    /// Allocate the site buffer for the configured extents.
    ///
    /// Every site is set to `V::default()`. A buffer that already has the
    /// right size is reused; otherwise it is released before the new one
    /// is allocated.
    ///
    /// # Errors
    ///
    /// [`LatticeError::Unconfigured`] if no extents were configured, or
    /// [`LatticeError::AllocationFailed`] if the buffer cannot be allocated.
    pub fn setup(&mut self) -> Result<(), LatticeError> {
        if !self.layout.is_configured() {
            return Err(LatticeError::Unconfigured);
        }
        let sites = self.layout.sites();
        if self.sites.len() == sites {
            self.clear();
        } else {
            self.sites = Box::default();
            self.sites = allocate(sites)?;
        }

        let report = SetupReport {
            strategy: I::NAME,
            extents: self.layout.extents(),
            x_pro: self.layout.x_pro(),
            pro_xy: self.layout.pro_xy(),
            sites,
            bytes: self.memory_bytes(),
        };
        diagnostics::emit(&report);
        if let Some(observer) = &self.observer {
            observer.on_setup(&report);
        }
        Ok(())
    }

    /// Configure extents `(x, y, z)` and allocate.
    ///
    /// The normal entry point.
    ///
    /// # Errors
    ///
    /// A validation error ([`LatticeError::EmptyBox`],
    /// [`LatticeError::DimensionTooLarge`], [`LatticeError::NotPowerOfTwo`],
    /// [`LatticeError::VolumeOverflow`]) leaves the lattice unchanged.
    /// [`LatticeError::AllocationFailed`] leaves it configured with the new
    /// extents but unallocated; the previous buffer is already released.
    pub fn setup_box(&mut self, x: u32, y: u32, z: u32) -> Result<(), LatticeError> {
        let layout = I::layout(BoxExtents::new(x, y, z))?;
        if layout.sites() != self.sites.len() {
            self.delete();
        }
        self.layout = layout;
        self.setup()
    }

    /// Reset every site to `V::default()`, keeping the buffer.
    ///
    /// No-op when unallocated.
    pub fn clear(&mut self) {
        self.sites.fill_with(V::default);
    }

    /// Overwrite the value at `pos`.
    #[inline]
    pub fn set(&mut self, pos: impl Into<VectorInt3>, val: V) {
        let p = pos.into();
        self.set_xyz(p.x, p.y, p.z, val);
    }

    /// Overwrite the value at `(x, y, z)`.
    #[inline]
    pub fn set_xyz(&mut self, x: i32, y: i32, z: i32, val: V) {
        let i = self.site(x, y, z);
        self.sites[i] = val;
    }

    /// Move the value at `old` to `new`, leaving `V::default()` at `old`.
    ///
    /// The previous value at `new` is overwritten. When both positions fold
    /// to the same site the value stays in place.
    #[inline]
    pub fn move_site(&mut self, old: impl Into<VectorInt3>, new: impl Into<VectorInt3>) {
        let (o, n) = (old.into(), new.into());
        self.move_site_xyz(o.x, o.y, o.z, n.x, n.y, n.z);
    }

    /// Move the value at `(x_old, y_old, z_old)` to `(x_new, y_new, z_new)`.
    #[inline]
    pub fn move_site_xyz(
        &mut self,
        x_old: i32,
        y_old: i32,
        z_old: i32,
        x_new: i32,
        y_new: i32,
        z_new: i32,
    ) {
        let from = self.site(x_old, y_old, z_old);
        let to = self.site(x_new, y_new, z_new);
        let value = std::mem::take(&mut self.sites[from]);
        self.sites[to] = value;
    }
}

impl<V: Clone, I: Indexing> Lattice<V, I> {
    /// Value at `pos`.
    #[inline]
    pub fn get(&self, pos: impl Into<VectorInt3>) -> V {
        self.get_ref(pos).clone()
    }

    /// Value at `(x, y, z)`.
    #[inline]
    pub fn get_xyz(&self, x: i32, y: i32, z: i32) -> V {
        self.get_ref_xyz(x, y, z).clone()
    }
}

fn allocate<V: Default>(sites: usize) -> Result<Box<[V]>, LatticeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(sites)
        .map_err(|_| LatticeError::AllocationFailed {
            sites,
            bytes: sites.saturating_mul(std::mem::size_of::<V>()),
        })?;
    buf.resize_with(sites, V::default);
    Ok(buf.into_boxed_slice())
}

impl<V, I: Indexing> Default for Lattice<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: extents, strides and every site value.
impl<V: Clone, I: Indexing> Clone for Lattice<V, I> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout,
            sites: self.sites.clone(),
            observer: self.observer.clone(),
            _indexing: PhantomData,
        }
    }

    /// Reuses the destination buffer when the volumes match.
    fn clone_from(&mut self, source: &Self) {
        self.layout = source.layout;
        if self.sites.len() == source.sites.len() {
            self.sites.clone_from_slice(&source.sites);
        } else {
            self.sites = source.sites.clone();
        }
        self.observer.clone_from(&source.observer);
    }
}

impl<V, I: Indexing> fmt::Debug for Lattice<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("strategy", &I::NAME)
            .field("extents", &self.layout.extents())
            .field("allocated", &self.is_allocated())
            .finish()
    }
}
