//! Indexing strategies: periodic folding and linearization of coordinates.
//!
//! A strategy is a zero-sized marker type implementing [`Indexing`]. It is
//! chosen through the `I` type parameter of [`Lattice`](crate::Lattice), so
//! the fold and index arithmetic is monomorphized into every call site:
//!
//! - [`Linear`]: any extents; `index = x + y * x_pro + z * pro_xy` with
//!   Euclidean-remainder folding.
//! - [`PowerOfTwo`]: power-of-two extents only;
//!   `index = x + (y << x_pro) + (z << pro_xy)` with bit-mask folding.

use std::fmt;

use latbox_core::{Axis, BoxExtents};

use crate::error::LatticeError;

/// Precomputed sizes and strides of a configured box.
///
/// The meaning of [`x_pro`](Layout::x_pro) and [`pro_xy`](Layout::pro_xy)
/// depends on the strategy that built the layout: multiplicative strides for
/// [`Linear`], shift amounts for [`PowerOfTwo`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    extents: BoxExtents,
    box_xm1: u32,
    box_ym1: u32,
    box_zm1: u32,
    x_pro: usize,
    pro_xy: usize,
    sites: usize,
}

impl Layout {
    /// Layout of a lattice that has not been configured yet.
    pub const UNCONFIGURED: Self = Self {
        extents: BoxExtents::new(0, 0, 0),
        box_xm1: 0,
        box_ym1: 0,
        box_zm1: 0,
        x_pro: 0,
        pro_xy: 0,
        sites: 0,
    };

    /// Box extents.
    pub fn extents(&self) -> BoxExtents {
        self.extents
    }

    /// Extents minus one, used as fold masks by [`PowerOfTwo`].
    pub fn extents_minus_one(&self) -> (u32, u32, u32) {
        (self.box_xm1, self.box_ym1, self.box_zm1)
    }

    /// Stride (or shift) of the y contribution to the linear index.
    pub fn x_pro(&self) -> usize {
        self.x_pro
    }

    /// Stride (or shift) of the z contribution to the linear index.
    pub fn pro_xy(&self) -> usize {
        self.pro_xy
    }

    /// Number of sites in the box.
    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Whether extents have been configured.
    pub fn is_configured(&self) -> bool {
        self.sites != 0
    }
}

/// A coordinate folding and linearization scheme.
///
/// Implementors are zero-sized markers; all methods are associated
/// functions so the compiler resolves them statically.
pub trait Indexing: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Strategy name used in diagnostics.
    const NAME: &'static str;

    /// Validate `extents` and derive the layout for this strategy.
    fn layout(extents: BoxExtents) -> Result<Layout, LatticeError>;

    /// Fold `(x, y, z)` into the primary box.
    fn fold(layout: &Layout, x: i32, y: i32, z: i32) -> (usize, usize, usize);

    /// Linear index of an already-folded coordinate.
    fn linearize(layout: &Layout, x: usize, y: usize, z: usize) -> usize;

    /// Fold then linearize.
    #[inline]
    fn index(layout: &Layout, x: i32, y: i32, z: i32) -> usize {
        let (fx, fy, fz) = Self::fold(layout, x, y, z);
        Self::linearize(layout, fx, fy, fz)
    }

    /// Check whether `extents` are acceptable to this strategy.
    fn validate(extents: BoxExtents) -> Result<(), LatticeError> {
        Self::layout(extents).map(|_| ())
    }
}

/// Largest extent along any axis: coordinates are `i32`.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// Checks shared by all strategies. Returns the site count.
fn check_extents(extents: BoxExtents) -> Result<usize, LatticeError> {
    if let Some(axis) = extents.zero_axis() {
        return Err(LatticeError::EmptyBox { axis });
    }
    for axis in Axis::ALL {
        let value = extents.get(axis);
        if value > MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                axis,
                value,
                max: MAX_DIM,
            });
        }
    }
    extents
        .volume()
        .ok_or(LatticeError::VolumeOverflow { extents })
}

/// Multiplicative indexing for arbitrary extents.
///
/// # Examples
///
/// ```
/// use latbox_core::BoxExtents;
/// use latbox_lattice::{Indexing, Linear};
///
/// let layout = Linear::layout(BoxExtents::new(4, 4, 4)).unwrap();
/// assert_eq!(Linear::index(&layout, 1, 2, 3), 1 + 2 * 4 + 3 * 16);
/// // 5 folds to 1 along x.
/// assert_eq!(Linear::index(&layout, 5, 2, 3), Linear::index(&layout, 1, 2, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Indexing for Linear {
    const NAME: &'static str = "linear";

    fn layout(extents: BoxExtents) -> Result<Layout, LatticeError> {
        let sites = check_extents(extents)?;
        Ok(Layout {
            extents,
            box_xm1: extents.x - 1,
            box_ym1: extents.y - 1,
            box_zm1: extents.z - 1,
            x_pro: extents.x as usize,
            pro_xy: extents.x as usize * extents.y as usize,
            sites,
        })
    }

    #[inline]
    fn fold(layout: &Layout, x: i32, y: i32, z: i32) -> (usize, usize, usize) {
        let e = layout.extents;
        (
            x.rem_euclid(e.x as i32) as usize,
            y.rem_euclid(e.y as i32) as usize,
            z.rem_euclid(e.z as i32) as usize,
        )
    }

    #[inline]
    fn linearize(layout: &Layout, x: usize, y: usize, z: usize) -> usize {
        x + y * layout.x_pro + z * layout.pro_xy
    }
}

/// Bit-shift indexing for power-of-two extents.
///
/// Folding is a bitwise AND with `extent - 1`, which also maps negative
/// coordinates correctly through two's complement.
///
/// # Examples
///
/// ```
/// use latbox_core::BoxExtents;
/// use latbox_lattice::{Indexing, PowerOfTwo};
///
/// let layout = PowerOfTwo::layout(BoxExtents::new(8, 4, 2)).unwrap();
/// assert_eq!(layout.x_pro(), 3);
/// assert_eq!(layout.pro_xy(), 5);
/// assert_eq!(PowerOfTwo::index(&layout, -1, 0, 0), 7);
/// assert!(PowerOfTwo::layout(BoxExtents::new(6, 4, 4)).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerOfTwo;

impl Indexing for PowerOfTwo {
    const NAME: &'static str = "power-of-two";

    fn layout(extents: BoxExtents) -> Result<Layout, LatticeError> {
        let sites = check_extents(extents)?;
        for axis in Axis::ALL {
            let value = extents.get(axis);
            if !value.is_power_of_two() {
                return Err(LatticeError::NotPowerOfTwo { axis, value });
            }
        }
        let shift_x = extents.x.trailing_zeros() as usize;
        let shift_y = extents.y.trailing_zeros() as usize;
        Ok(Layout {
            extents,
            box_xm1: extents.x - 1,
            box_ym1: extents.y - 1,
            box_zm1: extents.z - 1,
            x_pro: shift_x,
            pro_xy: shift_x + shift_y,
            sites,
        })
    }

    #[inline]
    fn fold(layout: &Layout, x: i32, y: i32, z: i32) -> (usize, usize, usize) {
        (
            (x as u32 & layout.box_xm1) as usize,
            (y as u32 & layout.box_ym1) as usize,
            (z as u32 & layout.box_zm1) as usize,
        )
    }

    #[inline]
    fn linearize(layout: &Layout, x: usize, y: usize, z: usize) -> usize {
        x + (y << layout.x_pro) + (z << layout.pro_xy)
    }
}
