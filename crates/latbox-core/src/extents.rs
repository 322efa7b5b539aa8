//! Box extents of a periodic simulation box.

use std::fmt;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (fastest-varying in linear indices).
    X,
    /// The y axis.
    Y,
    /// The z axis (slowest-varying in linear indices).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lower-case axis name.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extents `(x, y, z)` of a periodic simulation box.
///
/// A value of this type is not validated on construction; lattice setup
/// rejects zero or otherwise unsupported extents.
///
/// # Examples
///
/// ```
/// use latbox_core::{Axis, BoxExtents};
///
/// let b = BoxExtents::new(4, 8, 2);
/// assert_eq!(b.volume(), Some(64));
/// assert_eq!(b.get(Axis::Y), 8);
/// assert_eq!(BoxExtents::cubic(16).volume(), Some(4096));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxExtents {
    /// Extent along x.
    pub x: u32,
    /// Extent along y.
    pub y: u32,
    /// Extent along z.
    pub z: u32,
}

impl BoxExtents {
    /// Create extents from the three box sizes.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// A cubic box of side `n`.
    pub const fn cubic(n: u32) -> Self {
        Self { x: n, y: n, z: n }
    }

    /// Extent along `axis`.
    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Number of sites `x * y * z`, or `None` if it does not fit in `usize`.
    pub fn volume(&self) -> Option<usize> {
        (self.x as usize)
            .checked_mul(self.y as usize)?
            .checked_mul(self.z as usize)
    }

    /// First axis with a zero extent, if any.
    pub fn zero_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&a| self.get(a) == 0)
    }
}

impl From<(u32, u32, u32)> for BoxExtents {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BoxExtents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_multiplies_extents() {
        assert_eq!(BoxExtents::new(2, 3, 5).volume(), Some(30));
        assert_eq!(BoxExtents::new(1, 1, 1).volume(), Some(1));
    }

    #[test]
    fn volume_with_zero_axis_is_zero() {
        let b = BoxExtents::new(4, 0, 4);
        assert_eq!(b.volume(), Some(0));
        assert_eq!(b.zero_axis(), Some(Axis::Y));
    }

    #[test]
    fn volume_overflow_is_none() {
        assert_eq!(BoxExtents::cubic(u32::MAX).volume(), None);
    }

    #[test]
    fn zero_axis_reports_first() {
        assert_eq!(BoxExtents::new(0, 0, 1).zero_axis(), Some(Axis::X));
        assert_eq!(BoxExtents::new(1, 1, 1).zero_axis(), None);
    }

    #[test]
    fn display_uses_x_separator() {
        assert_eq!(BoxExtents::new(8, 16, 4).to_string(), "8x16x4");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
