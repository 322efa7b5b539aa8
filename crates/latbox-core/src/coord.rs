//! Integer 3-vector used to address lattice sites.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An exact integer position in a simulation box.
///
/// Components are signed: simulation features routinely track unfolded
/// (absolute) positions that leave the primary box, and the lattice folds
/// them back periodically on every access.
///
/// # Examples
///
/// ```
/// use latbox_core::VectorInt3;
///
/// let a = VectorInt3::new(1, 2, 3);
/// let b: VectorInt3 = (1, 0, -1).into();
/// assert_eq!(a + b, VectorInt3::new(2, 2, 2));
/// assert_eq!(VectorInt3::from([1, 2, 3]), a);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorInt3 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl VectorInt3 {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a vector from its three components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Components as an `(x, y, z)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Components as an `[x, y, z]` array.
    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(i32, i32, i32)> for VectorInt3 {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<[i32; 3]> for VectorInt3 {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<&VectorInt3> for VectorInt3 {
    #[inline]
    fn from(v: &VectorInt3) -> Self {
        *v
    }
}

impl From<VectorInt3> for (i32, i32, i32) {
    #[inline]
    fn from(v: VectorInt3) -> Self {
        v.to_tuple()
    }
}

impl fmt::Display for VectorInt3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for VectorInt3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for VectorInt3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for VectorInt3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for VectorInt3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for VectorInt3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
