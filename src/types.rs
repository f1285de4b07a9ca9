use crate::real::Real;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Cartesian 3-vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length.
    pub fn norm2(self) -> Real {
        self.dot(self)
    }

    pub fn norm(self) -> Real {
        self.norm2().sqrt()
    }

    /// Unit vector along `self`, or `None` for the zero vector.
    pub fn normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > 0.0 {
            Some(self / n)
        } else {
            None
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector3 { x, y, z }
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: Real) -> Self::Output {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Self::Output {
        v * self
    }
}

impl Div<Real> for Vector3 {
    type Output = Vector3;
    fn div(self, s: Real) -> Self::Output {
        Vector3::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl std::iter::Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector3::ZERO, |s, v| s + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a + b, Vector3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3::new(5.0, 1.5, 1.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), -4.0 + 1.0 + 6.0);
        assert_eq!(a.cross(a), Vector3::ZERO);
    }

    #[test]
    fn normalize() {
        let v = Vector3::new(3.0, 0.0, -4.0);
        assert_eq!(v.norm(), 5.0);
        let u = v.normalize().unwrap();
        assert_relative_eq!(u.norm(), 1.0);
        assert_relative_eq!(u.z, -0.8);
        assert!(Vector3::ZERO.normalize().is_none());
    }

    #[test]
    fn sum() {
        let vs = vec![Vector3::new(1.0, 0.0, 0.0); 4];
        assert_eq!(vs.into_iter().sum::<Vector3>(), Vector3::new(4.0, 0.0, 0.0));
    }
}

// -- end of file --
