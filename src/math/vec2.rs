use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 2D vector of `f64`s. Screen positions and two channel colors.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec2([f64; 2]);

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2([x, y])
    }
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub fn x(&self) -> f64 {
        self.0[0]
    }
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    pub fn r(&self) -> f64 {
        self.0[0]
    }
    pub fn g(&self) -> f64 {
        self.0[1]
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    pub fn len_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (*self - other).len()
    }

    /// Same precondition as [`Vec3::normalize`](super::Vec3::normalize): non-zero length.
    pub fn normalize(&self) -> Vec2 {
        let l = self.len();
        Vec2::new(self.x() / l, self.y() / l)
    }

    pub fn intify(&self) -> Vec2 {
        Vec2::new(self.x() as i32 as f64, self.y() as i32 as f64)
    }

    pub fn cmp_len(&self, other: &Vec2) -> Option<Ordering> {
        self.len_squared().partial_cmp(&other.len_squared())
    }

    pub fn shorter_than(&self, other: &Vec2) -> bool {
        self.len_squared() < other.len_squared()
    }

    pub fn longer_than(&self, other: &Vec2) -> bool {
        self.len_squared() > other.len_squared()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x() + other.x(), self.y() + other.y())
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x() - other.x(), self.y() - other.y())
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x(), -self.y())
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, other: f64) -> Vec2 {
        Vec2::new(self.x() * other, self.y() * other)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, other: Vec2) -> Vec2 {
        other * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, other: f64) -> Vec2 {
        let r = 1.0 / other;
        Vec2::new(self.x() * r, self.y() * r)
    }
}

impl From<(usize, usize)> for Vec2 {
    fn from(pixel: (usize, usize)) -> Vec2 {
        Vec2::new(pixel.0 as f64, pixel.1 as f64)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(b.len(), 5.0);
        assert!((b.normalize().len() - 1.0).abs() < 1e-9);
        assert!(a.shorter_than(&b));
        assert_eq!(Vec2::new(1.9, -1.9).intify(), Vec2::new(1.0, -1.0));
        assert_eq!(Vec2::from((3, 7)), Vec2::new(3.0, 7.0));
    }
}
