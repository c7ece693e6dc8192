use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 4D vector of `f64`s. Also used as an RGBA color.
///
/// There is no cross product in four dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec4([f64; 4]);

impl Vec4 {
    pub const fn new(x: f64, y: f64, z: f64, t: f64) -> Vec4 {
        Vec4([x, y, z, t])
    }
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);

    pub fn x(&self) -> f64 {
        self.0[0]
    }
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    pub fn z(&self) -> f64 {
        self.0[2]
    }
    pub fn t(&self) -> f64 {
        self.0[3]
    }
    pub fn r(&self) -> f64 {
        self.0[0]
    }
    pub fn g(&self) -> f64 {
        self.0[1]
    }
    pub fn b(&self) -> f64 {
        self.0[2]
    }
    pub fn a(&self) -> f64 {
        self.0[3]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Vec4 {
        Vec4(self.0.map(f))
    }

    fn zip(&self, other: Vec4, f: impl Fn(f64, f64) -> f64) -> Vec4 {
        Vec4::new(
            f(self.0[0], other.0[0]),
            f(self.0[1], other.0[1]),
            f(self.0[2], other.0[2]),
            f(self.0[3], other.0[3]),
        )
    }

    pub fn dot(&self, other: Vec4) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn len_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    pub fn normalize(&self) -> Vec4 {
        let l = self.len();
        self.map(|c| c / l)
    }

    pub fn intify(&self) -> Vec4 {
        self.map(|c| c as i32 as f64)
    }

    pub fn cmp_len(&self, other: &Vec4) -> Option<Ordering> {
        self.len_squared().partial_cmp(&other.len_squared())
    }

    pub fn shorter_than(&self, other: &Vec4) -> bool {
        self.len_squared() < other.len_squared()
    }

    pub fn longer_than(&self, other: &Vec4) -> bool {
        self.len_squared() > other.len_squared()
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        self.zip(other, |a, b| a + b)
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        self.zip(other, |a, b| a - b)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        self.map(|c| -c)
    }
}

impl Mul<f64> for Vec4 {
    type Output = Vec4;
    fn mul(self, other: f64) -> Vec4 {
        self.map(|c| c * other)
    }
}

impl Mul<Vec4> for f64 {
    type Output = Vec4;
    fn mul(self, other: Vec4) -> Vec4 {
        other * self
    }
}

impl Div<f64> for Vec4 {
    type Output = Vec4;
    fn div(self, other: f64) -> Vec4 {
        let r = 1.0 / other;
        self.map(|c| c * r)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x(), self.y(), self.z(), self.t())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 1.1, 1.2, 1.3);
        let b = Vec4::new(1.3, 1.4, 1.5, 1.6);
        assert!(((a + b).t() - 2.9).abs() < 1e-12);
        assert_eq!(a - a, Vec4::ZERO);
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).dot(Vec4::new(1.0, 1.0, 1.0, 1.0)), 10.0);
        assert!((b.normalize().len() - 1.0).abs() < 1e-9);
        assert!(a.shorter_than(&b));
        assert!(b.longer_than(&a));
        assert_eq!(
            Vec4::new(-0.5, 2.5, 0.0, -3.9).intify(),
            Vec4::new(0.0, 2.0, 0.0, -3.0)
        );
    }
}
