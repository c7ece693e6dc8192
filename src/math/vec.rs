use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 3D vector of `f64`s.
///
/// Used as a point, a direction and, through the `RGB` alias, as a color triple.
/// Every operation returns a new value, there is no in-place mutation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3([f64; 3]);

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3([x, y, z])
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

impl Vec3 {
    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    // color channel accessors
    #[inline(always)]
    pub fn r(&self) -> f64 {
        self.0[0]
    }
    #[inline(always)]
    pub fn g(&self) -> f64 {
        self.0[1]
    }
    #[inline(always)]
    pub fn b(&self) -> f64 {
        self.0[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }
}

impl Vec3 {
    pub fn dot(&self, other: Vec3) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    pub fn len_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y() + self.z() * self.z()
    }

    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    pub fn distance_squared(&self, other: Vec3) -> f64 {
        (*self - other).len_squared()
    }

    pub fn distance(&self, other: Vec3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// The length must be non-zero. Normalizing a zero vector divides by zero and
    /// produces NaN components; this is not checked.
    pub fn normalize(&self) -> Vec3 {
        let l = self.len();
        Vec3::new(self.x() / l, self.y() / l, self.z() / l)
    }

    /// Truncates every component toward zero through an integer cast.
    ///
    /// With the center of a cube at the origin this turns an averaged corner direction
    /// into a face, edge or corner direction in {-1, 0, 1}³. NaN components become 0.
    pub fn intify(&self) -> Vec3 {
        Vec3::new(
            self.x() as i32 as f64,
            self.y() as i32 as f64,
            self.z() as i32 as f64,
        )
    }

    /// Treats the vector as an RGB color and saturates each channel to 0..=255.
    pub fn clamp255(&self) -> Vec3 {
        fn channel(v: f64) -> f64 {
            if v > 255.0 {
                255.0
            } else if v < 0.0 {
                0.0
            } else {
                v
            }
        }
        Vec3::new(channel(self.x()), channel(self.y()), channel(self.z()))
    }

    /// The three channels truncated to integers, space separated.
    pub fn ppm(&self) -> String {
        format!(
            "{} {} {}",
            self.r() as i32,
            self.g() as i32,
            self.b() as i32
        )
    }

    // magnitude ordering by squared length, no sqrt involved.
    // this is intentionally not PartialOrd, since PartialEq compares components exactly.
    pub fn cmp_len(&self, other: &Vec3) -> Option<Ordering> {
        self.len_squared().partial_cmp(&other.len_squared())
    }

    pub fn shorter_than(&self, other: &Vec3) -> bool {
        self.len_squared() < other.len_squared()
    }

    pub fn longer_than(&self, other: &Vec3) -> bool {
        self.len_squared() > other.len_squared()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x() - other.x(), self.y() - other.y(), self.z() - other.z())
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x(), -self.y(), -self.z())
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        Vec3::new(self.x() * other, self.y() * other, self.z() * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        let r = 1.0 / other;
        Vec3::new(self.x() * r, self.y() * r, self.z() * r)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Vec3 {
        Vec3(v)
    }
}

impl From<f64> for Vec3 {
    fn from(s: f64) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z())
    }
}
