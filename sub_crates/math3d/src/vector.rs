#![allow(dead_code)]

use std::{
    cmp::PartialEq,
    fmt,
    ops::{Add, Div, Index, Mul, Neg, Sub},
};

use glam::DVec3;

use super::{CrossProduct, DotProduct};

/// A 3d vector.  Used for points, directions, and RGB colors alike.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vector3 {
    pub co: DVec3,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { co: DVec3::ZERO };

    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 {
            co: DVec3::new(x, y, z),
        }
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        self.co.length()
    }

    #[inline(always)]
    pub fn length2(&self) -> f64 {
        self.co.length_squared()
    }

    /// Unit-length copy of the vector.  A zero-length vector produces NaN
    /// components.
    #[inline(always)]
    pub fn normalized(&self) -> Vector3 {
        *self / self.length()
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.co.x
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.co.y
    }

    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.co.z
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 3] {
        self.co.to_array()
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.co.is_finite()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.co.x,
            1 => &self.co.y,
            2 => &self.co.z,
            _ => panic!("Attempt to access dimension beyond z."),
        }
    }
}

impl PartialEq for Vector3 {
    #[inline(always)]
    fn eq(&self, other: &Vector3) -> bool {
        self.co == other.co
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            co: self.co + other.co,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            co: self.co - other.co,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, other: f64) -> Vector3 {
        Vector3 {
            co: self.co * other,
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, other: Vector3) -> Vector3 {
        Vector3 {
            co: other.co * self,
        }
    }
}

/// Component-wise product, e.g. a light color filtered by a reflectance.
impl Mul for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, other: Vector3) -> Vector3 {
        Vector3 {
            co: self.co * other.co,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn div(self, other: f64) -> Vector3 {
        Vector3 {
            co: self.co / other,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn neg(self) -> Vector3 {
        Vector3 { co: -self.co }
    }
}

impl DotProduct for Vector3 {
    #[inline(always)]
    fn dot(self, other: Vector3) -> f64 {
        self.co.dot(other.co)
    }
}

impl CrossProduct for Vector3 {
    #[inline]
    fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            co: self.co.cross(other.co),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.co.x, self.co.y, self.co.z)
    }
}
