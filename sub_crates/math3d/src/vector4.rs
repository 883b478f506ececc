#![allow(dead_code)]

use std::{cmp::PartialEq, fmt, ops::Index};

use glam::DVec4;

use super::Vector3;

/// A 4d vector.  Used for camera bounds and homogeneous light positions.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vector4 {
    pub co: DVec4,
}

impl Vector4 {
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
        Vector4 {
            co: DVec4::new(x, y, z, w),
        }
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
    pub fn w(&self) -> f64 {
        self.co.w
    }

    /// Drops `w` without dividing through by it.
    #[inline(always)]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.co.x, self.co.y, self.co.z)
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.co.x,
            1 => &self.co.y,
            2 => &self.co.z,
            3 => &self.co.w,
            _ => panic!("Attempt to access dimension beyond w."),
        }
    }
}

impl PartialEq for Vector4 {
    #[inline(always)]
    fn eq(&self, other: &Vector4) -> bool {
        self.co == other.co
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.co.x, self.co.y, self.co.z, self.co.w
        )
    }
}
