#![allow(dead_code)]

mod vector;
mod vector4;

pub use self::vector::Vector3;
pub use self::vector4::Vector4;

/// Trait for calculating dot products.
pub trait DotProduct {
    fn dot(self, other: Self) -> f64;
}

#[inline]
pub fn dot<T: DotProduct>(a: T, b: T) -> f64 {
    a.dot(b)
}

/// Trait for calculating cross products.
pub trait CrossProduct {
    fn cross(self, other: Self) -> Self;
}

#[inline]
pub fn cross<T: CrossProduct>(a: T, b: T) -> T {
    a.cross(b)
}
