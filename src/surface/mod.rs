mod sphere;

use std::fmt::Debug;

use math3d::Vector3;

use crate::ray::Ray;

pub use self::sphere::Sphere;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SurfaceIntersection {
    Miss,
    Hit {
        /// Ray parameter of the hit.  May be negative.
        t: f64,
        /// World-space hit point, `ray.at(t)`.
        pos: Vector3,
    },
}

pub trait Surface: Debug {
    fn intersect_ray(&self, ray: &Ray) -> SurfaceIntersection;
}
