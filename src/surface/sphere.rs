use std::fmt;

use math3d::{DotProduct, Vector3};

use crate::ray::Ray;

use super::{Surface, SurfaceIntersection};

/// A sphere with its ambient (`ka`) and diffuse (`kd`) reflectance.
///
/// The coefficients are per-channel multipliers and are not required to lie
/// in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub center: Vector3,
    pub ka: Vector3,
    pub kd: Vector3,
}

impl Sphere {
    pub fn new(radius: f64, center: Vector3, ka: Vector3, kd: Vector3) -> Sphere {
        Sphere {
            radius,
            center,
            ka,
            kd,
        }
    }

    /// Outward unit normal at a point on the sphere.
    pub fn normal_at(&self, pos: Vector3) -> Vector3 {
        (pos - self.center).normalized()
    }
}

impl Surface for Sphere {
    /// Closed-form ray/sphere test.  Assumes `ray.dir` is unit length.
    ///
    /// Only the nearer root is ever reported, even when it lies behind the
    /// ray origin (negative `t`) or the origin is inside the sphere.
    fn intersect_ray(&self, ray: &Ray) -> SurfaceIntersection {
        let to_center = self.center - ray.orig;
        let v = to_center.dot(ray.dir);
        let csq = to_center.dot(to_center);
        let disc = (self.radius * self.radius) - (csq - (v * v));

        if disc < 0.0 {
            return SurfaceIntersection::Miss;
        }

        let t = v - disc.sqrt();
        SurfaceIntersection::Hit { t, pos: ray.at(t) }
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    Sphere ---------------------")?;
        writeln!(f, "    radius   = {}", self.radius)?;
        writeln!(f, "    position = {}", self.center)?;
        writeln!(f, "    Ka       = {}", self.ka)?;
        writeln!(f, "    Kd       = {}", self.kd)
    }
}
