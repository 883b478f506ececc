use math3d::Vector3;

/// A ray with an origin and a (normally unit-length) direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub orig: Vector3,
    pub dir: Vector3,
}

impl Ray {
    pub fn new(orig: Vector3, dir: Vector3) -> Ray {
        Ray { orig, dir }
    }

    /// The point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> Vector3 {
        self.orig + (t * self.dir)
    }
}
