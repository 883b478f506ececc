use std::fmt;

use math3d::{DotProduct, Vector3, Vector4};

/// A positioned light whose contribution scales with how directly a
/// surface faces it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiffuseLight {
    pub color: Vector3,
    /// Homogeneous position.  Only x, y and z are used; `w` is kept as
    /// given.
    pub position: Vector4,
}

impl DiffuseLight {
    pub fn new(color: Vector3, position: Vector4) -> DiffuseLight {
        DiffuseLight { color, position }
    }

    /// Light reflected at `point` (with unit surface normal `normal`) by a
    /// surface with diffuse reflectance `kd`.
    ///
    /// Returns `None` when the surface does not face the light.  No
    /// occlusion test is done.
    pub fn contribution(&self, point: Vector3, normal: Vector3, kd: Vector3) -> Option<Vector3> {
        let to_light = (self.position.xyz() - point).normalized();
        let cos = normal.dot(to_light);

        if cos > 0.0 {
            Some(self.color * kd * cos)
        } else {
            None
        }
    }
}

impl fmt::Display for DiffuseLight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    Light ---------------------")?;
        writeln!(f, "    type   = Diffuse")?;
        writeln!(f, "    color  = {}", self.color)?;
        writeln!(f, "    pos    = {}", self.position)
    }
}
