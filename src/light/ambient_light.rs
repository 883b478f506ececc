use std::fmt;

use math3d::Vector3;

/// Uniform light that reaches every surface point regardless of position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vector3,
}

impl AmbientLight {
    pub fn new(color: Vector3) -> AmbientLight {
        AmbientLight { color }
    }

    /// Light reflected by a surface with ambient reflectance `ka`.
    pub fn contribution(&self, ka: Vector3) -> Vector3 {
        self.color * ka
    }
}

impl fmt::Display for AmbientLight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    Light ---------------------")?;
        writeln!(f, "    type   = Ambient")?;
        writeln!(f, "    color  = {}", self.color)
    }
}
