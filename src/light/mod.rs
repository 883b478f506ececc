mod ambient_light;
mod diffuse_light;

use std::fmt;

pub use self::ambient_light::AmbientLight;
pub use self::diffuse_light::DiffuseLight;

/// Any light a scene description can declare.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Diffuse(DiffuseLight),
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Light::Ambient(light) => light.fmt(f),
            Light::Diffuse(light) => light.fmt(f),
        }
    }
}
