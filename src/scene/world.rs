use crate::light::{AmbientLight, DiffuseLight, Light};

/// The lights of a scene, kept in one list per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    pub ambient_lights: Vec<AmbientLight>,
    pub diffuse_lights: Vec<DiffuseLight>,
}

impl World {
    /// Appends a light to the list for its kind, preserving declaration
    /// order within each list.
    pub fn add_light(&mut self, light: Light) {
        match light {
            Light::Ambient(l) => self.ambient_lights.push(l),
            Light::Diffuse(l) => self.diffuse_lights.push(l),
        }
    }
}
