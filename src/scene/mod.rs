mod world;

use std::fmt;

use crate::{camera::Camera, surface::Sphere};

pub use self::world::World;

/// Everything needed to render one image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    /// Spheres in declaration order.  Rendering never reorders this.
    pub spheres: Vec<Sphere>,
    pub world: World,
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Scene --------------------------")?;
        writeln!(f, "{}", self.camera)?;

        for light in self.world.diffuse_lights.iter() {
            writeln!(f, "{}", light)?;
        }

        for light in self.world.ambient_lights.iter() {
            writeln!(f, "{}", light)?;
        }

        for sphere in self.spheres.iter() {
            writeln!(f, "{}", sphere)?;
        }

        Ok(())
    }
}
