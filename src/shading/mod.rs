use math3d::Vector3;

use crate::{scene::World, surface::Sphere};

/// Local illumination of `sphere` at the surface point `pos`.
///
/// Sums the ambient term of every ambient light, then the Lambertian term of
/// every diffuse light the surface faces.  Other spheres are not considered,
/// so there are no shadows.  The result is not clamped.
pub fn shade(world: &World, pos: Vector3, sphere: &Sphere) -> Vector3 {
    let normal = sphere.normal_at(pos);

    let mut color = Vector3::ZERO;

    for light in world.ambient_lights.iter() {
        color = color + light.contribution(sphere.ka);
    }

    for light in world.diffuse_lights.iter() {
        if let Some(c) = light.contribution(pos, normal, sphere.kd) {
            color = color + c;
        }
    }

    color
}
