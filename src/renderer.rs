use scoped_threadpool::Pool;

use math3d::Vector3;

use crate::{
    camera::{Camera, CameraBasis},
    image::{quantize, scan_pixel, Image, Rgb, BLACK},
    scene::{Scene, World},
    shading::shade,
    surface::{Sphere, Surface, SurfaceIntersection},
    timer::Stopwatch,
};

/// Renders a scene with the painter's algorithm: spheres are drawn one
/// full-frame layer at a time, farthest first, and every hit overwrites
/// whatever an earlier layer left in the pixel.
///
/// Ordering is by distance from the eye to each sphere's center, not by
/// per-pixel depth, so interpenetrating or oddly sized spheres can be
/// composited in the "wrong" order.
#[derive(Debug)]
pub struct Renderer<'a> {
    scene: &'a Scene,
    threads: usize,
}

impl<'a> Renderer<'a> {
    /// `threads` is the worker count for each layer; zero is treated as one.
    pub fn new(scene: &'a Scene, threads: usize) -> Renderer<'a> {
        Renderer {
            scene,
            threads: threads.max(1),
        }
    }

    pub fn render(&self) -> Image {
        let camera = &self.scene.camera;
        let mut stopwatch = Stopwatch::start();

        let basis = camera.basis();
        tracing::debug!("view basis: w {}, u {}, v {}", basis.w, basis.u, basis.v);

        let order = depth_order(camera.eye, &self.scene.spheres);
        tracing::debug!("depth order (farthest first): {:?}", order);

        let mut image = Image::new(camera.width(), camera.height());
        let mut pool = Pool::new(self.threads as u32);
        let rows_per_band = rows_per_band(camera.height(), self.threads);

        for (layer, &i) in order.iter().enumerate() {
            let sphere = &self.scene.spheres[i];
            let base_layer = layer == 0;

            pool.scoped(|scope| {
                for (start, band) in image.row_bands_mut(rows_per_band) {
                    let world = &self.scene.world;
                    let basis = &basis;
                    scope.execute(move || {
                        rasterize_band(camera, basis, world, sphere, base_layer, start, band);
                    });
                }
            });

            tracing::info!(
                "layer {}/{}: sphere {} ({})",
                layer + 1,
                order.len(),
                i,
                stopwatch.lap()
            );
        }

        image
    }
}

/// Indices into `spheres`, sorted by descending distance from `eye` to the
/// sphere centers.  Ties keep declaration order.
pub fn depth_order(eye: Vector3, spheres: &[Sphere]) -> Vec<usize> {
    let distances: Vec<f64> = spheres.iter().map(|s| (s.center - eye).length()).collect();

    let mut order: Vec<usize> = (0..spheres.len()).collect();
    order.sort_by(|&a, &b| distances[b].total_cmp(&distances[a]));
    order
}

/// Draws one sphere into a band of the image.
///
/// `start` is the scan index of the band's first pixel.  On the base layer a
/// miss clears the pixel to black; on later layers a miss leaves it alone.
fn rasterize_band(
    camera: &Camera,
    basis: &CameraBasis,
    world: &World,
    sphere: &Sphere,
    base_layer: bool,
    start: usize,
    band: &mut [Rgb],
) {
    let width = camera.width();

    for (i, rgb) in band.iter_mut().enumerate() {
        let ray = camera.pixel_ray(basis, scan_pixel(width, start + i));

        match sphere.intersect_ray(&ray) {
            SurfaceIntersection::Hit { pos, .. } => {
                *rgb = quantize(shade(world, pos, sphere));
            }
            SurfaceIntersection::Miss => {
                if base_layer {
                    *rgb = BLACK;
                }
            }
        }
    }
}

fn rows_per_band(height: usize, threads: usize) -> usize {
    // A few bands per thread keeps the threads busy when some rows miss
    // everything.
    let bands = threads * 4;
    ((height + bands - 1) / bands).max(1)
}
