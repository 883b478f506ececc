use std::fmt;

use math3d::{CrossProduct, Vector3, Vector4};

use crate::{image::Pixel, ray::Ray};

/// A pinhole camera looking through a rectangular window on its image
/// plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// (width, height) in pixels.
    pub resolution: (usize, usize),
    /// Distance from the eye to the image plane.
    pub near: i32,
    /// Image plane window as (left, right, bottom, top).
    pub bounds: Vector4,
    pub eye: Vector3,
    pub look: Vector3,
    pub up: Vector3,
}

/// Orthonormal view basis derived from a camera's eye, look and up vectors.
///
/// `w` points from the look-at point back towards the eye, `u` to the right
/// of the view and `v` up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraBasis {
    pub w: Vector3,
    pub u: Vector3,
    pub v: Vector3,
}

impl Camera {
    pub fn width(&self) -> usize {
        self.resolution.0
    }

    pub fn height(&self) -> usize {
        self.resolution.1
    }

    pub fn left(&self) -> f64 {
        self.bounds[0]
    }

    pub fn right(&self) -> f64 {
        self.bounds[1]
    }

    pub fn bottom(&self) -> f64 {
        self.bounds[2]
    }

    pub fn top(&self) -> f64 {
        self.bounds[3]
    }

    /// Derives the view basis.  Parallel `up` and view directions give a
    /// degenerate (NaN) basis.
    pub fn basis(&self) -> CameraBasis {
        let w = (self.eye - self.look).normalized();
        let u = self.up.cross(w).normalized();
        let v = w.cross(u);

        CameraBasis { w, u, v }
    }

    /// Generates the ray through the given pixel.
    ///
    /// Column 0 maps to the left bound and row 0 to the top bound.  The ray
    /// starts on the image plane, not at the eye.
    pub fn pixel_ray(&self, basis: &CameraBasis, pixel: Pixel) -> Ray {
        let (left, right, bottom, top) = (self.left(), self.right(), self.bottom(), self.top());

        // Degenerate resolutions divide by zero here on purpose.
        let px = (pixel.col as f64 / (self.width() as f64 - 1.0)) * (right - left) + left;
        let py = (pixel.row as f64 / (self.height() as f64 - 1.0)) * (bottom - top) + top;

        let point =
            self.eye + (self.near as f64 * basis.w) + (px * basis.u) + (py * basis.v);
        let dir = (point - self.eye).normalized();

        Ray::new(point, dir)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    Camera ---------------------")?;
        writeln!(f, "    near   = {}", self.near)?;
        writeln!(f, "    res    = {} x {}", self.width(), self.height())?;
        writeln!(f, "    bounds = {}", self.bounds)?;
        writeln!(f, "    eye    = {}", self.eye)?;
        writeln!(f, "    look   = {}", self.look)?;
        writeln!(f, "    up     = {}", self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use math3d::DotProduct;

    fn test_camera() -> Camera {
        Camera {
            resolution: (5, 3),
            near: 2,
            bounds: Vector4::new(-1.0, 1.0, -0.5, 0.5),
            eye: Vector3::new(0.0, 0.0, 5.0),
            look: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn basis_axis_aligned() {
        let basis = test_camera().basis();

        assert_eq!(basis.w, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(basis.u, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(basis.v, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn basis_orthonormal() {
        let mut cam = test_camera();
        cam.eye = Vector3::new(3.0, -2.0, 7.0);
        cam.look = Vector3::new(0.5, 1.0, -1.0);
        cam.up = Vector3::new(0.2, 1.0, 0.1);
        let basis = cam.basis();

        assert_relative_eq!(basis.w.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(basis.u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(basis.v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(basis.w.dot(basis.u), 0.0, epsilon = 1e-12);
        assert_relative_eq!(basis.w.dot(basis.v), 0.0, epsilon = 1e-12);
        assert_relative_eq!(basis.u.dot(basis.v), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn basis_parallel_up_is_degenerate() {
        let mut cam = test_camera();
        cam.up = Vector3::new(0.0, 0.0, 1.0);
        let basis = cam.basis();

        assert!(!basis.u.is_finite());
        assert!(!basis.v.is_finite());
    }

    #[test]
    fn pixel_ray_first_corner() {
        let cam = test_camera();
        let basis = cam.basis();
        let ray = cam.pixel_ray(&basis, Pixel { col: 0, row: 0 });

        let corner = cam.eye + (2.0 * basis.w) + (-1.0 * basis.u) + (0.5 * basis.v);
        assert_eq!(ray.orig, corner);
        assert_eq!(ray.orig, Vector3::new(-1.0, 0.5, 7.0));
        assert_eq!(ray.dir, (corner - cam.eye).normalized());
    }

    #[test]
    fn pixel_ray_opposite_corner() {
        let cam = test_camera();
        let basis = cam.basis();
        let ray = cam.pixel_ray(&basis, Pixel { col: 4, row: 2 });

        let corner = cam.eye + (2.0 * basis.w) + (1.0 * basis.u) + (-0.5 * basis.v);
        assert_eq!(ray.orig, corner);
        assert_eq!(ray.orig, Vector3::new(1.0, -0.5, 7.0));
        assert_eq!(ray.dir, (corner - cam.eye).normalized());
    }

    #[test]
    fn pixel_ray_columns_are_horizontal() {
        let cam = test_camera();
        let basis = cam.basis();
        let a = cam.pixel_ray(&basis, Pixel { col: 1, row: 1 });
        let b = cam.pixel_ray(&basis, Pixel { col: 3, row: 1 });

        assert_eq!(a.orig.y(), b.orig.y());
        assert!(a.orig.x() < b.orig.x());
        assert_eq!(a.orig.y(), 0.0);
    }

    #[test]
    fn pixel_ray_direction_is_unit() {
        let cam = test_camera();
        let basis = cam.basis();
        let ray = cam.pixel_ray(&basis, Pixel { col: 3, row: 1 });

        assert_relative_eq!(ray.dir.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pixel_ray_single_column_is_nan() {
        let mut cam = test_camera();
        cam.resolution = (1, 3);
        let basis = cam.basis();
        let ray = cam.pixel_ray(&basis, Pixel { col: 0, row: 0 });

        assert!(ray.orig.x().is_nan());
        assert!(ray.dir.x().is_nan());
    }
}
