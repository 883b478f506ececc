use std::io::{self, Write};

use math3d::Vector3;

/// An 8-bit-per-channel RGB triple.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];

/// A pixel position: `col` counts left to right, `row` top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub col: usize,
    pub row: usize,
}

/// A fixed-size grid of RGB pixels.
///
/// Pixels are stored in scan order: rows from top to bottom, and within a
/// row columns from left to right.  `scan_index()` and `scan_pixel()` are
/// the only place that order is defined; both the renderer and the PPM writer
/// go through them.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<Rgb>,
    res: (usize, usize),
}

impl Image {
    pub fn new(width: usize, height: usize) -> Image {
        Image {
            data: vec![BLACK; width * height],
            res: (width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.res.0
    }

    pub fn height(&self) -> usize {
        self.res.1
    }

    /// The pixel at position `index` in scan order.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> Pixel {
        scan_pixel(self.res.0, index)
    }

    #[cfg(test)]
    pub fn get(&self, pixel: Pixel) -> Rgb {
        assert!(pixel.col < self.res.0);
        assert!(pixel.row < self.res.1);

        self.data[scan_index(self.res.0, pixel)]
    }

    /// All pixels with their positions, in scan order.
    pub fn pixels(&self) -> impl Iterator<Item = (Pixel, Rgb)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, rgb)| (self.pixel_at(i), *rgb))
    }

    /// Splits the buffer into bands of whole rows, each paired with the
    /// scan index of its first pixel.  The bands are disjoint, so each can
    /// be filled from a different thread.
    pub fn row_bands_mut(&mut self, rows_per_band: usize) -> Vec<(usize, &mut [Rgb])> {
        let width = self.res.0;
        let rows_per_band = rows_per_band.max(1);

        self.data
            .chunks_mut((rows_per_band * width).max(1))
            .enumerate()
            .map(|(i, band)| {
                let first = Pixel {
                    col: 0,
                    row: i * rows_per_band,
                };
                (scan_index(width, first), band)
            })
            .collect()
    }

    pub fn write_ascii_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        // Write header
        write!(out, "P3\n{} {} 255\n", self.res.0, self.res.1)?;

        // Write pixels
        for (pixel, [r, g, b]) in self.pixels() {
            write!(out, "{} {} {} ", r, g, b)?;
            if pixel.col + 1 == self.res.0 {
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

#[inline]
pub fn scan_index(width: usize, pixel: Pixel) -> usize {
    pixel.row * width + pixel.col
}

#[inline]
pub fn scan_pixel(width: usize, index: usize) -> Pixel {
    Pixel {
        col: index % width,
        row: index / width,
    }
}

/// Converts a shaded color to 8-bit RGB: each channel is scaled by 255,
/// rounded, and clamped to [0, 255].
pub fn quantize(color: Vector3) -> Rgb {
    [
        quantize_255(color.x()),
        quantize_255(color.y()),
        quantize_255(color.z()),
    ]
}

/// NaN and +inf saturate to 255, -inf to 0.
pub fn quantize_255(n: f64) -> u8 {
    let n = (n * 255.0).round();
    if n.is_nan() || n >= 255.0 {
        255
    } else if n <= 0.0 {
        0
    } else {
        n as u8
    }
}
