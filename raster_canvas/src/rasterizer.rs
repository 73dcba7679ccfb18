use super::stroke_worker::*;

/// Offset from a pixel centre to the point where its coverage is tested (unequal so it can't lie on a 45 degree edge through the centre)
const SAMPLE_OFFSET: (f64, f64) = (1.0 / 1024.0, 1.0 / 2048.0);

///
/// A rectangular region of pixels within an image
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PixelRegion {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl PixelRegion {
    ///
    /// Finds the region of an image of the specified size whose pixel centres might be covered by a set of triangles
    ///
    /// Returns None if no pixel of the image can be covered (the triangles are empty, non-finite, or entirely outside the image)
    ///
    pub fn covering(triangles: &[Triangle], image_width: usize, image_height: usize) -> Option<PixelRegion> {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);

        for point in triangles.iter().filter(|triangle| is_finite(triangle)).flat_map(|triangle| triangle.iter()) {
            let (x, y) = (point[0] as f64, point[1] as f64);

            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }

        if min.0 > max.0 || min.1 > max.1 {
            return None;
        }

        // Pixel centres are on integer coordinates: clip the range of centres to the image
        let x0 = min.0.ceil().max(0.0);
        let y0 = min.1.ceil().max(0.0);
        let x1 = (max.0.floor() + 1.0).min(image_width as f64);
        let y1 = (max.1.floor() + 1.0).min(image_height as f64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(PixelRegion {
            x:      x0 as usize,
            y:      y0 as usize,
            width:  (x1 - x0) as usize,
            height: (y1 - y0) as usize
        })
    }

    ///
    /// True if the region contains no pixels
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

///
/// Scan-converts triangles into a coverage mask
///
/// A pixel is covered if its centre is inside any of the triangles. Centres that lie exactly on an edge are
/// tested a tiny distance up and to the left of the centre, so a span from `l` to `r` covers the centres in
/// `(l, r]`: a line of width 2 covers 2 pixels rather than 3, and pixels on the edge shared by two
/// adjacent triangles are only covered once.
///
#[derive(Clone, Debug)]
pub struct Rasterizer {
    region:     PixelRegion,
    coverage:   Vec<bool>
}

impl Rasterizer {
    ///
    /// Creates a rasterizer that generates coverage for the pixels in the specified region
    ///
    pub fn new(region: PixelRegion) -> Rasterizer {
        Rasterizer {
            region:     region,
            coverage:   vec![false; region.width * region.height]
        }
    }

    ///
    /// Marks the pixels covered by a triangle
    ///
    pub fn fill_triangle(&mut self, triangle: &Triangle) {
        if !is_finite(triangle) {
            return;
        }

        let a = (triangle[0][0] as f64, triangle[0][1] as f64);
        let b = (triangle[1][0] as f64, triangle[1][1] as f64);
        let c = (triangle[2][0] as f64, triangle[2][1] as f64);

        // Triangles with no area have no pixel centres inside them
        let area = edge(a, b, c);
        if area.abs() <= f64::EPSILON {
            return;
        }

        // Bounding box of the triangle, restricted to the region
        let min_x = a.0.min(b.0).min(c.0).ceil().max(self.region.x as f64);
        let min_y = a.1.min(b.1).min(c.1).ceil().max(self.region.y as f64);
        let max_x = a.0.max(b.0).max(c.0).floor().min((self.region.x + self.region.width) as f64 - 1.0);
        let max_y = a.1.max(b.1).max(c.1).floor().min((self.region.y + self.region.height) as f64 - 1.0);

        if max_x < min_x || max_y < min_y {
            return;
        }

        for y in (min_y as usize)..=(max_y as usize) {
            for x in (min_x as usize)..=(max_x as usize) {
                let sample  = (x as f64 - SAMPLE_OFFSET.0, y as f64 - SAMPLE_OFFSET.1);
                let w0      = edge(b, c, sample);
                let w1      = edge(c, a, sample);
                let w2      = edge(a, b, sample);

                let inside  = if area > 0.0 {
                    w0 > 0.0 && w1 > 0.0 && w2 > 0.0
                } else {
                    w0 < 0.0 && w1 < 0.0 && w2 < 0.0
                };

                if inside {
                    let index = (y - self.region.y) * self.region.width + (x - self.region.x);
                    self.coverage[index] = true;
                }
            }
        }
    }

    ///
    /// Marks the pixels covered by a set of triangles
    ///
    pub fn fill_triangles<'a, Triangles: IntoIterator<Item=&'a Triangle>>(&mut self, triangles: Triangles) {
        for triangle in triangles {
            self.fill_triangle(triangle);
        }
    }

    ///
    /// Finishes rasterizing and returns the coverage mask
    ///
    pub fn into_mask(self) -> Mask {
        Mask {
            region:     self.region,
            coverage:   self.coverage
        }
    }
}

///
/// The pixels covered by a single stroke
///
#[derive(Clone, Debug)]
pub struct Mask {
    region:     PixelRegion,
    coverage:   Vec<bool>
}

impl Mask {
    ///
    /// The region of the image that this mask applies to
    ///
    #[inline]
    pub fn region(&self) -> PixelRegion {
        self.region
    }

    ///
    /// True if the specified image pixel is covered by this mask
    ///
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        let region = &self.region;

        if x < region.x || y < region.y || x >= region.x + region.width || y >= region.y + region.height {
            false
        } else {
            self.coverage[(y - region.y) * region.width + (x - region.x)]
        }
    }

    ///
    /// Iterates over the image coordinates of the covered pixels
    ///
    pub fn covered_pixels<'a>(&'a self) -> impl 'a+Iterator<Item=(usize, usize)> {
        let region = self.region;

        self.coverage.iter()
            .enumerate()
            .filter(|(_, covered)| **covered)
            .map(move |(index, _)| (region.x + index % region.width, region.y + index / region.width))
    }

    ///
    /// The number of pixels covered by this mask
    ///
    pub fn covered_count(&self) -> usize {
        self.coverage.iter().filter(|covered| **covered).count()
    }
}

///
/// Twice the signed area of the triangle a, b, p
///
#[inline]
fn edge(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

#[inline]
fn is_finite(triangle: &Triangle) -> bool {
    triangle.iter().all(|point| point[0].is_finite() && point[1].is_finite())
}
