use super::rgba::*;

///
/// An in-memory RGBA image that strokes can be rendered onto
///
/// Pixels are stored row by row, starting at the top-left corner. The centre of the pixel at `(x, y)`
/// is at the canvas coordinate `(x, y)`.
///
#[derive(Clone, PartialEq, Debug)]
pub struct RasterImage {
    width:  usize,
    height: usize,
    pixels: Vec<Rgba8>
}

impl RasterImage {
    ///
    /// Creates a transparent image of the specified size
    ///
    pub fn new(width: usize, height: usize) -> RasterImage {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    ///
    /// Creates an image where every pixel is set to the same colour
    ///
    pub fn filled(width: usize, height: usize, color: Rgba8) -> RasterImage {
        RasterImage {
            width:  width,
            height: height,
            pixels: vec![color; width * height]
        }
    }

    ///
    /// Creates an image from an existing set of pixels, returning None if the number of pixels does not match the size
    ///
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba8>) -> Option<RasterImage> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return None;
        }

        Some(RasterImage { width, height, pixels })
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    ///
    /// True if this image has no pixels (drawing to it will have no effect)
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    ///
    /// True if the specified pixel is inside this image
    ///
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    ///
    /// Reads the pixel at the specified position, or None if it's outside of the image
    ///
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgba8> {
        if self.contains(x, y) {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    ///
    /// Updates the pixel at the specified position (positions outside the image are ignored)
    ///
    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, pixel: Rgba8) {
        if self.contains(x, y) {
            self.pixels[y * self.width + x] = pixel;
        }
    }

    ///
    /// The pixels making up this image
    ///
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    ///
    /// Returns the pixels of this image as a byte array, 4 bytes per pixel in RGBA order
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter()
            .flat_map(|Rgba8(components)| components.iter().cloned())
            .collect()
    }
}

impl Default for RasterImage {
    fn default() -> RasterImage {
        RasterImage::new(0, 0)
    }
}
