use super::error::*;
use super::point::*;
use super::stroke_style::*;
use super::hatch_drawing::*;

use flo_raster_canvas::*;

///
/// Strokes hatch lines onto an image that it owns
///
/// The image is only ever changed by `draw_hatch_lines`. Every line in a batch is drawn using the same
/// stroke style: by default, open 3 pixel wide lines in opaque black.
///
pub struct HatchRenderer {
    /// The canvas that renders to the target image
    canvas: RasterCanvas,

    /// The style used for the hatch lines
    style: StrokeStyle,

    /// How many times each line is stroked
    repeat_mode: RepeatMode
}

impl HatchRenderer {
    ///
    /// Creates a renderer with an empty (0x0) target image and the default stroke style
    ///
    pub fn new() -> HatchRenderer {
        Self::with_image(RasterImage::default())
    }

    ///
    /// Creates a renderer with a transparent target image of the specified size
    ///
    pub fn with_size(width: usize, height: usize) -> HatchRenderer {
        Self::with_image(RasterImage::new(width, height))
    }

    ///
    /// Creates a renderer that draws onto an existing image
    ///
    pub fn with_image(image: RasterImage) -> HatchRenderer {
        HatchRenderer {
            canvas:         RasterCanvas::new(image),
            style:          StrokeStyle::default(),
            repeat_mode:    RepeatMode::default()
        }
    }

    ///
    /// Creates a renderer that draws onto an existing image using a particular stroke style
    ///
    pub fn with_style(image: RasterImage, style: StrokeStyle) -> Result<HatchRenderer, HatchError> {
        style.validate()?;

        let mut renderer    = Self::with_image(image);
        renderer.style      = style;

        Ok(renderer)
    }

    ///
    /// The image that the hatch lines are drawn onto
    ///
    #[inline]
    pub fn image(&self) -> &RasterImage {
        self.canvas.image()
    }

    ///
    /// Consumes this renderer, returning the image that was drawn
    ///
    pub fn into_image(self) -> RasterImage {
        self.canvas.into_image()
    }

    #[inline] pub fn style(&self) -> &StrokeStyle { &self.style }
    #[inline] pub fn thickness(&self) -> i32 { self.style.thickness }
    #[inline] pub fn repeat_mode(&self) -> RepeatMode { self.repeat_mode }

    ///
    /// The number of strokes that have reached the image so far
    ///
    #[inline]
    pub fn strokes_rendered(&self) -> usize {
        self.canvas.strokes_rendered()
    }

    ///
    /// Changes the thickness of the hatch lines
    ///
    /// Thicknesses of 0 or less are rejected and leave the current thickness in place
    ///
    pub fn set_thickness(&mut self, thickness: i32) -> Result<(), HatchError> {
        self.set_style(self.style.clone().with_thickness(thickness))
    }

    ///
    /// Replaces the stroke style (the current style is kept if the new one is not valid)
    ///
    pub fn set_style(&mut self, style: StrokeStyle) -> Result<(), HatchError> {
        if let Err(reason) = style.validate() {
            warn!("Rejected hatch stroke style: {}", reason);
            return Err(reason.into());
        }

        self.style = style;
        Ok(())
    }

    ///
    /// Sets how many times each hatch line is stroked
    ///
    pub fn set_repeat_mode(&mut self, repeat_mode: RepeatMode) {
        self.repeat_mode = repeat_mode;
    }

    ///
    /// Strokes a batch of hatch lines onto the image
    ///
    /// Lines with fewer than two points leave no mark. Lines with a coordinate outside of the drawable range
    /// are skipped, and their indexes are returned in an `InvalidGeometry` error once the rest of the batch
    /// has been drawn. Points that are outside of the image are clipped.
    ///
    pub fn draw_hatch_lines(&mut self, lines: &[PointSequence]) -> Result<(), HatchError> {
        if lines.is_empty() {
            return Ok(());
        }

        let strokes_before  = self.canvas.strokes_rendered();
        let skipped         = draw_hatch_line_batch(&mut self.canvas, lines, &self.style, self.repeat_mode);

        debug!("Drew {} hatch lines with {} strokes", lines.len(), self.canvas.strokes_rendered() - strokes_before);

        if skipped.is_empty() {
            Ok(())
        } else {
            for line_index in skipped.iter() {
                warn!("Hatch line {} has coordinates outside the range +/-{} and was not drawn", line_index, MAX_COORDINATE);
            }

            Err(HatchError::InvalidGeometry(skipped))
        }
    }
}

impl Default for HatchRenderer {
    fn default() -> HatchRenderer {
        HatchRenderer::new()
    }
}
