use super::error::*;
use super::point::*;
use super::stroke_style::*;
use super::hatch_drawing::*;
use super::hatch_renderer::*;

use flo_raster_canvas::*;

use ::desync::*;

use std::sync::*;

///
/// A hatch renderer that can be shared between threads
///
/// All operations are queued on the same renderer, so batches of hatch lines drawn from different
/// threads never interleave. Cloning this creates a new reference to the same renderer.
///
#[derive(Clone)]
pub struct SharedHatchRenderer {
    /// The renderer that performs the drawing
    core: Arc<Desync<HatchRenderer>>
}

impl SharedHatchRenderer {
    ///
    /// Shares an existing renderer
    ///
    pub fn new(renderer: HatchRenderer) -> SharedHatchRenderer {
        SharedHatchRenderer {
            core: Arc::new(Desync::new(renderer))
        }
    }

    ///
    /// Strokes a batch of hatch lines (see `HatchRenderer::draw_hatch_lines`)
    ///
    pub fn draw_hatch_lines(&self, lines: &[PointSequence]) -> Result<(), HatchError> {
        self.core.sync(move |renderer| renderer.draw_hatch_lines(lines))
    }

    ///
    /// Changes the thickness of the hatch lines
    ///
    pub fn set_thickness(&self, thickness: i32) -> Result<(), HatchError> {
        self.core.sync(move |renderer| renderer.set_thickness(thickness))
    }

    ///
    /// Replaces the stroke style
    ///
    pub fn set_style(&self, style: StrokeStyle) -> Result<(), HatchError> {
        self.core.sync(move |renderer| renderer.set_style(style))
    }

    ///
    /// Sets how many times each hatch line is stroked
    ///
    pub fn set_repeat_mode(&self, repeat_mode: RepeatMode) {
        self.core.sync(move |renderer| renderer.set_repeat_mode(repeat_mode))
    }

    ///
    /// The current stroke style
    ///
    pub fn style(&self) -> StrokeStyle {
        self.core.sync(|renderer| renderer.style().clone())
    }

    ///
    /// Reads the image once all of the drawing queued before this call has finished
    ///
    pub fn with_image<TFn, TResult>(&self, read_image: TFn) -> TResult
    where
        TFn:        Send+FnOnce(&RasterImage) -> TResult,
        TResult:    Send,
    {
        self.core.sync(move |renderer| read_image(renderer.image()))
    }

    ///
    /// Returns a copy of the image as it is once all the queued drawing has finished
    ///
    pub fn snapshot(&self) -> RasterImage {
        self.with_image(|image| image.clone())
    }
}

impl From<HatchRenderer> for SharedHatchRenderer {
    fn from(renderer: HatchRenderer) -> SharedHatchRenderer {
        SharedHatchRenderer::new(renderer)
    }
}
