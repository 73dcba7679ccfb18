use super::rgba::*;
use super::rasterizer::*;
use super::raster_image::*;
use super::stroke_worker::*;
use super::stroke_settings::*;
use super::compose::*;

use flo_hatch_canvas as canvas;
use flo_hatch_canvas::{GraphicsContext, GraphicsPrimitives};

use lyon::path;
use lyon::math::{point};

///
/// A single subpath of the path being built up by the canvas
///
struct SubPath {
    /// The points making up this subpath, starting at the 'move' point
    points: Vec<(f32, f32)>,

    /// True if the path was closed after the last point
    closed: bool
}

///
/// The path that is being built up by the canvas
///
struct PathState {
    /// The subpaths that make up this path
    subpaths: Vec<SubPath>,

    /// Set to false if a point that cannot be rendered was added to the path
    is_valid: bool
}

impl PathState {
    fn new() -> PathState {
        PathState {
            subpaths: vec![],
            is_valid: true
        }
    }

    ///
    /// The number of line segments in this path
    ///
    fn num_segments(&self) -> usize {
        self.subpaths.iter()
            .map(|subpath| subpath.points.len().saturating_sub(1))
            .sum()
    }

    ///
    /// Creates the lyon version of this path
    ///
    fn build(&self) -> path::Path {
        let mut builder = path::Builder::new();

        for subpath in self.subpaths.iter().filter(|subpath| subpath.points.len() >= 2) {
            let (x, y) = subpath.points[0];
            builder.move_to(point(x, y));

            for (x, y) in subpath.points.iter().skip(1) {
                builder.line_to(point(*x, *y));
            }

            if subpath.closed {
                builder.close();
            }
        }

        builder.build()
    }
}

///
/// Renders canvas drawing instructions directly to an in-memory image
///
/// This is a graphics context: paths are built up with `new_path`, `move_to` and `line_to`, and are
/// rendered onto the image when `stroke` is called. Only strokes ever change the image.
///
pub struct RasterCanvas {
    /// The image that strokes are rendered to
    image: RasterImage,

    /// The settings for the next brush stroke
    stroke_settings: StrokeSettings,

    /// Tessellates strokes
    worker: StrokeWorker,

    /// The path being built
    path: PathState,

    /// The number of strokes that have been rendered to the image
    strokes_rendered: usize
}

impl RasterCanvas {
    ///
    /// Creates a canvas that renders to the specified image
    ///
    pub fn new(image: RasterImage) -> RasterCanvas {
        RasterCanvas {
            image:              image,
            stroke_settings:    StrokeSettings::new(),
            worker:             StrokeWorker::new(),
            path:               PathState::new(),
            strokes_rendered:   0
        }
    }

    ///
    /// The image that this canvas is rendering to
    ///
    #[inline]
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    ///
    /// Consumes this canvas, returning the image that was rendered
    ///
    pub fn into_image(self) -> RasterImage {
        self.image
    }

    ///
    /// The settings that will be used for the next stroke
    ///
    #[inline]
    pub fn stroke_settings(&self) -> &StrokeSettings {
        &self.stroke_settings
    }

    ///
    /// The number of strokes that have generated pixels since this canvas was created
    ///
    #[inline]
    pub fn strokes_rendered(&self) -> usize {
        self.strokes_rendered
    }

    ///
    /// Tessellates and renders the current path
    ///
    fn render_stroke(&mut self) {
        // Paths without any segments (including single points) leave no mark
        if self.path.num_segments() == 0 {
            return;
        }

        if !self.path.is_valid {
            warn!("Not stroking a path with non-finite coordinates");
            return;
        }

        let line_width = self.stroke_settings.line_width;
        if !(line_width.is_finite() && line_width > 0.0) {
            warn!("Not stroking a path with a line width of {}", line_width);
            return;
        }

        if self.image.is_empty() {
            return;
        }

        // Convert to triangles
        let triangles = match self.worker.stroke(&self.path.build(), &self.stroke_settings) {
            Some(triangles) => triangles,
            None            => { return; }
        };

        // Rasterize the area of the image that's covered by the stroke
        if let Some(region) = PixelRegion::covering(&triangles, self.image.width(), self.image.height()) {
            let mut rasterizer = Rasterizer::new(region);
            rasterizer.fill_triangles(triangles.iter());

            let mask = rasterizer.into_mask();
            compose(&mut self.image, &mask, self.stroke_settings.stroke_color);

            self.strokes_rendered += 1;
        }
    }
}

impl GraphicsContext for RasterCanvas {
    fn new_path(&mut self) {
        self.path = PathState::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            self.path.is_valid = false;
            return;
        }

        self.path.subpaths.push(SubPath { points: vec![(x, y)], closed: false });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            self.path.is_valid = false;
            return;
        }

        let has_open_subpath = self.path.subpaths.last().map(|subpath| !subpath.closed).unwrap_or(false);

        if has_open_subpath {
            if let Some(subpath) = self.path.subpaths.last_mut() {
                subpath.points.push((x, y));
            }
        } else {
            // A line with no open subpath begins a new one
            self.move_to(x, y);
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.path.subpaths.last_mut() {
            subpath.closed = true;
        }
    }

    fn stroke(&mut self) {
        self.render_stroke();
    }

    fn line_width(&mut self, width: f32) {
        self.stroke_settings.line_width = width;
    }

    fn line_join(&mut self, join: canvas::LineJoin) {
        self.stroke_settings.join = join;
    }

    fn line_cap(&mut self, cap: canvas::LineCap) {
        self.stroke_settings.cap = cap;
    }

    fn stroke_color(&mut self, col: canvas::Color) {
        self.stroke_settings.stroke_color = Rgba8::from(col);
    }
}

impl GraphicsPrimitives for RasterCanvas {

}
