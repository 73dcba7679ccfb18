use super::stroke_settings::*;

use flo_hatch_canvas as canvas;

use lyon::path;
use lyon::math::{Point};
use lyon::tessellation;
use lyon::tessellation::{VertexBuffers, BuffersBuilder, StrokeOptions, StrokeAttributes};

///
/// A triangle generated by tessellating a stroke, as three points in canvas coordinates
///
pub type Triangle = [[f32; 2]; 3];

///
/// Turns paths into the triangles that make up their stroked outline
///
pub struct StrokeWorker {
}

impl StrokeWorker {
    ///
    /// Creates a new stroke worker
    ///
    pub fn new() -> StrokeWorker {
        StrokeWorker {
        }
    }

    ///
    /// Converts some stroke settings to Lyon stroke options
    ///
    fn convert_stroke_settings(stroke_settings: &StrokeSettings) -> StrokeOptions {
        let mut stroke_options = StrokeOptions::default();

        stroke_options.line_width   = stroke_settings.line_width;
        stroke_options.end_cap      = match stroke_settings.cap {
            canvas::LineCap::Butt   => tessellation::LineCap::Butt,
            canvas::LineCap::Square => tessellation::LineCap::Square,
            canvas::LineCap::Round  => tessellation::LineCap::Round
        };
        stroke_options.start_cap    = stroke_options.end_cap;
        stroke_options.line_join    = match stroke_settings.join {
            canvas::LineJoin::Miter => tessellation::LineJoin::Miter,
            canvas::LineJoin::Bevel => tessellation::LineJoin::Bevel,
            canvas::LineJoin::Round => tessellation::LineJoin::Round
        };

        stroke_options
    }

    ///
    /// Strokes a path and returns the triangles that cover the stroke
    ///
    /// Returns None if lyon could not tessellate the path
    ///
    pub fn stroke(&mut self, path: &path::Path, stroke_settings: &StrokeSettings) -> Option<Vec<Triangle>> {
        // Create the tessellator and geometry
        let mut tessellator                             = tessellation::StrokeTessellator::new();
        let mut geometry: VertexBuffers<[f32; 2], u32>  = VertexBuffers::new();

        // Set up the stroke options
        let stroke_options                              = Self::convert_stroke_settings(stroke_settings);

        // Stroke the path
        let result = tessellator.tessellate_path(path, &stroke_options,
            &mut BuffersBuilder::new(&mut geometry, |point: Point, _attr: StrokeAttributes| {
                point.to_array()
            }));

        if let Err(err) = result {
            warn!("Could not tessellate stroke: {:?}", err);
            return None;
        }

        // Gather the indexed vertices into triangles
        let triangles = geometry.indices.chunks_exact(3)
            .map(|triangle| [
                geometry.vertices[triangle[0] as usize],
                geometry.vertices[triangle[1] as usize],
                geometry.vertices[triangle[2] as usize]
            ])
            .collect::<Vec<_>>();

        trace!("Stroke of width {} tessellated to {} triangles", stroke_settings.line_width, triangles.len());

        Some(triangles)
    }
}

impl Default for StrokeWorker {
    fn default() -> StrokeWorker {
        StrokeWorker::new()
    }
}
