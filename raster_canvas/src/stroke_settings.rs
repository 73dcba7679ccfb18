use super::rgba::*;

use flo_hatch_canvas as canvas;

///
/// The settings for a stroke
///
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeSettings {
    pub stroke_color:   Rgba8,
    pub join:           canvas::LineJoin,
    pub cap:            canvas::LineCap,
    pub line_width:     f32
}

impl StrokeSettings {
    ///
    /// Creates a new stroke settings with the default values for the renderer
    ///
    pub fn new() -> StrokeSettings {
        StrokeSettings {
            stroke_color:   Rgba8::BLACK,
            join:           canvas::LineJoin::Round,
            cap:            canvas::LineCap::Butt,
            line_width:     1.0
        }
    }
}

impl Default for StrokeSettings {
    fn default() -> StrokeSettings {
        StrokeSettings::new()
    }
}
