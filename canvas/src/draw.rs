use super::color::*;

///
/// How the segments of a stroked path are joined together
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel
}

///
/// How the ends of an open stroked path are drawn
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square
}

///
/// Instructions for drawing to a canvas
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Closes the current path
    ClosePath,

    /// Draws a line around the current path
    Stroke,

    /// Sets the line width for the next stroke
    LineWidth(f32),

    /// Sets the line join style
    LineJoin(LineJoin),

    /// The cap to use on lines
    LineCap(LineCap),

    /// Sets the colour used for strokes
    StrokeColor(Color)
}

impl Draw {
    ///
    /// True if this instruction will cause pixels to be generated
    ///
    pub fn is_stroke(&self) -> bool {
        match self {
            Draw::Stroke    => true,
            _               => false
        }
    }
}
