use super::error::*;

use flo_hatch_canvas::{Color, LineJoin, LineCap};

///
/// The thickness used for hatch lines when no other thickness is configured
///
pub const DEFAULT_THICKNESS: i32 = 3;

///
/// How colours are assigned to hatch lines
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HatchColoring {
    /// Every hatch line is drawn in the same colour
    Solid(Color),

    /// Hatch line `n` is drawn with colour `n % len`
    Cycle(Vec<Color>)
}

///
/// The rendering parameters applied to every hatch line
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Thickness of the stroke in pixels (must be positive)
    pub thickness: i32,

    /// Colour of the strokes
    pub coloring: HatchColoring,

    /// If true, the last point of each hatch line is joined back to the first
    pub closed: bool,

    /// How the segments within a line are joined
    pub join: LineJoin,

    /// How the ends of each line are drawn
    pub cap: LineCap
}

impl HatchColoring {
    ///
    /// A cycle of five distinct colours, useful for telling adjacent hatch lines apart
    ///
    pub fn rotating_palette() -> HatchColoring {
        HatchColoring::Cycle(vec![
            Color::Rgba(0.0, 0.0, 1.0, 1.0),
            Color::Rgba(0.0, 0.0, 0.0, 1.0),
            Color::Rgba(0.5, 0.0, 0.5, 1.0),
            Color::Rgba(1.0, 1.0, 0.0, 1.0),
            Color::Rgba(0.0, 0.5, 0.0, 1.0)
        ])
    }

    ///
    /// The colour to use for the hatch line at the specified index in a batch
    ///
    pub fn color_for_line(&self, line_index: usize) -> Color {
        match self {
            HatchColoring::Solid(color)     => *color,
            HatchColoring::Cycle(colors)    => {
                if colors.is_empty() {
                    Color::black()
                } else {
                    colors[line_index % colors.len()]
                }
            }
        }
    }
}

impl StrokeStyle {
    ///
    /// Creates the default stroke style (3 pixel open black lines)
    ///
    pub fn new() -> StrokeStyle {
        StrokeStyle {
            thickness:  DEFAULT_THICKNESS,
            coloring:   HatchColoring::Solid(Color::black()),
            closed:     false,
            join:       LineJoin::Round,
            cap:        LineCap::Butt
        }
    }

    ///
    /// Returns this style with a different thickness
    ///
    pub fn with_thickness(mut self, thickness: i32) -> StrokeStyle {
        self.thickness = thickness;
        self
    }

    ///
    /// Returns this style with a different colouring
    ///
    pub fn with_coloring(mut self, coloring: HatchColoring) -> StrokeStyle {
        self.coloring = coloring;
        self
    }

    ///
    /// Returns this style with closed or open hatch lines
    ///
    pub fn with_closed(mut self, closed: bool) -> StrokeStyle {
        self.closed = closed;
        self
    }

    ///
    /// Checks that this style can be used for rendering
    ///
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.thickness <= 0 {
            return Err(ConfigurationError::NonPositiveThickness(self.thickness));
        }

        if let HatchColoring::Cycle(colors) = &self.coloring {
            if colors.is_empty() {
                return Err(ConfigurationError::EmptyPalette);
            }
        }

        Ok(())
    }
}

impl Default for StrokeStyle {
    fn default() -> StrokeStyle {
        StrokeStyle::new()
    }
}
