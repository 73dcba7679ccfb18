///
/// The largest coordinate magnitude that can be drawn (every integer up to this value is exact as an f32)
///
pub const MAX_COORDINATE: i32 = 1 << 24;

///
/// A point on a hatch line, in pixels
///
/// The point `PixelPoint(x, y)` is the centre of the pixel in column `x` and row `y`
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct PixelPoint(pub i32, pub i32);

///
/// A single hatch line: a polyline through an ordered set of points
///
pub type PointSequence = Vec<PixelPoint>;

impl PixelPoint {
    #[inline] pub fn x(&self) -> i32 { self.0 }
    #[inline] pub fn y(&self) -> i32 { self.1 }

    ///
    /// True if this point is within the range of coordinates that can be rendered
    ///
    #[inline]
    pub fn is_drawable(&self) -> bool {
        let in_range = |coord: i32| coord >= -MAX_COORDINATE && coord <= MAX_COORDINATE;

        in_range(self.x()) && in_range(self.y())
    }

    ///
    /// The canvas coordinates for this point
    ///
    #[inline]
    pub fn to_canvas(&self) -> (f32, f32) {
        (self.x() as f32, self.y() as f32)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> PixelPoint {
        PixelPoint(x, y)
    }
}
