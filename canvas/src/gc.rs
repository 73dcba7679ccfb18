use super::draw::*;
use super::color::*;

///
/// A graphics context provides the basic set of graphics actions that can be performed
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn line_join(&mut self, join: LineJoin);
    fn line_cap(&mut self, cap: LineCap);
    fn stroke_color(&mut self, col: Color);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath             => self.new_path(),
            Move(x, y)          => self.move_to(x, y),
            Line(x, y)          => self.line_to(x, y),
            ClosePath           => self.close_path(),
            Stroke              => self.stroke(),
            LineWidth(width)    => self.line_width(width),
            LineJoin(join)      => self.line_join(join),
            LineCap(cap)        => self.line_cap(cap),
            StrokeColor(col)    => self.stroke_color(col)
        }
    }

    fn draw_list<'a>(&'a mut self, drawing: Box<dyn 'a+Iterator<Item=Draw>>) {
        for d in drawing {
            self.draw(d);
        }
    }
}

///
/// GraphicsPrimitives adds new primitives that can be built directly from a graphics context
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Starts a new path made up of straight lines through the specified points
    ///
    /// The path is not stroked: call `stroke()` afterwards to generate pixels
    ///
    fn polyline<Points: IntoIterator<Item=(f32, f32)>>(&mut self, points: Points, closed: bool) {
        for d in draw_polyline(points, closed) {
            self.draw(d);
        }
    }
}

///
/// Returns the drawing commands for a path through a set of points
///
pub fn draw_polyline<Points: IntoIterator<Item=(f32, f32)>>(points: Points, closed: bool) -> Vec<Draw> {
    use self::Draw::*;

    let mut drawing     = vec![NewPath];
    let mut num_points  = 0;

    for (x, y) in points {
        if num_points == 0 {
            drawing.push(Move(x, y));
        } else {
            drawing.push(Line(x, y));
        }

        num_points += 1;
    }

    // A path needs at least one segment before it can be closed
    if closed && num_points >= 2 {
        drawing.push(ClosePath);
    }

    drawing
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn new_path(&mut self)                    { self.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)     { self.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)     { self.push(Draw::Line(x, y)); }
    #[inline] fn close_path(&mut self)                  { self.push(Draw::ClosePath); }
    #[inline] fn stroke(&mut self)                      { self.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)      { self.push(Draw::LineWidth(width)); }
    #[inline] fn line_join(&mut self, join: LineJoin)   { self.push(Draw::LineJoin(join)); }
    #[inline] fn line_cap(&mut self, cap: LineCap)      { self.push(Draw::LineCap(cap)); }
    #[inline] fn stroke_color(&mut self, col: Color)    { self.push(Draw::StrokeColor(col)); }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }

    #[inline]
    fn draw_list<'b>(&'b mut self, drawing: Box<dyn 'b+Iterator<Item=Draw>>) {
        self.extend(drawing)
    }
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsPrimitives for Vec<Draw> {

}
