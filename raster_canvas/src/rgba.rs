use flo_hatch_canvas as canvas;

///
/// Represents an RGBA colour as 8-bit values (not premultiplied)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    /// A pixel with no colour and no coverage
    pub const TRANSPARENT: Rgba8 = Rgba8([0, 0, 0, 0]);

    /// Opaque white
    pub const WHITE: Rgba8 = Rgba8([255, 255, 255, 255]);

    /// Opaque black
    pub const BLACK: Rgba8 = Rgba8([0, 0, 0, 255]);

    ///
    /// The alpha component of this colour
    ///
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }
}

impl Default for Rgba8 {
    fn default() -> Rgba8 {
        Rgba8::TRANSPARENT
    }
}

impl From<canvas::Color> for Rgba8 {
    fn from(color: canvas::Color) -> Rgba8 {
        let (r, g, b, a) = color.to_rgba();

        let to_byte = |component: f32| {
            if component.is_nan() {
                0
            } else {
                (component.max(0.0).min(1.0) * 255.0).round() as u8
            }
        };

        Rgba8([to_byte(r), to_byte(g), to_byte(b), to_byte(a)])
    }
}
