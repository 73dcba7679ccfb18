use super::rgba::*;
use super::rasterizer::*;
use super::raster_image::*;

///
/// Blends `source` over `destination` (the usual 'source over' operation on non-premultiplied colours)
///
pub fn blend_over(destination: Rgba8, source: Rgba8) -> Rgba8 {
    let Rgba8(src) = source;
    let Rgba8(dst) = destination;

    match src[3] {
        255 => source,
        0   => destination,

        _   => {
            let src_alpha = (src[3] as f32) / 255.0;
            let dst_alpha = (dst[3] as f32) / 255.0;
            let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

            let component = |idx: usize| {
                let src_c = src[idx] as f32;
                let dst_c = dst[idx] as f32;

                ((src_c * src_alpha + dst_c * dst_alpha * (1.0 - src_alpha)) / out_alpha).round().min(255.0) as u8
            };

            Rgba8([component(0), component(1), component(2), (out_alpha * 255.0).round().min(255.0) as u8])
        }
    }
}

///
/// Composes a solid colour onto an image through a coverage mask
///
/// Every covered pixel is blended exactly once, so parts of a stroke that overlap each other are not darkened
///
pub fn compose(destination: &mut RasterImage, mask: &Mask, color: Rgba8) {
    if color.alpha() == 0 {
        return;
    }

    for (x, y) in mask.covered_pixels() {
        if let Some(previous) = destination.get_pixel(x, y) {
            destination.set_pixel(x, y, blend_over(previous, color));
        }
    }
}
