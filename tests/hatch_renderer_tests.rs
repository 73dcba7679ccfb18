use flo_hatching::*;

fn init_logging() {
    let _ = env_logger::try_init();
}

fn line(points: &[(i32, i32)]) -> PointSequence {
    points.iter().map(|point| PixelPoint::from(*point)).collect()
}

#[test]
fn new_renderer_has_empty_image_and_default_thickness() {
    let renderer = HatchRenderer::new();

    assert!(renderer.image().is_empty());
    assert!(renderer.thickness() == 3);
    assert!(renderer.repeat_mode() == RepeatMode::Single);
    assert!(renderer.style() == &StrokeStyle::default());
}

#[test]
fn draws_vertical_hatch_line() {
    init_logging();

    let mut renderer = HatchRenderer::with_size(100, 100);
    renderer.draw_hatch_lines(&[line(&[(10, 10), (10, 50)])]).unwrap();

    let image = renderer.image();
    for y in 11..50 {
        for x in 9..=11 {
            assert!(image.get_pixel(x, y) == Some(Rgba8::BLACK));
        }

        assert!(image.get_pixel(8, y) == Some(Rgba8::TRANSPARENT));
        assert!(image.get_pixel(12, y) == Some(Rgba8::TRANSPARENT));
    }

    // Everything away from the line is unchanged
    for y in 0..100 {
        for x in 0..100 {
            let near_line = x >= 8 && x <= 12 && y >= 9 && y <= 51;

            if !near_line {
                assert!(image.get_pixel(x, y) == Some(Rgba8::TRANSPARENT));
            }
        }
    }
}

#[test]
fn empty_batch_leaves_image_unchanged() {
    let mut renderer    = HatchRenderer::with_image(RasterImage::filled(30, 30, Rgba8::WHITE));
    let before          = renderer.image().clone();

    assert!(renderer.draw_hatch_lines(&[]) == Ok(()));
    assert!(renderer.image() == &before);
    assert!(renderer.strokes_rendered() == 0);
}

#[test]
fn single_point_leaves_no_mark() {
    let mut renderer    = HatchRenderer::with_size(20, 20);

    assert!(renderer.draw_hatch_lines(&[line(&[(5, 5)])]) == Ok(()));
    assert!(renderer.image() == &RasterImage::new(20, 20));
}

#[test]
fn empty_sequence_leaves_no_mark() {
    let mut renderer    = HatchRenderer::with_size(20, 20);

    assert!(renderer.draw_hatch_lines(&[vec![], vec![]]) == Ok(()));
    assert!(renderer.image() == &RasterImage::new(20, 20));
}

#[test]
fn drawing_on_empty_image_succeeds() {
    let mut renderer = HatchRenderer::new();

    assert!(renderer.draw_hatch_lines(&[line(&[(0, 0), (10, 10)]), line(&[(3, 4), (8, 1)])]) == Ok(()));
    assert!(renderer.image().is_empty());
}

#[test]
fn zero_thickness_is_rejected() {
    let mut renderer = HatchRenderer::with_size(20, 20);

    assert!(renderer.set_thickness(0) == Err(HatchError::InvalidConfiguration(ConfigurationError::NonPositiveThickness(0))));
    assert!(renderer.thickness() == 3);

    // Nothing was drawn by the failed configuration
    assert!(renderer.image() == &RasterImage::new(20, 20));
}

#[test]
fn negative_thickness_keeps_previous_value() {
    let mut renderer = HatchRenderer::with_size(20, 20);

    assert!(renderer.set_thickness(5) == Ok(()));
    assert!(renderer.set_thickness(-2).is_err());
    assert!(renderer.thickness() == 5);
}

#[test]
fn invalid_style_is_rejected_at_construction() {
    let style = StrokeStyle::new().with_thickness(0);

    assert!(HatchRenderer::with_style(RasterImage::new(10, 10), style).is_err());
}

#[test]
fn thicker_lines_cover_more_pixels() {
    let count_black = |thickness: i32| {
        let mut renderer = HatchRenderer::with_size(60, 60);
        renderer.set_thickness(thickness).unwrap();
        renderer.draw_hatch_lines(&[line(&[(30, 5), (30, 55)])]).unwrap();

        renderer.image().pixels().iter().filter(|pixel| **pixel == Rgba8::BLACK).count()
    };

    let thin    = count_black(1);
    let thick   = count_black(7);

    assert!(thin > 0);
    assert!(thick > thin * 5);
}

#[test]
fn out_of_range_line_is_skipped_and_reported() {
    init_logging();

    let mut renderer    = HatchRenderer::with_size(50, 50);
    let lines           = vec![
        line(&[(5, 10), (45, 10)]),
        line(&[(5, 20), (i32::MAX, 20)]),
        line(&[(5, 30), (45, 30)])
    ];

    let result = renderer.draw_hatch_lines(&lines);

    assert!(result == Err(HatchError::InvalidGeometry(vec![1])));

    // The other lines were still drawn
    assert!(renderer.image().get_pixel(25, 10) == Some(Rgba8::BLACK));
    assert!(renderer.image().get_pixel(25, 20) == Some(Rgba8::TRANSPARENT));
    assert!(renderer.image().get_pixel(25, 30) == Some(Rgba8::BLACK));
}

#[test]
fn points_outside_the_image_are_clipped() {
    let mut renderer = HatchRenderer::with_size(40, 40);

    assert!(renderer.draw_hatch_lines(&[line(&[(-100, 20), (500, 20)])]) == Ok(()));

    for x in 0..40 {
        assert!(renderer.image().get_pixel(x, 20) == Some(Rgba8::BLACK));
    }
}

#[test]
fn repeated_batch_is_stable_with_opaque_colour() {
    let lines = vec![line(&[(5, 5), (35, 35)]), line(&[(5, 35), (35, 5)])];

    let mut renderer = HatchRenderer::with_image(RasterImage::filled(40, 40, Rgba8::WHITE));
    renderer.draw_hatch_lines(&lines).unwrap();
    let once = renderer.image().clone();

    renderer.draw_hatch_lines(&lines).unwrap();

    assert!(renderer.image() == &once);
}

#[test]
fn compatibility_mode_matches_single_mode_with_opaque_colour() {
    let lines = vec![line(&[(5, 10), (35, 10)]), line(&[(5, 20), (35, 20)]), line(&[(5, 30), (35, 30)])];

    let mut single = HatchRenderer::with_image(RasterImage::filled(40, 40, Rgba8::WHITE));
    single.draw_hatch_lines(&lines).unwrap();

    let mut compatible = HatchRenderer::with_image(RasterImage::filled(40, 40, Rgba8::WHITE));
    compatible.set_repeat_mode(RepeatMode::Compatibility);
    compatible.draw_hatch_lines(&lines).unwrap();

    assert!(single.image() == compatible.image());
    assert!(single.strokes_rendered() == 3);
    assert!(compatible.strokes_rendered() == 9);
}

#[test]
fn compatibility_mode_darkens_translucent_lines() {
    let lines           = vec![line(&[(5, 10), (35, 10)]), line(&[(5, 30), (35, 30)])];
    let translucent     = StrokeStyle::new().with_coloring(HatchColoring::Solid(Color::black().with_alpha(0.25)));

    let mut single      = HatchRenderer::with_style(RasterImage::filled(40, 40, Rgba8::WHITE), translucent.clone()).unwrap();
    single.draw_hatch_lines(&lines).unwrap();

    let mut compatible  = HatchRenderer::with_style(RasterImage::filled(40, 40, Rgba8::WHITE), translucent).unwrap();
    compatible.set_repeat_mode(RepeatMode::Compatibility);
    compatible.draw_hatch_lines(&lines).unwrap();

    let single_pixel        = single.image().get_pixel(20, 10).unwrap();
    let compatible_pixel    = compatible.image().get_pixel(20, 10).unwrap();

    assert!(single_pixel != Rgba8::WHITE);
    assert!(compatible_pixel.0[0] < single_pixel.0[0]);
}

#[test]
fn palette_colours_each_line_in_turn() {
    let style           = StrokeStyle::new().with_coloring(HatchColoring::Cycle(vec![
        Color::Rgba(1.0, 0.0, 0.0, 1.0),
        Color::Rgba(0.0, 0.0, 1.0, 1.0)
    ]));
    let mut renderer    = HatchRenderer::with_style(RasterImage::new(40, 40), style).unwrap();

    renderer.draw_hatch_lines(&[
        line(&[(5, 5), (35, 5)]),
        line(&[(5, 15), (35, 15)]),
        line(&[(5, 25), (35, 25)])
    ]).unwrap();

    let red     = Rgba8([255, 0, 0, 255]);
    let blue    = Rgba8([0, 0, 255, 255]);

    assert!(renderer.image().get_pixel(20, 5) == Some(red));
    assert!(renderer.image().get_pixel(20, 15) == Some(blue));
    assert!(renderer.image().get_pixel(20, 25) == Some(red));
}

#[test]
fn closed_style_joins_last_point_to_first() {
    let mut renderer = HatchRenderer::with_size(50, 50);
    renderer.set_style(StrokeStyle::new().with_thickness(1).with_closed(true)).unwrap();

    renderer.draw_hatch_lines(&[line(&[(10, 10), (40, 10), (40, 40)])]).unwrap();

    // The closing segment runs from (40, 40) back to (10, 10)
    assert!(renderer.image().get_pixel(25, 25) == Some(Rgba8::BLACK));
}

#[test]
fn into_image_returns_drawing() {
    let mut renderer = HatchRenderer::with_size(20, 20);
    renderer.draw_hatch_lines(&[line(&[(2, 10), (18, 10)])]).unwrap();

    let image = renderer.into_image();

    assert!(image.width() == 20 && image.height() == 20);
    assert!(image.get_pixel(10, 10) == Some(Rgba8::BLACK));
    assert!(image.to_rgba_bytes().len() == 20 * 20 * 4);
}
