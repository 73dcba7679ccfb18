use super::point::*;
use super::stroke_style::*;

use flo_hatch_canvas::*;

///
/// How many times each hatch line is stroked
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Each hatch line is stroked exactly once
    Single,

    /// Each hatch line is stroked once for every line in the batch (N×N strokes for N lines)
    ///
    /// This matches the output of older hatching tools that repeated the stroke in a nested loop. It only
    /// makes a visible difference when the stroke colour is translucent. The rendering cost grows with the
    /// square of the batch size, so large batches are much slower to draw in this mode.
    Compatibility
}

impl Default for RepeatMode {
    fn default() -> RepeatMode {
        RepeatMode::Single
    }
}

///
/// Sends the instructions that draw a batch of hatch lines to a graphics context
///
/// Instructions are generated as the lines are read, so the context sees every stroke without the
/// whole drawing being held in memory (compatibility mode generates N×N strokes for N lines). Returns
/// the indexes of the lines that were skipped because they contain coordinates that cannot be drawn.
/// Lines with fewer than two points leave no mark and so generate no instructions, but are not
/// considered to be errors.
///
pub fn draw_hatch_line_batch<Gc: GraphicsPrimitives+?Sized>(gc: &mut Gc, lines: &[PointSequence], style: &StrokeStyle, mode: RepeatMode) -> Vec<usize> {
    let mut skipped             = vec![];
    let mut current_color       = None;
    let mut settings_sent       = false;

    let repeat_count            = match mode {
        RepeatMode::Single          => 1,
        RepeatMode::Compatibility   => lines.len()
    };

    for (line_index, line) in lines.iter().enumerate() {
        if !line.iter().all(|point| point.is_drawable()) {
            skipped.push(line_index);
            continue;
        }

        if line.len() < 2 {
            continue;
        }

        // The line settings only need to be set once for the whole batch
        if !settings_sent {
            gc.line_width(style.thickness as f32);
            gc.line_join(style.join);
            gc.line_cap(style.cap);

            settings_sent = true;
        }

        let color = style.coloring.color_for_line(line_index);
        if current_color != Some(color) {
            gc.stroke_color(color);
            current_color = Some(color);
        }

        gc.polyline(line.iter().map(|point| point.to_canvas()), style.closed);
        for _ in 0..repeat_count {
            gc.stroke();
        }
    }

    skipped
}

///
/// Generates the canvas instructions that draw a batch of hatch lines
///
/// Returns the drawing along with the indexes of the lines that were skipped (see `draw_hatch_line_batch`)
///
pub fn hatch_line_drawing(lines: &[PointSequence], style: &StrokeStyle, mode: RepeatMode) -> (Vec<Draw>, Vec<usize>) {
    let mut drawing: Vec<Draw>  = vec![];
    let skipped                 = draw_hatch_line_batch(&mut drawing, lines, style, mode);

    (drawing, skipped)
}
