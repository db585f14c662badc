use crate::canvas::Canvas;
use rustybuzz::UnicodeBuffer;
use rustybuzz::ttf_parser::{GlyphId, OutlineBuilder};
use zeno::{Command, Fill, Mask, Origin, PathBuilder};

/// Collects one glyph outline as a zeno path in canvas pixels (y down).
struct GlyphPath {
    commands: Vec<Command>,
    scale: f32,
    x: f32,
    baseline: f32,
}

impl GlyphPath {
    fn point(&self, x: f32, y: f32) -> [f32; 2] {
        [self.x + x * self.scale, self.baseline - y * self.scale]
    }
}

impl OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.point(x1, y1), self.point(x, y));
        self.commands.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.point(x1, y1), self.point(x2, y2), self.point(x, y));
        self.commands.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.commands.close();
    }
}

/// Shapes `text` and fills its glyphs in black with the pen starting at
/// (`x`, `baseline`). Returns the pen advance in pixels.
pub(crate) fn draw_text(
    canvas: &mut Canvas,
    face: &rustybuzz::Face<'_>,
    text: &str,
    x: f32,
    baseline: f32,
    size_px: f32,
) -> f32 {
    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    let glyphs = rustybuzz::shape(face, &[], buffer);
    let scale = size_px / face.units_per_em() as f32;

    let mut pen_x = x;
    for (info, pos) in glyphs.glyph_infos().iter().zip(glyphs.glyph_positions()) {
        let mut path = GlyphPath {
            commands: Vec::new(),
            scale,
            x: pen_x + pos.x_offset as f32 * scale,
            baseline: baseline - pos.y_offset as f32 * scale,
        };
        let outlined = face.outline_glyph(GlyphId(info.glyph_id as u16), &mut path).is_some();
        if outlined && !path.commands.is_empty() {
            let (coverage, placement) = Mask::new(&path.commands[..])
                .style(Fill::NonZero)
                .origin(Origin::TopLeft)
                .render();
            canvas.blend_coverage(&coverage, placement);
        }
        pen_x += pos.x_advance as f32 * scale;
    }
    pen_x - x
}
