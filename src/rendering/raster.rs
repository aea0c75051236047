//! Executes paint commands against a tiny-skia pixmap and encodes PNG output.

use tiny_skia::{
    FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::{Error, Result};
use crate::rendering::font;
use crate::rendering::paint::{PaintCommand, RectPx};

fn solid(rgba: (u8, u8, u8, u8), anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.0, rgba.1, rgba.2, rgba.3);
    paint.anti_alias = anti_alias;
    paint
}

fn push_round_rect(pb: &mut PathBuilder, rect: RectPx, radius: f32) {
    let RectPx {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    if !(w > 0.0 && h > 0.0) {
        return;
    }
    let r = radius.clamp(0.0, (w / 2.0).min(h / 2.0));
    // Circle-approximation constant for cubic corner arcs
    const KAPPA: f32 = 0.552_284_8;
    let k = r * KAPPA;

    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
}

fn round_rect_path(rect: RectPx, radius: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    push_round_rect(&mut pb, rect, radius);
    pb.finish()
}

fn fill_rect(pixmap: &mut Pixmap, rect: RectPx, paint: &Paint, transform: Transform) {
    if let Some(r) = Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
        pixmap.fill_rect(r, paint, transform, None);
    }
}

fn draw_text(
    pixmap: &mut Pixmap,
    x: f32,
    baseline: f32,
    px: f32,
    text: &str,
    rgba: (u8, u8, u8, u8),
    transform: Transform,
) {
    let paint = solid(rgba, false);
    let advance = font::advance(px);
    let dot = advance / 8.0;
    let top = baseline - font::ascent(px);

    let mut pen_x = x;
    for ch in text.chars() {
        let rows = font::glyph_rows(ch);
        for (row_idx, row) in rows.iter().enumerate() {
            for col in 0..8u8 {
                if row & (1 << col) != 0 {
                    let cell = RectPx {
                        x: pen_x + col as f32 * dot,
                        y: top + row_idx as f32 * dot,
                        width: dot,
                        height: dot,
                    };
                    fill_rect(pixmap, cell, &paint, transform);
                }
            }
        }
        pen_x += advance;
    }
}

/// Execute a display list against the pixmap. Degenerate geometry (zero or
/// negative extents) is skipped rather than treated as an error.
pub fn execute(pixmap: &mut Pixmap, transform: Transform, commands: &[PaintCommand]) {
    for command in commands {
        match command {
            PaintCommand::FillRect { rect, rgba } => {
                let paint = solid(*rgba, false);
                fill_rect(pixmap, *rect, &paint, transform);
            }
            PaintCommand::FillRoundRect { rect, radius, rgba } => {
                if let Some(path) = round_rect_path(*rect, *radius) {
                    let paint = solid(*rgba, true);
                    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                }
            }
            PaintCommand::StrokeRoundRects {
                rects,
                radius,
                rgba,
            } => {
                let mut pb = PathBuilder::new();
                for rect in rects {
                    push_round_rect(&mut pb, *rect, *radius);
                }
                if let Some(path) = pb.finish() {
                    let paint = solid(*rgba, true);
                    let stroke = Stroke {
                        width: 1.0,
                        ..Stroke::default()
                    };
                    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
                }
            }
            PaintCommand::Text {
                x,
                y,
                px,
                text,
                rgba,
            } => {
                draw_text(pixmap, *x, *y, *px, text, *rgba, transform);
            }
        }
    }
}

/// Encode the pixmap as PNG bytes.
pub fn encode(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap
        .encode_png()
        .map_err(|e| Error::Encode(e.to_string()))
}
