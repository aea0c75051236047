//! Paint command set and display-list builders for the framed snapshot.

use crate::rendering::layout::TileBox;

/// Accent background behind the frame
pub const ACCENT: (u8, u8, u8, u8) = (0x64, 0x6c, 0xff, 0xff);
/// The white writing surface
pub const SURFACE: (u8, u8, u8, u8) = (0xff, 0xff, 0xff, 0xff);
/// Tile text ink
pub const INK: (u8, u8, u8, u8) = (0x00, 0x00, 0x00, 0xff);
/// Light-gray tile outlines
pub const OUTLINE: (u8, u8, u8, u8) = (0xab, 0xb4, 0xc0, 0xff);

/// Frame inset on every side
pub const FRAME_MARGIN: f32 = 50.0;
/// Corner radius of the writing surface
pub const FRAME_RADIUS: f32 = 20.0;
/// Corner radius of tile outlines
pub const OUTLINE_RADIUS: f32 = 5.0;

pub const CAPTION: &str = "MAGNET POEM";
pub const CAPTION_PX: f32 = 71.0;
pub const CAPTION_X: f32 = 10.0;
pub const CAPTION_BASELINE: f32 = 50.0;

/// Baseline sits 15px below the tile box top
pub const TILE_BASELINE_OFFSET: f32 = 15.0;

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: RectPx,
        rgba: (u8, u8, u8, u8),
    },
    FillRoundRect {
        rect: RectPx,
        radius: f32,
        rgba: (u8, u8, u8, u8),
    },
    /// All rects are accumulated into one path and stroked in a single pass.
    StrokeRoundRects {
        rects: Vec<RectPx>,
        radius: f32,
        rgba: (u8, u8, u8, u8),
    },
    /// `y` is the text baseline.
    Text {
        x: f32,
        y: f32,
        px: f32,
        text: String,
        rgba: (u8, u8, u8, u8),
    },
}

/// Display list for the decorative frame: accent fill, white rounded writing
/// surface inset by the frame margin, and the caption near the top-left.
pub fn frame(width: u32, height: u32) -> Vec<PaintCommand> {
    vec![
        PaintCommand::FillRect {
            rect: RectPx {
                x: 0.0,
                y: 0.0,
                width: width as f32,
                height: height as f32,
            },
            rgba: ACCENT,
        },
        PaintCommand::FillRoundRect {
            rect: RectPx {
                x: FRAME_MARGIN,
                y: FRAME_MARGIN,
                width: width as f32 - FRAME_MARGIN * 2.0,
                height: height as f32 - FRAME_MARGIN * 2.0,
            },
            radius: FRAME_RADIUS,
            rgba: SURFACE,
        },
        PaintCommand::Text {
            x: CAPTION_X,
            y: CAPTION_BASELINE,
            px: CAPTION_PX,
            text: CAPTION.to_string(),
            rgba: SURFACE,
        },
    ]
}

/// Display list for the placed tiles: one text command per tile in z-order,
/// then every outline collected into a single stroke pass.
pub fn tiles(boxes: &[TileBox]) -> Vec<PaintCommand> {
    let mut commands = Vec::with_capacity(boxes.len() + 1);

    for b in boxes {
        commands.push(PaintCommand::Text {
            x: b.x,
            y: b.y + TILE_BASELINE_OFFSET,
            px: crate::rendering::layout::TILE_FONT_PX,
            text: b.text.clone(),
            rgba: INK,
        });
    }

    // Outline inset 10 left / 7 up, widened by 20, same height
    let outlines: Vec<RectPx> = boxes
        .iter()
        .map(|b| RectPx {
            x: b.x - 10.0,
            y: b.y - 7.0,
            width: b.width + 20.0,
            height: b.height,
        })
        .collect();
    if !outlines.is_empty() {
        commands.push(PaintCommand::StrokeRoundRects {
            rects: outlines,
            radius: OUTLINE_RADIUS,
            rgba: OUTLINE,
        });
    }

    commands
}
