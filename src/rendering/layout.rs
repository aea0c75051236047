//! Tile layout: filtering out bank tiles and translating board coordinates
//! into image coordinates.

use crate::rendering::font;
use crate::{BoardOffset, Tile};

/// Horizontal correction applied to the board offset: the 50px frame margin
/// plus 10px of visual padding so tile text lands inside the writing surface.
pub const FRAME_PAD_X: f64 = 60.0;
/// Vertical correction: frame margin plus 5px of visual padding.
pub const FRAME_PAD_Y: f64 = 55.0;

/// Export font size for tile text
pub const TILE_FONT_PX: f32 = 15.0;
/// Fixed tile box height, regardless of actual glyph height
pub const TILE_BOX_HEIGHT: f32 = 34.0;

/// A placed tile positioned and measured in image space.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBox {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Filter the tile set down to placed tiles and translate each into image
/// space: `image = ui - (offset - pad)`. Input order (the z-order) is kept;
/// overlapping tiles are both laid out, with no collision avoidance.
pub fn layout_tiles(tiles: &[Tile], offset: BoardOffset) -> Vec<TileBox> {
    tiles
        .iter()
        .filter(|tile| tile.is_placed())
        .map(|tile| TileBox {
            text: tile.word.clone(),
            x: (tile.x - (offset.x - FRAME_PAD_X)) as f32,
            y: (tile.y - (offset.y - FRAME_PAD_Y)) as f32,
            width: font::measure(&tile.word, TILE_FONT_PX),
            height: TILE_BOX_HEIGHT,
        })
        .collect()
}
