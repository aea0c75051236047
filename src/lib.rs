//! Poemshot
//!
//! A magnet-poetry snapshot renderer for Rust: takes the word tiles a user has
//! dragged onto a board, rasterizes them onto a framed, captioned surface, and
//! delivers the resulting PNG via a share endpoint or a plain file download.
//!
//! # Overview
//!
//! - **Word-set generation**: a shuffled bank of dictionary words,
//!   prepositions, and punctuation tiles, all starting unplaced
//! - **Export rendering**: placed tiles only, translated from board
//!   coordinates into image coordinates and drawn inside the frame
//! - **Delivery**: share first, unconditional download fallback
//!
//! # Example
//!
//! ```no_run
//! use poemshot::{BoardOffset, PoemRenderer, RendererConfig, Tile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tiles = vec![
//!     Tile::placed("dream", 150.0, 200.0),
//!     Tile::unplaced("blue"),
//! ];
//!
//! let mut renderer = PoemRenderer::new(RendererConfig::default())?;
//! renderer.draw_tiles(&tiles, BoardOffset { x: 50.0, y: 60.0 });
//! let snapshot = renderer.snapshot()?;
//! std::fs::write("magnet-poem.png", &snapshot.png_data)?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod export;
pub mod renderer;
pub mod rendering;
pub mod words;

pub use export::{Delivery, ExportOptions};
pub use renderer::PoemRenderer;
pub use rendering::Snapshot;
pub use words::generate_tile_set;

/// One draggable word or punctuation unit with a board position.
///
/// `(0, 0)` is the unplaced sentinel: a tile still resting in the word bank.
/// A tile dropped exactly at the board origin is indistinguishable from an
/// unplaced one; that ambiguity is inherited from the board model and kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// The word or punctuation mark on the tile (immutable once generated)
    pub word: String,
    /// Horizontal board coordinate in UI pixels
    #[serde(default)]
    pub x: f64,
    /// Vertical board coordinate in UI pixels
    #[serde(default)]
    pub y: f64,
}

impl Tile {
    /// A tile resting in the word bank (at the unplaced sentinel).
    pub fn unplaced(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// A tile dropped at the given board coordinates.
    pub fn placed(word: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            word: word.into(),
            x,
            y,
        }
    }

    /// Whether this tile has been dragged out of the word bank.
    pub fn is_placed(&self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }
}

/// Ordered collection of tiles; order is draw/z-order only.
pub type TileSet = Vec<Tile>;

/// Screen-space pixel offset of the interactive drop target, recomputed fresh
/// on every export call by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardOffset {
    pub x: f64,
    pub y: f64,
}

/// Configuration for the export renderer
///
/// `pixel_ratio` is the device pixel density reported by the platform. It is
/// capped at 1.0 when the surface is allocated so high-density displays never
/// inflate the output file.
///
/// # Examples
///
/// ```
/// let cfg = poemshot::RendererConfig::default();
/// assert_eq!(cfg.width, 500);
/// assert_eq!(cfg.height, 500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Logical surface width in pixels
    pub width: u32,
    /// Logical surface height in pixels
    pub height: u32,
    /// Device pixel ratio (capped at 1.0 at allocation time)
    pub pixel_ratio: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            pixel_ratio: 1.0,
        }
    }
}
