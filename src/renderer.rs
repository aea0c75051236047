//! The single-use export renderer.
//!
//! One `PoemRenderer` is constructed per export request and walks a linear
//! progression: Initialized -> Framed -> TilesDrawn -> snapshot taken. There
//! are no backward transitions and no concurrent drawing on one instance; the
//! pixmap is exclusively owned for the duration of the export.

use tiny_skia::{Pixmap, Transform};

use crate::error::{Error, Result};
use crate::rendering::{layout, paint, raster, Snapshot};
use crate::{BoardOffset, RendererConfig, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initialized,
    Framed,
    TilesDrawn,
}

/// Rasterizes placed tiles plus the decorative frame into a shareable image.
pub struct PoemRenderer {
    config: RendererConfig,
    pixmap: Pixmap,
    transform: Transform,
    phase: Phase,
}

impl PoemRenderer {
    /// Allocate the off-screen surface.
    ///
    /// The surface is `width * dpi` by `height * dpi` physical pixels where
    /// `dpi = min(pixel_ratio, 1.0)`; output is never upsampled beyond 1x.
    /// Allocation failure is fatal to the export: the caller must abort and
    /// notify the user, and no drawing call may follow.
    pub fn new(config: RendererConfig) -> Result<Self> {
        if !config.pixel_ratio.is_finite() || config.pixel_ratio <= 0.0 {
            return Err(Error::Config(format!(
                "pixel ratio must be a positive number, got {}",
                config.pixel_ratio
            )));
        }
        let dpi = config.pixel_ratio.min(1.0);
        let physical_width = (config.width as f32 * dpi).round() as u32;
        let physical_height = (config.height as f32 * dpi).round() as u32;

        let pixmap = Pixmap::new(physical_width, physical_height).ok_or_else(|| {
            Error::Surface(format!(
                "could not allocate a {}x{} drawing surface",
                physical_width, physical_height
            ))
        })?;

        Ok(Self {
            config,
            pixmap,
            transform: Transform::from_scale(dpi, dpi),
            phase: Phase::Initialized,
        })
    }

    /// Draw the decorative frame: accent background, white rounded writing
    /// surface, caption. Always the first drawing step of any export; may be
    /// invoked standalone for a preview. Idempotent in pixel output.
    pub fn draw_frame(&mut self) {
        let commands = paint::frame(self.config.width, self.config.height);
        raster::execute(&mut self.pixmap, self.transform, &commands);
        if self.phase == Phase::Initialized {
            self.phase = Phase::Framed;
        }
    }

    /// Redraw the frame, then draw every placed tile translated by the board
    /// offset. Bank tiles (at the unplaced sentinel) are never rendered.
    pub fn draw_tiles(&mut self, tiles: &[Tile], offset: BoardOffset) {
        self.draw_frame();

        let boxes = layout::layout_tiles(tiles, offset);
        log::debug!("drawing {} placed of {} tiles", boxes.len(), tiles.len());
        let commands = paint::tiles(&boxes);
        raster::execute(&mut self.pixmap, self.transform, &commands);
        self.phase = Phase::TilesDrawn;
    }

    /// Encode the current surface as a PNG snapshot. Requires that at least
    /// the frame has been drawn.
    pub fn snapshot(&self) -> Result<Snapshot> {
        if self.phase == Phase::Initialized {
            return Err(Error::Render(
                "snapshot requested before any frame was drawn".into(),
            ));
        }
        Ok(Snapshot {
            width: self.config.width,
            height: self.config.height,
            png_data: raster::encode(&self.pixmap)?,
        })
    }
}
