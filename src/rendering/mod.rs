//! Rendering pipeline: layout -> paint commands -> raster -> PNG.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

/// An encoded snapshot of the board, ready for delivery.
///
/// `width`/`height` are the logical dimensions; the PNG itself may be smaller
/// when the renderer was configured with a pixel ratio below 1.0.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Snapshot {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            png_data: Vec::new(),
        }
    }
}
