//! Generate a word bank, place a few tiles, and export the snapshot.
//!
//! Run with: `cargo run --example poem_snapshot`

use poemshot::export::{self, ExportOptions};
use poemshot::{words, BoardOffset, PoemRenderer, RendererConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut tiles = words::generate_tile_set();
    println!("word bank: {:?}", tiles.iter().map(|t| &t.word).collect::<Vec<_>>());

    // Pretend the user dragged the first four tiles into a line
    for (i, tile) in tiles.iter_mut().take(4).enumerate() {
        tile.x = 110.0 + i as f64 * 90.0;
        tile.y = 250.0;
    }

    let mut renderer = PoemRenderer::new(RendererConfig::default())?;
    renderer.draw_tiles(&tiles, BoardOffset { x: 40.0, y: 60.0 });
    let snapshot = renderer.snapshot()?;

    let url = export::data_url(&snapshot);
    println!("data url: {}... ({} bytes of PNG)", &url[..40], snapshot.png_data.len());

    let delivery = export::export(&snapshot, &ExportOptions::default()).await?;
    println!("delivered: {:?}", delivery);
    Ok(())
}
