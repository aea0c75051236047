use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use poemshot::export::{self, ExportOptions, EXPORT_FILENAME};
use poemshot::words;
use poemshot::{BoardOffset, PoemRenderer, RendererConfig, TileSet};

#[derive(Parser)]
#[command(name = "poemshot", version, about = "Magnet-poetry board snapshot renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh word bank as tile-set JSON
    Generate {
        /// Seed for reproducible banks
        #[arg(long)]
        seed: Option<u64>,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Rasterize a tile set straight to a PNG file (no share attempt)
    Render {
        /// Tile-set JSON; omit to render the empty frame preview
        #[arg(long)]
        tiles: Option<PathBuf>,
        #[arg(long, default_value_t = 0.0)]
        offset_x: f64,
        #[arg(long, default_value_t = 0.0)]
        offset_y: f64,
        #[arg(long, default_value_t = 500)]
        width: u32,
        #[arg(long, default_value_t = 500)]
        height: u32,
        #[arg(long, default_value = EXPORT_FILENAME)]
        out: PathBuf,
    },
    /// Render and deliver: share endpoint first, download fallback
    Export {
        /// Tile-set JSON
        #[arg(long)]
        tiles: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        offset_x: f64,
        #[arg(long, default_value_t = 0.0)]
        offset_y: f64,
        #[arg(long, default_value_t = 500)]
        width: u32,
        #[arg(long, default_value_t = 500)]
        height: u32,
        /// Share endpoint URL; omit when the platform has no share capability
        #[arg(long)]
        share_url: Option<String>,
        /// Directory the download fallback writes into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn load_tiles(path: &PathBuf) -> anyhow::Result<TileSet> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing tile set {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { seed, out } => {
            let tiles = match seed {
                Some(seed) => words::generate_tile_set_seeded(seed),
                None => words::generate_tile_set(),
            };
            let json = serde_json::to_string_pretty(&tiles)?;
            match out {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("wrote {} tiles to {}", tiles.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Command::Render {
            tiles,
            offset_x,
            offset_y,
            width,
            height,
            out,
        } => {
            let config = RendererConfig {
                width,
                height,
                ..Default::default()
            };
            let mut renderer = PoemRenderer::new(config)?;
            match tiles {
                Some(path) => {
                    let tile_set = load_tiles(&path)?;
                    renderer.draw_tiles(
                        &tile_set,
                        BoardOffset {
                            x: offset_x,
                            y: offset_y,
                        },
                    );
                }
                None => renderer.draw_frame(),
            }
            let snapshot = renderer.snapshot()?;
            fs::write(&out, &snapshot.png_data)
                .with_context(|| format!("writing {}", out.display()))?;
            eprintln!("wrote {}", out.display());
        }

        Command::Export {
            tiles,
            offset_x,
            offset_y,
            width,
            height,
            share_url,
            output_dir,
        } => {
            let tile_set = load_tiles(&tiles)?;
            let config = RendererConfig {
                width,
                height,
                ..Default::default()
            };
            let mut renderer = PoemRenderer::new(config)?;
            renderer.draw_tiles(
                &tile_set,
                BoardOffset {
                    x: offset_x,
                    y: offset_y,
                },
            );
            let snapshot = renderer.snapshot()?;

            let opts = ExportOptions {
                share_url,
                output_dir,
                ..Default::default()
            };
            match export::export(&snapshot, &opts).await? {
                export::Delivery::Shared => eprintln!("shared snapshot"),
                export::Delivery::Downloaded(path) => eprintln!("saved {}", path.display()),
            }
        }
    }

    Ok(())
}
