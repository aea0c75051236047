use poemshot::{BoardOffset, PoemRenderer, RendererConfig, Tile};

const ACCENT: [u8; 4] = [0x64, 0x6c, 0xff, 0xff];
const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const INK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

fn decode(png_data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(png_data);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

#[test]
fn frame_has_accent_border_white_surface_and_caption() {
    let mut renderer = PoemRenderer::new(RendererConfig::default()).expect("create renderer");
    renderer.draw_frame();
    let snapshot = renderer.snapshot().expect("snapshot");

    assert!(snapshot.png_data.len() > 100, "PNG data seems too small");
    assert_eq!(&snapshot.png_data[0..8], b"\x89PNG\r\n\x1a\n");

    let (width, height, buf) = decode(&snapshot.png_data);
    assert_eq!(width, 500);
    assert_eq!(height, 500);

    // Corners sit outside the rounded writing surface
    assert_eq!(pixel(&buf, width, 0, 0), ACCENT);
    assert_eq!(pixel(&buf, width, 499, 499), ACCENT);
    // Center of the writing surface is white
    assert_eq!(pixel(&buf, width, 250, 250), WHITE);

    // The caption paints white above the writing surface (y < 50), where the
    // background would otherwise be pure accent
    let mut caption_ink = false;
    for y in 0..45u32 {
        for x in 10..490u32 {
            if pixel(&buf, width, x, y) == WHITE {
                caption_ink = true;
                break;
            }
        }
    }
    assert!(caption_ink, "expected caption pixels above the frame inset");
}

#[test]
fn placed_tile_renders_ink_and_outline() {
    let tiles = vec![
        Tile::placed("dream", 150.0, 200.0),
        Tile::unplaced("blue"),
    ];
    let mut renderer = PoemRenderer::new(RendererConfig::default()).expect("create renderer");
    renderer.draw_tiles(&tiles, BoardOffset { x: 50.0, y: 60.0 });
    let snapshot = renderer.snapshot().expect("snapshot");

    let (width, _, buf) = decode(&snapshot.png_data);

    // "dream" lands at image (160, 195) with its baseline at 210; glyph ink
    // must show up inside the tile box
    let mut found_ink = false;
    for y in 195..229u32 {
        for x in 160..206u32 {
            if pixel(&buf, width, x, y) == INK {
                found_ink = true;
                break;
            }
        }
    }
    assert!(found_ink, "expected black glyph pixels inside the tile box");

    // The outline stroke uses the light gray; scan the outline's top edge band
    let mut found_outline = false;
    for y in 186..191u32 {
        for x in 150..216u32 {
            let [r, g, b, a] = pixel(&buf, width, x, y);
            // Anti-aliased stroke blends toward white; accept near-outline tones
            if a == 255 && r < 0xf0 && g < 0xf0 && b >= g && b < 0xff && r != 0 {
                found_outline = true;
                break;
            }
        }
    }
    assert!(found_outline, "expected outline pixels around the tile box");
}

#[test]
fn unplaced_only_set_matches_bare_frame() {
    let mut framed = PoemRenderer::new(RendererConfig::default()).expect("create renderer");
    framed.draw_frame();
    let frame_only = framed.snapshot().expect("snapshot");

    let bank = vec![Tile::unplaced("dream"), Tile::unplaced("blue")];
    let mut with_bank = PoemRenderer::new(RendererConfig::default()).expect("create renderer");
    with_bank.draw_tiles(&bank, BoardOffset { x: 50.0, y: 60.0 });
    let bank_shot = with_bank.snapshot().expect("snapshot");

    assert_eq!(frame_only.png_data, bank_shot.png_data);
}

#[test]
fn downscaled_surface_keeps_logical_dimensions_in_snapshot() {
    let mut renderer = PoemRenderer::new(RendererConfig {
        width: 500,
        height: 500,
        pixel_ratio: 0.5,
    })
    .expect("create renderer");
    renderer.draw_frame();
    let snapshot = renderer.snapshot().expect("snapshot");

    assert_eq!(snapshot.width, 500);
    let (width, height, _) = decode(&snapshot.png_data);
    assert_eq!(width, 250);
    assert_eq!(height, 250);
}
