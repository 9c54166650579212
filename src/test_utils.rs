/// Fixture helpers shared by the test modules

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::state::data::{AssetKind, ASSET_FILES};

/// Write a small solid-colour PNG
pub fn write_png(path: &Path) {
    let img = RgbaImage::from_pixel(4, 4, Rgba([200, 30, 30, 255]));
    img.save(path).expect("write png fixture");
}

/// Write a GIF with `frame_count` differently coloured frames, 80 ms each
pub fn write_gif(path: &Path, frame_count: u8) {
    let file = std::fs::File::create(path).expect("create gif fixture");
    let mut encoder = GifEncoder::new(file);

    let frames = (0..frame_count).map(|i| {
        let shade = i.wrapping_mul(60);
        Frame::from_parts(
            RgbaImage::from_pixel(4, 4, Rgba([shade, 255 - shade, 0, 255])),
            0,
            0,
            Delay::from_numer_denom_ms(80, 1),
        )
    });
    encoder.encode_frames(frames).expect("encode gif fixture");
}

/// Populate `dir` with the full asset set, leaving out the indices in `missing`
pub fn write_assets(dir: &Path, missing: &[usize]) -> Vec<PathBuf> {
    ASSET_FILES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let path = dir.join(name);
            if !missing.contains(&index) {
                match AssetKind::from_path(&path) {
                    AssetKind::Static => write_png(&path),
                    AssetKind::Animated => write_gif(&path, 2),
                }
            }
            path
        })
        .collect()
}
