/// Shared data structures for the application state
///
/// The asset catalog is fixed: seven entries, ordered from the "UX" end of
/// the slider to the "UI" end.

use std::path::{Path, PathBuf};

/// File names of the view assets, in slider order
pub const ASSET_FILES: [&str; 7] = [
    "1.png", "2.png", "3.png", "4.png", "5.gif", "6.gif", "7.gif",
];

/// Number of view assets (slider range is `0..ASSET_COUNT`)
pub const ASSET_COUNT: usize = ASSET_FILES.len();

/// How an asset is decoded and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Single still frame
    Static,
    /// Looping multi-frame animation (GIF)
    Animated,
}

impl AssetKind {
    /// Classify by file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("gif") => AssetKind::Animated,
            _ => AssetKind::Static,
        }
    }
}

/// Represents a single asset in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    /// Slider position (0..=6)
    pub index: usize,
    /// Location of the backing file
    pub path: PathBuf,
    pub kind: AssetKind,
}

/// Build the fixed catalog rooted at `asset_dir`
pub fn catalog(asset_dir: &Path) -> Vec<AssetEntry> {
    ASSET_FILES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let path = asset_dir.join(name);
            AssetEntry {
                index,
                kind: AssetKind::from_path(&path),
                path,
            }
        })
        .collect()
}
