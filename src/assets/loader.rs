/// Asset materialization
///
/// Turns catalog entries into display-ready handles. Everything here is
/// blocking (file reads + full decode) and is meant to run on a blocking
/// worker, never on the UI thread.

use iced::widget::image::Handle;
use std::path::Path;

use super::animation::Animation;
use super::{AssetHandle, CachedAsset, PreloadCache};
use crate::error::AssetError;
use crate::state::data::{AssetEntry, AssetKind};

/// Decode one asset file
pub fn load_asset(path: &Path, kind: AssetKind) -> Result<AssetHandle, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match kind {
        AssetKind::Static => {
            let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Ok(AssetHandle::Static(Handle::from_rgba(
                width,
                height,
                rgba.into_raw(),
            )))
        }
        AssetKind::Animated => Ok(AssetHandle::Animated(Animation::decode_gif(path, &bytes)?)),
    }
}

/// Materialize every entry in index order
///
/// Failures are per-asset: the entry is logged and left out of the cache.
/// This never fails as a whole.
pub fn materialize_assets(entries: &[AssetEntry]) -> PreloadCache {
    let mut cache = PreloadCache::default();

    for entry in entries {
        match load_asset(&entry.path, entry.kind) {
            Ok(handle) => {
                log::debug!("Preloaded asset {}: {}", entry.index, entry.path.display());
                cache.insert(
                    entry.index,
                    CachedAsset {
                        path: entry.path.clone(),
                        handle,
                    },
                );
            }
            Err(err) => {
                log::warn!("⚠️  Skipping asset {}: {}", entry.index, err);
            }
        }
    }

    if cache.is_empty() {
        log::warn!("⚠️  No assets could be preloaded; the viewer will be empty");
    } else {
        log::info!(
            "✅ Preloaded {} of {} assets",
            cache.len(),
            entries.len()
        );
    }
    cache
}

/// Decode the loading animation
///
/// Runs on a blocking worker; `None` means the loading screen goes without it.
pub async fn load_loading_animation(path: std::path::PathBuf) -> Option<Animation> {
    let result = tokio::task::spawn_blocking(move || {
        match load_asset(&path, AssetKind::Animated) {
            Ok(AssetHandle::Animated(animation)) => Ok(animation),
            Ok(AssetHandle::Static(_)) => Err(AssetError::NoFrames(path)),
            Err(err) => Err(err),
        }
    })
    .await;

    match result {
        Ok(Ok(animation)) => Some(animation),
        Ok(Err(err)) => {
            log::warn!("⚠️  Loading animation unavailable: {}", err);
            None
        }
        Err(err) => {
            log::error!("Loading animation task failed: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{catalog, ASSET_COUNT};
    use crate::test_utils::{write_assets, write_gif, write_png};

    #[test]
    fn test_load_static() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.png");
        write_png(&path);

        let handle = load_asset(&path, AssetKind::Static).unwrap();
        assert!(matches!(handle, AssetHandle::Static(_)));
    }

    #[test]
    fn test_load_animated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("5.gif");
        write_gif(&path, 4);

        match load_asset(&path, AssetKind::Animated).unwrap() {
            AssetHandle::Animated(animation) => assert_eq!(animation.frame_count(), 4),
            other => panic!("expected animation, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_asset(&dir.path().join("nope.png"), AssetKind::Static).unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_asset(&path, AssetKind::Static).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_materialize_all_present() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path(), &[]);

        let cache = materialize_assets(&catalog(dir.path()));
        assert_eq!(cache.len(), ASSET_COUNT);
    }

    #[test]
    fn test_materialize_skips_missing() {
        for missing in [vec![], vec![4], vec![0, 6], vec![1, 2, 3, 5], (0..ASSET_COUNT).collect()] {
            let dir = tempfile::tempdir().unwrap();
            write_assets(dir.path(), &missing);

            let cache = materialize_assets(&catalog(dir.path()));
            assert_eq!(cache.len(), ASSET_COUNT - missing.len());
            for index in &missing {
                assert!(cache.get(*index).is_none());
            }
        }
    }

    #[test]
    fn test_materialize_skips_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_assets(dir.path(), &[]);
        std::fs::write(&paths[5], b"garbage").unwrap();

        let cache = materialize_assets(&catalog(dir.path()));
        assert_eq!(cache.len(), ASSET_COUNT - 1);
        assert!(cache.get(5).is_none());
        assert!(cache.get(6).is_some());
    }

    #[tokio::test]
    async fn test_loading_animation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Loading Animation.gif");
        write_gif(&path, 3);

        let animation = load_loading_animation(path).await.unwrap();
        assert_eq!(animation.frame_count(), 3);

        assert!(load_loading_animation(dir.path().join("absent.gif"))
            .await
            .is_none());
    }
}
