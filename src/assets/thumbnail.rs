use image::imageops::FilterType;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::task;
use tracing::{debug, warn};

/// Bounding size of generated thumbnails (square)
const THUMBNAIL_SIZE: u32 = 256;

/// Distinguishes concurrent writers of the same thumbnail
static WRITE_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("could not determine a cache directory")]
    NoCacheDir,
    #[error("thumbnail I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode or encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("thumbnail task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// Get the thumbnail cache directory, creating it if needed.
/// Returns ~/.cache/project-showcase/thumbnails on Linux
pub fn cache_dir() -> Result<PathBuf, ThumbnailError> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(ThumbnailError::NoCacheDir)?;

    path.push("project-showcase");
    path.push("thumbnails");

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Expected thumbnail location for `source` inside `cache_dir`.
/// The name is keyed on the source path and its size, so an edited
/// image gets a fresh thumbnail.
pub fn thumbnail_path(cache_dir: &Path, source: &Path) -> PathBuf {
    let mut hasher = blake3::Hasher::new();
    hasher.update(source.to_string_lossy().as_bytes());
    if let Ok(meta) = fs::metadata(source) {
        hasher.update(&meta.len().to_le_bytes());
    }

    let key = hasher.finalize().to_hex();
    cache_dir.join(format!("{}.jpg", &key.as_str()[..16]))
}

/// Generate (or reuse) the thumbnail for `source` inside `cache_dir`.
/// A cached file that no longer decodes is replaced.
pub fn generate(cache_dir: &Path, source: &Path) -> Result<PathBuf, ThumbnailError> {
    let target = thumbnail_path(cache_dir, source);
    if target.exists() {
        if image::open(&target).is_ok() {
            return Ok(target);
        }
        warn!("Discarding unreadable thumbnail: {}", target.display());
        match fs::remove_file(&target) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => return Err(err.into()),
            _ => {}
        }
    }

    let img = image::open(source)?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    // Written under a unique name first so a reader never sees a partial file
    let partial = target.with_extension(format!(
        "{}.{}.part",
        std::process::id(),
        WRITE_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    // JPEG has no alpha channel
    let written = thumbnail
        .to_rgb8()
        .save_with_format(&partial, ImageFormat::Jpeg)
        .map_err(ThumbnailError::from)
        .and_then(|()| fs::rename(&partial, &target).map_err(ThumbnailError::from));

    if let Err(err) = written {
        let _ = fs::remove_file(&partial);
        return Err(err);
    }

    debug!("📸 Generated thumbnail: {}", target.display());
    Ok(target)
}

/// Generate thumbnails for a whole gallery off the UI thread.
///
/// The result is aligned with `sources`; entries that failed are `None`
/// and the strip shows the full image for them instead.
pub async fn generate_for_gallery(sources: Vec<PathBuf>) -> Vec<Option<PathBuf>> {
    let count = sources.len();

    let result = task::spawn_blocking(move || {
        let dir = cache_dir()?;
        Ok::<_, ThumbnailError>(
            sources
                .iter()
                .map(|source| match generate(&dir, source) {
                    Ok(path) => Some(path),
                    Err(err) => {
                        warn!("❌ Thumbnail failed for {}: {}", source.display(), err);
                        None
                    }
                })
                .collect::<Vec<_>>(),
        )
    })
    .await
    .map_err(ThumbnailError::from)
    .and_then(|inner| inner);

    match result {
        Ok(thumbnails) => thumbnails,
        Err(err) => {
            warn!("❌ Thumbnail generation skipped: {}", err);
            vec![None; count]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_pixel(width, height, image::Rgb([40, 120, 200]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_generate_downscales() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_image(dir.path(), "wide.png", 800, 400);

        let thumb = generate(dir.path(), &source).unwrap();
        let (width, height) = image::image_dimensions(&thumb).unwrap();

        assert_eq!(width, THUMBNAIL_SIZE);
        assert_eq!(height, THUMBNAIL_SIZE / 2);
    }

    #[test]
    fn test_generate_reuses_existing() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_image(dir.path(), "photo.png", 300, 300);

        let first = generate(dir.path(), &source).unwrap();
        let modified = fs::metadata(&first).unwrap().modified().unwrap();
        let second = generate(dir.path(), &source).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::metadata(&second).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_corrupt_cached_thumbnail_is_regenerated() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_image(dir.path(), "photo.png", 400, 200);

        let target = thumbnail_path(dir.path(), &source);
        fs::write(&target, b"\xFF\xD8 truncated").unwrap();

        let thumb = generate(dir.path(), &source).unwrap();

        assert_eq!(thumb, target);
        let (width, height) = image::image_dimensions(&thumb).unwrap();
        assert_eq!((width, height), (THUMBNAIL_SIZE, THUMBNAIL_SIZE / 2));
    }

    #[test]
    fn test_generate_leaves_no_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_image(dir.path(), "photo.png", 300, 300);

        generate(dir.path(), &source).unwrap();

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("part"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate(dir.path(), &dir.path().join("missing.png"));

        assert!(result.is_err());
    }

    #[test]
    fn test_thumbnail_path_is_stable() {
        let cache = Path::new("/cache");
        let a = thumbnail_path(cache, Path::new("/images/a.png"));

        assert_eq!(a, thumbnail_path(cache, Path::new("/images/a.png")));
        assert_ne!(a, thumbnail_path(cache, Path::new("/images/b.png")));
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("jpg"));
    }
}
