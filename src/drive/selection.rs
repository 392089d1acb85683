//! Turning the path typed by the user into a list of images.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "bmp", "tif", "tiff",
];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Normalize raw input: trims whitespace and matching quotes (terminals add
/// them when a file is dropped) and expands a leading `~`.
pub fn resolve_input_path(input: &str) -> PathBuf {
    let mut trimmed = input.trim();
    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            trimmed = &trimmed[1..trimmed.len() - 1];
        }
    }

    if trimmed == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(trimmed)
}

/// Images selected by `path`.
///
/// A file is taken as-is if it looks like an image. A directory yields its
/// image files, sorted by name, without descending into subdirectories.
pub fn collect_images(path: &Path) -> AppResult<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path).map_err(|e| AppError::io(path, e))?;

    if metadata.is_file() {
        return if is_image_path(path) {
            Ok(vec![path.to_path_buf()])
        } else {
            Err(AppError::NoImagesFound(path.to_path_buf()))
        };
    }

    let entries = std::fs::read_dir(path).map_err(|e| AppError::io(path, e))?;
    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_image_path(p))
        .collect();
    images.sort();

    if images.is_empty() {
        return Err(AppError::NoImagesFound(path.to_path_buf()));
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("a.jpg")));
        assert!(is_image_path(Path::new("B.JPEG")));
        assert!(is_image_path(Path::new("dir/c.heic")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("noext")));
    }

    #[test]
    fn test_resolve_input_path_strips_quotes() {
        assert_eq!(
            resolve_input_path("  '/tmp/my photos'  "),
            PathBuf::from("/tmp/my photos")
        );
        assert_eq!(resolve_input_path("\"/tmp/x.jpg\""), PathBuf::from("/tmp/x.jpg"));
    }

    #[test]
    fn test_collect_images_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let images = collect_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_collect_images_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foto.jpg");
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(collect_images(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_collect_images_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            collect_images(dir.path()),
            Err(AppError::NoImagesFound(_))
        ));

        let text = dir.path().join("a.txt");
        std::fs::write(&text, b"x").unwrap();
        assert!(matches!(collect_images(&text), Err(AppError::NoImagesFound(_))));

        assert!(matches!(
            collect_images(&dir.path().join("missing")),
            Err(AppError::Io { .. })
        ));
    }
}
