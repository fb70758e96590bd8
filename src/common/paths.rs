//! # Path Validation
//!
//! Checks user-supplied file paths before any I/O happens.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// What kind of file a path is expected to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A PNG image (`.png`)
    Image,
    /// A plain text message (`.txt`)
    Text,
}

impl PathKind {
    fn extension(self) -> &'static str {
        match self {
            PathKind::Image => "png",
            PathKind::Text => "txt",
        }
    }
}

/// Validate `path` for use as a `kind` file.
///
/// The parent directory must exist, the extension must match `kind`
/// (case-insensitive) and, when `must_exist` is set, the file itself must exist.
pub fn validate_path(path: &str, kind: PathKind, must_exist: bool) -> Result<PathBuf> {
    let path = Path::new(path);

    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => bail!("The path {} is illegal", path.display()),
    };
    if !parent.is_dir() {
        bail!(
            "The path {} is illegal: directory {} does not exist",
            path.display(),
            parent.display()
        );
    }

    if must_exist && !path.is_file() {
        bail!("The path {} does not name an existing file", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if extension.as_deref() != Some(kind.extension()) {
        bail!(
            "The path {} is not of type {}",
            path.display(),
            kind.extension()
        );
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_existing_png_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cover.PNG");
        fs::write(&file, b"x").unwrap();

        let validated = validate_path(file.to_str().unwrap(), PathKind::Image, true).unwrap();
        assert_eq!(validated, file);
    }

    #[test]
    fn test_wrong_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("message.md");
        fs::write(&file, b"x").unwrap();

        assert!(validate_path(file.to_str().unwrap(), PathKind::Text, true).is_err());
    }

    #[test]
    fn test_missing_file_only_matters_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.png");
        let file = file.to_str().unwrap();

        assert!(validate_path(file, PathKind::Image, true).is_err());
        assert!(validate_path(file, PathKind::Image, false).is_ok());
    }

    #[test]
    fn test_missing_directory_rejected() {
        assert!(validate_path("/no/such/dir/out.png", PathKind::Image, false).is_err());
    }
}
