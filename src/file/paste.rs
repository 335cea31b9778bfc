//! Saving clipboard images next to the cards that reference them.
//!
//! A pasted image is written under a fixed file name and referenced from the
//! card text by a relative `<img>` tag. Pasting again overwrites the previous
//! image file.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::png::encode_rgba;

/// Encodes `rgba` as PNG and writes it to `dir/name`.
///
/// The write goes through a temporary file and a rename so a half-written
/// image never replaces a good one. An existing file is overwritten.
///
/// # Example
///
/// ```
/// use cardquill::file::paste::save_pasted_image;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = save_pasted_image(dir.path(), "pasted_image.png", 1, 1, &[0, 0, 0, 255]).unwrap();
/// assert!(path.exists());
/// ```
pub fn save_pasted_image(
    dir: &Path,
    name: &str,
    width: usize,
    height: usize,
    rgba: &[u8],
) -> Result<PathBuf> {
    let png = encode_rgba(width, height, rgba)?;
    let path = dir.join(name);
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, &png).context("Failed to write temp file")?;
    fs::rename(&temp_path, &path).context("Failed to rename temp file")?;

    info!("saved pasted image {} ({}x{})", path.display(), width, height);
    Ok(path)
}

/// Markup embedding a saved image by relative file name.
///
/// ```
/// use cardquill::file::paste::image_tag;
///
/// assert_eq!(image_tag("pasted_image.png"), r#"<img src="pasted_image.png" />"#);
/// ```
pub fn image_tag(name: &str) -> String {
    format!("<img src=\"{}\" />", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::png::PNG_SIGNATURE;
    use tempfile::TempDir;

    #[test]
    fn test_second_paste_overwrites_first() {
        let dir = TempDir::new().unwrap();
        let first = save_pasted_image(dir.path(), "pasted_image.png", 1, 1, &[1, 1, 1, 1]).unwrap();
        let before = fs::read(&first).unwrap();

        let second =
            save_pasted_image(dir.path(), "pasted_image.png", 2, 1, &[9, 9, 9, 9, 8, 8, 8, 8])
                .unwrap();
        let after = fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_ne!(before, after);
        assert_eq!(&after[..8], &PNG_SIGNATURE);
        assert!(!dir.path().join("pasted_image.tmp").exists());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(save_pasted_image(&missing, "x.png", 1, 1, &[0, 0, 0, 0]).is_err());
    }
}
