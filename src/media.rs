//! Uploaded files kept on local disk under a media root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// URL prefix the media root is served under.
pub const MEDIA_URL: &str = "/media";

const PRODUCT_IMAGE_DIR: &str = "store/images";

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy `source` into the product image directory under a fresh name.
    /// Returns the path relative to the media root.
    pub fn save_product_image(&self, source: &Path, extension: &str) -> io::Result<String> {
        let relative = format!("{PRODUCT_IMAGE_DIR}/{}.{extension}", Uuid::new_v4().simple());
        let target = self.root.join(&relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)?;

        Ok(relative)
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub fn remove(&self, relative: &str) -> io::Result<()> {
        match fs::remove_file(self.root.join(relative)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }

    /// Public URL of a stored file.
    pub fn url(relative: &str) -> String {
        format!("{MEDIA_URL}/{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_and_removes_product_images() {
        let root = tempfile::tempdir().expect("create media root");
        let source = root.path().join("upload.tmp");
        fs::write(&source, b"GIF89a").expect("write source");
        let media = MediaStore::new(root.path());

        let relative = media
            .save_product_image(&source, "gif")
            .expect("expected saved image");

        assert!(relative.starts_with("store/images/"));
        assert!(relative.ends_with(".gif"));
        assert_eq!(fs::read(media.root().join(&relative)).unwrap(), b"GIF89a");
        assert_eq!(MediaStore::url(&relative), format!("/media/{relative}"));

        media.remove(&relative).expect("expected removal");
        assert!(!media.root().join(&relative).exists());
        media.remove(&relative).expect("second removal is a no-op");
    }
}
