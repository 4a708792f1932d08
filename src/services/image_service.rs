use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::AppResult;

/// Uploaded product images, stored flat as `<uuid><ext>`.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes the upload under a generated name and returns that name.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<String> {
        let filename = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
        tokio::fs::write(self.dir.join(&filename), bytes).await?;
        tracing::debug!(%filename, size = bytes.len(), "stored product image");
        Ok(filename)
    }

    /// Best effort; a missing file is not an error.
    pub async fn remove(&self, filename: &str) {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.starts_with('.') {
            return;
        }
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => tracing::debug!(%filename, "removed product image"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(%filename, error = %err, "failed to remove product image"),
        }
    }
}

/// `.png` style suffix of the client filename, lowercased; empty when absent or odd.
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_sane_extensions() {
        assert_eq!(extension_of("photo.PNG"), ".png");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of("weird.p/ng"), "");
        assert_eq!(extension_of("evil.ph p"), "");
    }

    #[tokio::test]
    async fn save_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let first = store.save("a.jpg", b"one").await.unwrap();
        let second = store.save("a.jpg", b"two").await.unwrap();
        assert_ne!(first, second);
        assert!(first.ends_with(".jpg"));
        assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"two");

        store.remove(&first).await;
        assert!(!dir.path().join(&first).exists());
        store.remove(&first).await;
        store.remove("../etc/passwd").await;
    }
}
