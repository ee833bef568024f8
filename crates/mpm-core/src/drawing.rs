//! On-disk storage for part drawings.
//!
//! Each drawing is stored as `<root>/<uuid>.pdf`. Identifiers coming back
//! from clients are parsed as UUIDs before touching the filesystem, so a
//! lookup can never escape `root`.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};

/// Default storage directory, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = "static/part";

const DRAWING_EXTENSION: &str = ".pdf";

/// Returns true when `file_name` ends in `.pdf`, ignoring case.
pub fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(DRAWING_EXTENSION)
}

/// Local filesystem store for PDF drawings.
#[derive(Debug, Clone)]
pub struct DrawingStore {
    root: PathBuf,
}

impl DrawingStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn ensure_root(&self) -> InventoryResult<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Path of the drawing for a part identifier.
    pub fn path_for(&self, uuid: &Uuid) -> PathBuf {
        self.root.join(format!("{}{}", uuid, DRAWING_EXTENSION))
    }

    /// Write drawing bytes for `uuid`, replacing any existing file.
    pub async fn save(&self, uuid: &Uuid, bytes: &[u8]) -> InventoryResult<PathBuf> {
        let path = self.path_for(uuid);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Read the drawing stored for `id`.
    ///
    /// Malformed identifiers and missing files both map to `DrawingNotFound`.
    pub async fn load(&self, id: &str) -> InventoryResult<Vec<u8>> {
        let uuid = Uuid::parse_str(id).map_err(|_| InventoryError::DrawingNotFound(id.to_string()))?;

        match fs::read(self.path_for(&uuid)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(InventoryError::DrawingNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pdf_file_names() {
        assert!(is_pdf_file_name("bracket.pdf"));
        assert!(is_pdf_file_name("BRACKET.PDF"));
        assert!(is_pdf_file_name("rev.2.Pdf"));
        assert!(!is_pdf_file_name("bracket.png"));
        assert!(!is_pdf_file_name("pdf"));
        assert!(!is_pdf_file_name("bracket.pdf.exe"));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = DrawingStore::new(temp.path().join("static/part"));
        let id = Uuid::new_v4();

        let path = store.save(&id, b"%PDF-1.7").await.unwrap();
        assert_eq!(path, temp.path().join("static/part").join(format!("{}.pdf", id)));

        let bytes = store.load(&id.to_string()).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_missing_drawing() {
        let temp = TempDir::new().unwrap();
        let store = DrawingStore::new(temp.path());

        let result = store.load(&Uuid::new_v4().to_string()).await;
        assert!(matches!(result, Err(InventoryError::DrawingNotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_identifier() {
        let temp = TempDir::new().unwrap();
        let store = DrawingStore::new(temp.path());

        let result = store.load("../../etc/passwd").await;
        assert!(matches!(result, Err(InventoryError::DrawingNotFound(_))));
    }
}
