use std::path::PathBuf;

use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| EtlError::file(parent.display().to_string(), e))?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| EtlError::file(full_path.display().to_string(), e))?;

        Ok(full_path.display().to_string())
    }
}

/// File name of the letter for attendee `id`.
pub fn letter_file_name(id: &str) -> String {
    format!("thanks_{}.html", id)
}

/// Persists one rendered letter per attendee.
pub struct LetterWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> LetterWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes `content` as `thanks_<id>.html`, replacing any earlier letter.
    pub async fn save(&self, id: &str, content: &str) -> Result<String> {
        let mut data = content.as_bytes().to_vec();
        if !content.ends_with('\n') {
            data.push(b'\n');
        }

        let path = self.storage.write_file(&letter_file_name(id), &data).await?;
        tracing::debug!("Saved letter for attendee {} to {}", id, path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        let writer = LetterWriter::new(LocalStorage::new(&output));

        let path = writer.save("1", "<p>Thanks</p>").await.unwrap();

        assert!(path.ends_with("thanks_1.html"));
        let written = std::fs::read_to_string(output.join("thanks_1.html")).unwrap();
        assert_eq!(written, "<p>Thanks</p>\n");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_letter() {
        let temp_dir = TempDir::new().unwrap();
        let writer = LetterWriter::new(LocalStorage::new(temp_dir.path()));

        writer.save("9", "first draft").await.unwrap();
        writer.save("9", "final\n").await.unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join("thanks_9.html")).unwrap();
        assert_eq!(written, "final\n");
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let writer = LetterWriter::new(LocalStorage::new(&blocker));

        let result = writer.save("1", "letter").await;

        assert!(matches!(result, Err(EtlError::FileError { .. })));
    }
}
