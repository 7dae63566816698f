//! Host-environment capability seams.
//!
//! The session layer needs durable storage for one credential string and,
//! in console builds, a clipboard. Both sit behind small traits so the core
//! logic runs the same against a browser host, a file on disk, or the
//! in-memory fakes the tests use.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{ApiError, Result};

/// Durable storage for the session credential.
///
/// Absence of a stored value means anonymous. Writes happen on every
/// successful login or explicit token refresh and are idempotent at rest.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;
    async fn store(&self, token: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// Copy-to-clipboard capability of the host environment.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Credential store held in memory only; the session it backs does not
/// survive the process.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        MemoryCredentialStore {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    async fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

/// Credential store backed by a file under the user configuration
/// directory, for the CLI and other long-lived sessions.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Stores the credential at `<config dir>/tarpit/credential`.
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| ApiError::Config("no user configuration directory".to_string()))?;
        Ok(FileCredentialStore {
            path: base.join("tarpit").join("credential"),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        FileCredentialStore { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Clipboard that records copies instead of touching the host.
#[derive(Default)]
pub struct MemoryClipboard {
    copied: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.copied
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        self.copied
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.store("tok123").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok123"));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credential");

        let store = FileCredentialStore::with_path(path.clone());
        assert!(store.load().await.unwrap().is_none());

        store.store("file-token").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("file-token"));

        // A second store sees the same file, like a process restart would.
        let reopened = FileCredentialStore::with_path(path);
        assert_eq!(
            reopened.load().await.unwrap().as_deref(),
            Some("file-token")
        );

        store.clear().await.unwrap();
        assert!(reopened.load().await.unwrap().is_none());
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_ignores_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential");
        tokio::fs::write(&path, "  tok456\n").await.unwrap();

        let store = FileCredentialStore::with_path(path);
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok456"));
    }

    #[test]
    fn test_memory_clipboard_records_copies() {
        let clip = MemoryClipboard::new();
        assert!(clip.last().is_none());
        clip.copy("10.0.0.1").unwrap();
        clip.copy("10.0.0.2").unwrap();
        assert_eq!(clip.last().as_deref(), Some("10.0.0.2"));
    }
}
