//! Artifact storage adapters
//!
//! Rendered statements are stored under a caller-supplied name hint and
//! addressed by the returned locator. Both adapters share one contract:
//! storing under the same name hint overwrites, so regeneration is
//! idempotent and the locator is stable.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

use domain_ledger::{ArtifactError, ArtifactStore};

/// Artifact store writing to a directory on the local filesystem
///
/// The locator is a `file://` URL to the written file. The root directory
/// is created on first use.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    /// Creates a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    async fn store(&self, name_hint: &str, content: &[u8]) -> Result<String, ArtifactError> {
        // Name hints are derived from validated keys, but never trust them
        // with path traversal anyway.
        if name_hint.contains('/') || name_hint.contains("..") {
            return Err(ArtifactError::new(format!(
                "unsafe artifact name: {name_hint}"
            )));
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ArtifactError::new(err.to_string()))?;

        let path = self.root.join(name_hint);
        tokio::fs::write(&path, content)
            .await
            .map_err(|err| ArtifactError::new(err.to_string()))?;

        debug!(path = %path.display(), "Artifact written");
        Ok(format!("file://{}", path.display()))
    }
}

/// Artifact store keeping content in memory; tests and local development
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    artifacts: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryArtifactStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored content for a name hint, if any
    pub fn get(&self, name_hint: &str) -> Option<Vec<u8>> {
        self.artifacts.lock().unwrap().get(name_hint).cloned()
    }

    /// Number of stored artifacts
    pub fn len(&self) -> usize {
        self.artifacts.lock().unwrap().len()
    }

    /// Whether the store holds no artifacts
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn store(&self, name_hint: &str, content: &[u8]) -> Result<String, ArtifactError> {
        let mut artifacts = self.artifacts.lock().unwrap();
        artifacts.insert(name_hint.to_string(), content.to_vec());
        Ok(format!("memory://statements/{name_hint}"))
    }
}
