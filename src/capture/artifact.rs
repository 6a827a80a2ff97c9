use crate::foundation::error::{ChaseError, ChaseResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fixed download name of a recorded clip.
pub const CLIP_FILE_NAME: &str = "jungle-chase.webm";

/// A finished recording, ready to publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipBlob {
    /// Container MIME type.
    pub mime: &'static str,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

impl ClipBlob {
    /// Concatenate recorder chunks in arrival order.
    pub fn from_chunks(mime: &'static str, chunks: Vec<Vec<u8>>) -> Self {
        Self {
            mime,
            bytes: chunks.concat(),
        }
    }
}

/// Handle to a published clip.
///
/// Not `Clone`: [`ArtifactStore::revoke`] consumes it, so a handle is released at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct ArtifactHandle {
    id: u64,
    location: String,
    len: usize,
}

impl ArtifactHandle {
    /// Store-assigned id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Where the clip can be fetched from (a path or an in-memory locator).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Size of the clip in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for an empty clip.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name offered when the clip is downloaded.
    pub fn download_name(&self) -> &'static str {
        CLIP_FILE_NAME
    }
}

/// Registry of downloadable clips.
pub trait ArtifactStore {
    /// Make `clip` downloadable.
    fn publish(&mut self, clip: ClipBlob) -> ChaseResult<ArtifactHandle>;
    /// Release the resource behind `handle`.
    fn revoke(&mut self, handle: ArtifactHandle) -> ChaseResult<()>;
}

/// Keeps clips in memory, addressed by `mem:<id>` locators.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    next_id: u64,
    clips: HashMap<u64, ClipBlob>,
    revoked: u64,
}

impl MemoryArtifactStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of a live clip.
    pub fn get(&self, handle: &ArtifactHandle) -> Option<&ClipBlob> {
        self.clips.get(&handle.id)
    }

    /// Number of live clips.
    pub fn live(&self) -> usize {
        self.clips.len()
    }

    /// Number of successful revocations.
    pub fn revoked(&self) -> u64 {
        self.revoked
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn publish(&mut self, clip: ClipBlob) -> ChaseResult<ArtifactHandle> {
        self.next_id += 1;
        let id = self.next_id;
        let len = clip.bytes.len();
        self.clips.insert(id, clip);
        Ok(ArtifactHandle {
            id,
            location: format!("mem:{id}"),
            len,
        })
    }

    fn revoke(&mut self, handle: ArtifactHandle) -> ChaseResult<()> {
        self.clips
            .remove(&handle.id)
            .ok_or_else(|| ChaseError::capture(format!("unknown artifact {}", handle.id)))?;
        self.revoked += 1;
        Ok(())
    }
}

/// Writes clips under a directory as `<id>-jungle-chase.webm`; revoking deletes the file.
#[derive(Debug)]
pub struct FileArtifactStore {
    dir: PathBuf,
    next_id: u64,
}

impl FileArtifactStore {
    /// Store rooted at `dir` (created on first publish).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_id: 0,
        }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactStore for FileArtifactStore {
    fn publish(&mut self, clip: ClipBlob) -> ChaseResult<ArtifactHandle> {
        use anyhow::Context as _;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create clip directory '{}'", self.dir.display()))?;
        self.next_id += 1;
        let id = self.next_id;
        let path = self.dir.join(format!("{id}-{CLIP_FILE_NAME}"));
        std::fs::write(&path, &clip.bytes)
            .with_context(|| format!("failed to write clip '{}'", path.display()))?;
        Ok(ArtifactHandle {
            id,
            location: path.display().to_string(),
            len: clip.bytes.len(),
        })
    }

    fn revoke(&mut self, handle: ArtifactHandle) -> ChaseResult<()> {
        use anyhow::Context as _;

        std::fs::remove_file(&handle.location)
            .with_context(|| format!("failed to remove clip '{}'", handle.location))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/artifact.rs"]
mod tests;
