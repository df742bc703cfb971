//! State file holding the persisted integers between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use watchface_common::MemoryStorage;
use watchface_common::storage::MAX_ENCODED_SIZE;

/// Read storage from `path`. A missing file is an empty storage.
pub fn load(path: &Path) -> Result<MemoryStorage> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MemoryStorage::new()),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    MemoryStorage::from_bytes(&bytes)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("decoding {}", path.display()))
}

/// Write storage to `path`, replacing any previous contents.
pub fn save(
    path: &Path,
    storage: &MemoryStorage,
) -> Result<()> {
    let mut buf = [0u8; MAX_ENCODED_SIZE];
    let bytes = storage.to_bytes(&mut buf).map_err(anyhow::Error::msg)?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
