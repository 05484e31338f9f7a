use std::{future::Future, io, path::Path};

/// Read-only view of the file system the linter probes.
///
/// `Ok(false)` means the path does not exist. Any `Err` is an infrastructure
/// failure and is propagated instead of being reported as a missing file.
pub trait FileSystem: Send + Sync + 'static {
    fn exists(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send {
        tokio::fs::try_exists(path.to_path_buf())
    }
}
