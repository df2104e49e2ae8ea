//! Per-test working directories under the shared executions root.
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::{errors::HarnessError, picker::convention::Candidate};

/// A freshly created directory holding a copy of one candidate.
#[derive(Debug)]
pub struct Workspace {
    /// The workspace directory. The candidate runs with this as its working
    /// directory.
    pub dir: PathBuf,
    /// The copy of the candidate inside `dir`.
    pub program: PathBuf,
}

/// Create the executions root if it is absent and return its absolute path.
pub async fn create_root(root: &Path) -> Result<PathBuf, HarnessError> {
    fs::create_dir_all(root)
        .await
        .map_err(|err| HarnessError::at(root, err))?;
    fs::canonicalize(root)
        .await
        .map_err(|err| HarnessError::at(root, err))
}

/// Recreate the workspace for `candidate` under `root` and copy the
/// candidate into it. Whatever a previous run left behind is removed first.
pub async fn prepare(
    root: &Path,
    candidate: &Candidate,
) -> Result<Workspace, HarnessError> {
    let dir = root.join(&candidate.name);

    if let Ok(meta) = fs::symlink_metadata(&dir).await {
        debug!(workspace = %dir.display(), "removing stale workspace");
        let removed = if meta.is_dir() {
            fs::remove_dir_all(&dir).await
        } else {
            fs::remove_file(&dir).await
        };
        removed.map_err(|err| HarnessError::at(&dir, err))?;
    }
    fs::create_dir(&dir)
        .await
        .map_err(|err| HarnessError::at(&dir, err))?;

    // `copy` carries the permission bits over, so the execute bit survives.
    let program = dir.join(candidate.file_name());
    fs::copy(&candidate.path, &program)
        .await
        .map_err(|err| HarnessError::at(&candidate.path, err))?;

    debug!(workspace = %dir.display(), "prepared workspace");
    Ok(Workspace { dir, program })
}
