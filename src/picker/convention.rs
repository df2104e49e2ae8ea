//! Picks test candidates out of a directory by file name: a candidate is a
//! regular file whose name starts with `test_` and ends with `.py`.
//! Names are matched as raw OS strings, so names that are not valid UTF-8
//! are still found.
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::errors::HarnessError;

/// Literal prefix every candidate name starts with.
pub const PREFIX: &str = "test_";
/// Literal suffix every candidate name ends with.
pub const SUFFIX: &str = ".py";

/// A test program found in the test directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// File name with the suffix stripped. Names the workspace.
    pub name: OsString,
    /// Path of the original file.
    pub path: PathBuf,
}

impl Candidate {
    /// Build a candidate from a path if its file name follows the naming
    /// convention.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = strip_convention(path.file_name()?)?;
        Some(Candidate { name, path })
    }

    /// File name of the candidate, including the suffix.
    pub fn file_name(&self) -> OsString {
        let mut file_name = self.name.clone();
        file_name.push(SUFFIX);
        file_name
    }

    /// Name used in reports and logs.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Returns the stem of `file_name` if it satisfies both naming constraints.
#[cfg(unix)]
fn strip_convention(file_name: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = file_name.as_bytes();
    if bytes.starts_with(PREFIX.as_bytes()) && bytes.ends_with(SUFFIX.as_bytes())
    {
        let stem = &bytes[..bytes.len() - SUFFIX.len()];
        Some(OsStr::from_bytes(stem).to_os_string())
    } else {
        None
    }
}

// TODO: match on WTF-16 units so unpaired surrogates in Windows names are
// picked up too.
#[cfg(not(unix))]
fn strip_convention(file_name: &OsStr) -> Option<OsString> {
    let name = file_name.to_str()?;
    if name.starts_with(PREFIX) && name.ends_with(SUFFIX) {
        Some(OsString::from(&name[..name.len() - SUFFIX.len()]))
    } else {
        None
    }
}

/// Returns true if `file_name` satisfies both naming constraints.
pub fn is_candidate<S: AsRef<OsStr>>(file_name: S) -> bool {
    strip_convention(file_name.as_ref()).is_some()
}

/// Find every candidate directly inside `dir`, sorted by name.
pub fn discover(dir: &Path) -> Result<Vec<Candidate>, HarnessError> {
    if !dir.is_dir() {
        return Err(HarnessError(format!(
            "{} is not a directory.",
            dir.display()
        )));
    }
    debug!(dir = %dir.display(), "scanning for candidates");

    let mut candidates = fs::read_dir(dir)
        .map_err(|err| HarnessError::at(dir, err))?
        .map(|entry| {
            entry
                .map(|entry| entry.path())
                .map_err(|err| HarnessError::at(dir, err))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(Candidate::from_path)
        .collect::<Vec<_>>();
    candidates.sort();

    info!(count = candidates.len(), dir = %dir.display(), "discovered candidates");
    Ok(candidates)
}
