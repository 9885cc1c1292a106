//! Whole-file access primitive
//!
//! Every pin resource is a small pseudo-file: configuration happens by
//! writing a short string, sampling by reading the whole file back. The
//! [`FileAccess`] trait captures exactly that surface so the pin layer can
//! run against the real sysfs tree or against [`MemoryFs`].
//!
//! Implementations must not cache and must not expose partial reads: a read
//! returns the full content, a write succeeds only if every byte was written.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Scoped whole-file read/write
pub trait FileAccess: Send + Sync {
    /// Read the complete content of a file
    fn read_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the content of a file
    ///
    /// Returns an error unless all of `contents` was written.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// List the entry names of a directory
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Keep only ASCII digits
///
/// Numeric resources come back with trailing newlines and occasionally
/// padding; the digits are all the pin layer cares about.
pub fn numeric_only(content: &str) -> String {
    content.chars().filter(char::is_ascii_digit).collect()
}

/// A file operation recorded by [`MemoryFs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    Read(PathBuf),
    Write(PathBuf, String),
    List(PathBuf),
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, String>,
    failing: BTreeSet<PathBuf>,
    log: Vec<FsOp>,
}

/// In-memory file tree
///
/// Clones share the same tree, so a test can hand one clone to a board and
/// keep another to seed files and inspect what was written. Directories
/// exist implicitly as soon as a file below them exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFs {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`MemoryFs::insert`]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.insert(path, contents);
        self
    }

    /// Create or replace a file without logging an operation
    pub fn insert(&self, path: impl Into<PathBuf>, contents: &str) {
        self.lock().files.insert(path.into(), contents.to_owned());
    }

    /// Remove a file
    pub fn remove(&self, path: impl AsRef<Path>) {
        self.lock().files.remove(path.as_ref());
    }

    /// Current content of a file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Make every future write to `path` fail with `PermissionDenied`
    pub fn fail_writes(&self, path: impl Into<PathBuf>) {
        self.lock().failing.insert(path.into());
    }

    /// All operations performed through [`FileAccess`], in order
    pub fn ops(&self) -> Vec<FsOp> {
        self.lock().log.clone()
    }

    /// All attempted writes, in order
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.lock()
            .log
            .iter()
            .filter_map(|op| match op {
                FsOp::Write(path, contents) => Some((path.clone(), contents.clone())),
                _ => None,
            })
            .collect()
    }

    /// Attempted writes to a single path, in order
    pub fn writes_to(&self, path: impl AsRef<Path>) -> Vec<String> {
        let path = path.as_ref();
        self.writes()
            .into_iter()
            .filter(|(p, _)| p == path)
            .map(|(_, contents)| contents)
            .collect()
    }

    /// Forget recorded operations
    pub fn clear_log(&self) {
        self.lock().log.clear();
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileAccess for MemoryFs {
    fn read_string(&self, path: &Path) -> io::Result<String> {
        let mut state = self.lock();
        state.log.push(FsOp::Read(path.to_path_buf()));
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::ErrorKind::NotFound.into())
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.lock();
        state
            .log
            .push(FsOp::Write(path.to_path_buf(), contents.to_owned()));
        if state.failing.contains(path) {
            return Err(io::ErrorKind::PermissionDenied.into());
        }
        state.files.insert(path.to_path_buf(), contents.to_owned());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut state = self.lock();
        state.log.push(FsOp::List(path.to_path_buf()));
        let entries: BTreeSet<String> = state
            .files
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|first| first.as_os_str().to_string_lossy().into_owned())
            .collect();
        if entries.is_empty() {
            return Err(io::ErrorKind::NotFound.into());
        }
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_only() {
        assert_eq!(numeric_only("1\n"), "1");
        assert_eq!(numeric_only(" 4095 \n"), "4095");
        assert_eq!(numeric_only("pwm"), "");
    }

    #[test]
    fn test_read_write() {
        let fs = MemoryFs::new();
        let path = Path::new("/sys/class/gpio/gpio30/value");

        assert_eq!(
            fs.read_string(path).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );

        fs.write_string(path, "1").unwrap();
        assert_eq!(fs.read_string(path).unwrap(), "1");
        assert_eq!(fs.contents(path).as_deref(), Some("1"));
        assert_eq!(fs.writes_to(path), vec!["1".to_string()]);
    }

    #[test]
    fn test_failing_write_is_logged() {
        let fs = MemoryFs::new();
        fs.fail_writes("/sys/class/gpio/export");

        let result = fs.write_string(Path::new("/sys/class/gpio/export"), "30");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(fs.writes().len(), 1);
        assert_eq!(fs.contents("/sys/class/gpio/export"), None);
    }

    #[test]
    fn test_list_dir() {
        let fs = MemoryFs::new()
            .with_file("/ocp/pwm/pwmchip4/export", "")
            .with_file("/ocp/pwm/pwmchip4/pwm0/period", "0")
            .with_file("/ocp/pwm/.hidden", "");

        let entries = fs.list_dir(Path::new("/ocp/pwm/")).unwrap();
        assert_eq!(entries, vec![".hidden".to_string(), "pwmchip4".to_string()]);

        assert!(fs.list_dir(Path::new("/missing")).is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let fs = MemoryFs::new();
        let other = fs.clone();
        other.insert("/a", "x");
        assert_eq!(fs.contents("/a").as_deref(), Some("x"));

        fs.read_string(Path::new("/a")).unwrap();
        assert_eq!(other.ops(), vec![FsOp::Read(PathBuf::from("/a"))]);
        other.clear_log();
        assert!(fs.ops().is_empty());
    }
}
