//! Board context
//!
//! A [`Board`] bundles what every pin needs: the file primitive, the path
//! resolver, the settle delay, and the registry of one-time initializations
//! already performed. Pins hold a clone of the board they were built from;
//! clones share the same registry.
//!
//! # One-time initialization
//!
//! Enabling the ADC is a board-global side effect, and exporting a PWM
//! channel or a GPIO is per-resource. Both are racy if two constructors
//! probe and act concurrently. [`Board::init_once`] runs the action with
//! the registry lock held, across the writes and the settle delay, and
//! records the key only on success. The guard covers one `Board` and its
//! clones; separate processes are not coordinated.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use bonepin_core::config::BoardConfig;
use bonepin_hal::{FileAccess, Result};
use tracing::{debug, trace};

use crate::paths::SysfsPaths;
use crate::sysfs::SysfsFs;

/// Registry key for the board-global ADC enable
pub const ANALOG_SUBSYSTEM_KEY: &str = "analog-subsystem";

struct BoardInner {
    fs: Box<dyn FileAccess>,
    paths: SysfsPaths,
    settle_delay: Duration,
    analog_overlay: String,
    initialized: Mutex<HashSet<String>>,
}

/// Shared handle to the board's pin resources
#[derive(Clone)]
pub struct Board {
    inner: Arc<BoardInner>,
}

impl Board {
    /// Create a board over an arbitrary file primitive
    pub fn new(config: &BoardConfig, fs: impl FileAccess + 'static) -> Self {
        Self {
            inner: Arc::new(BoardInner {
                fs: Box::new(fs),
                paths: SysfsPaths::new(&config.sysfs_root),
                settle_delay: config.settle_delay(),
                analog_overlay: config.analog_overlay.clone(),
                initialized: Mutex::new(HashSet::new()),
            }),
        }
    }

    /// Create a board over the real filesystem
    pub fn sysfs(config: &BoardConfig) -> Self {
        Self::new(config, SysfsFs)
    }

    /// Path resolver for this board
    pub fn paths(&self) -> &SysfsPaths {
        &self.inner.paths
    }

    /// Overlay name written to the cape manager to enable the ADC
    pub fn analog_overlay(&self) -> &str {
        &self.inner.analog_overlay
    }

    /// Whether `key` has been initialized through [`Board::init_once`]
    pub fn is_initialized(&self, key: &str) -> bool {
        self.inner
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// Run `init` unless `key` has already been initialized successfully
    ///
    /// The registry lock is held while `init` runs, so concurrent callers
    /// for any key wait rather than repeat the side effect. `init` must not
    /// call back into `init_once`.
    pub fn init_once<F>(&self, key: &str, init: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        let mut done = self
            .inner
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if done.contains(key) {
            trace!(key, "already initialized");
            return Ok(());
        }
        init()?;
        done.insert(key.to_owned());
        debug!(key, "initialized");
        Ok(())
    }

    /// Block for the configured settle delay
    pub(crate) fn settle(&self) {
        let delay = self.inner.settle_delay;
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "waiting for resource to settle");
            thread::sleep(delay);
        }
    }

    pub(crate) fn read(&self, path: &Path) -> io::Result<String> {
        self.inner.fs.read_string(path)
    }

    pub(crate) fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        trace!(path = %path.display(), contents, "write");
        self.inner.fs.write_string(path, contents)
    }

    pub(crate) fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        self.inner.fs.list_dir(path)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::sysfs(&BoardConfig::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("root", &self.inner.paths.root())
            .field("settle_delay", &self.inner.settle_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use bonepin_hal::MemoryFs;

    /// A board over a fresh in-memory tree with no settle delay
    pub(crate) fn memory_board() -> (Board, MemoryFs) {
        let fs = MemoryFs::new();
        let config = BoardConfig {
            settle_delay_ms: 0,
            ..BoardConfig::default()
        };
        (Board::new(&config, fs.clone()), fs)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::memory_board;
    use super::*;
    use bonepin_hal::PinError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_init_once_runs_once() {
        let (board, _fs) = memory_board();
        let runs = AtomicUsize::new(0);

        for _ in 0..3 {
            board
                .init_once("key", || {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(board.is_initialized("key"));
        assert!(!board.is_initialized("other"));
    }

    #[test]
    fn test_failed_init_is_retried() {
        let (board, _fs) = memory_board();

        let result = board.init_once("key", || {
            Err(PinError::init_failed("AIN1", "slots")(io::ErrorKind::PermissionDenied.into()))
        });
        assert!(result.is_err());
        assert!(!board.is_initialized("key"));

        board.init_once("key", || Ok(())).unwrap();
        assert!(board.is_initialized("key"));
    }

    #[test]
    fn test_clones_share_registry() {
        let (board, _fs) = memory_board();
        let clone = board.clone();
        clone.init_once(ANALOG_SUBSYSTEM_KEY, || Ok(())).unwrap();
        assert!(board.is_initialized(ANALOG_SUBSYSTEM_KEY));
    }

    #[test]
    fn test_concurrent_init_once() {
        let (board, _fs) = memory_board();
        let runs = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let board = board.clone();
                let runs = runs.clone();
                thread::spawn(move || {
                    board
                        .init_once(ANALOG_SUBSYSTEM_KEY, || {
                            runs.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(5));
                            Ok(())
                        })
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
