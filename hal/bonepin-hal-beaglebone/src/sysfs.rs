//! std::fs backed file access
//!
//! Each call opens the file, does one whole-file read or one write, and
//! closes it again when the handle drops. Nothing is cached between calls.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use bonepin_hal::FileAccess;

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsFs;

impl FileAccess for SysfsFs {
    fn read_string(&self, path: &Path) -> io::Result<String> {
        let mut file = fs::File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        let bytes = contents.as_bytes();
        let written = file.write(bytes)?;
        if written != bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("wrote {written} of {} bytes", bytes.len()),
            ));
        }
        file.flush()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bonepin-sysfs-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir("rw");
        let path = dir.join("value");

        SysfsFs.write_string(&path, "1").unwrap();
        assert_eq!(SysfsFs.read_string(&path).unwrap(), "1");

        // Whole-file replace, not append
        SysfsFs.write_string(&path, "0").unwrap();
        assert_eq!(SysfsFs.read_string(&path).unwrap(), "0");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_dir_sorted() {
        let dir = scratch_dir("list");
        fs::create_dir(dir.join("pwmchip4")).unwrap();
        fs::write(dir.join("a"), "").unwrap();

        assert_eq!(
            SysfsFs.list_dir(&dir).unwrap(),
            vec!["a".to_string(), "pwmchip4".to_string()]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = SysfsFs
            .read_string(Path::new("/nonexistent/bonepin/value"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
