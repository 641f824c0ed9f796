//! File loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::{LemmatizerError, Result};

/// Read a whole file as UTF-8 text.
///
/// Missing files, unreadable files, and invalid UTF-8 are all I/O errors
/// tagged with the path.
pub fn load_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| LemmatizerError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        LemmatizerError::io(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "naïve café\n").unwrap();
        assert_eq!(load_file(&path).unwrap(), "naïve café\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.txt")).unwrap_err();
        match err {
            LemmatizerError::Io { path, source } => {
                assert!(path.ends_with("nope.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            LemmatizerError::Io { ref source, .. } if source.kind() == io::ErrorKind::InvalidData
        ));
    }
}
