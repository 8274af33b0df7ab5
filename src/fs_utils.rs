//! Filesystem helpers for writing fixed documents
//!
//! - `atomic_rename`: replace a file, deleting the target first on Windows
//! - `write_atomic`: write to a sibling temp file, then rename over the target
//! - `display_path`: workspace-relative path for output

use std::io;
use std::path::{Path, PathBuf};

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(src, dst)
}

/// Replace the contents of `path` without leaving a half-written file behind.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use force_semicolon::fs_utils::write_atomic;
///
/// write_atomic(Path::new("src/app.ts"), "const a = 1;\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = temp_path_for(path);
    if let Err(e) = std::fs::write(&tmp, contents) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = atomic_rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.force-semicolon.tmp", name))
}

/// Path relative to `root` when it lies inside it, otherwise unchanged
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("app.ts");
        std::fs::write(&target, "old").unwrap();

        write_atomic(&target, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn test_display_path() {
        let root = Path::new("/work");
        assert_eq!(display_path(Path::new("/work/src/a.ts"), root), "src/a.ts");
        assert_eq!(display_path(Path::new("/other/a.ts"), root), "/other/a.ts");
    }
}
