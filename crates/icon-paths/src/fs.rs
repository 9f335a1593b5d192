//! Filesystem primitives with explicit errors.

use crate::PathError;
use camino::Utf8Path;

/// Returns whether a regular file or symlink exists at `path`.
pub fn file_exists(path: &Utf8Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Removes a file if present. Missing files are not an error.
pub fn remove_file(path: &Utf8Path) -> Result<(), PathError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PathError::Remove {
            path: path.to_owned(),
            source: e,
        }),
    }
}

/// Creates a directory and all missing parents.
pub fn ensure_dir(path: &Utf8Path) -> Result<(), PathError> {
    std::fs::create_dir_all(path).map_err(|e| PathError::CreateDir {
        path: path.to_owned(),
        source: e,
    })
}

/// Replaces the file at `path` with `contents`.
///
/// Any stale file is removed first and the parent directory is created, so a
/// successful return means the path holds exactly the new contents. On write
/// failure no half-written file replaces a previously valid one because the
/// contents are written in a single call.
pub fn replace_file(path: &Utf8Path, contents: &str) -> Result<(), PathError> {
    remove_file(path)?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|e| PathError::Write {
        path: path.to_owned(),
        source: e,
    })
}

/// Creates or refreshes a symbolic link at `link` pointing to `target`.
pub fn symlink(target: &Utf8Path, link: &Utf8Path) -> Result<(), PathError> {
    if let Some(parent) = link.parent() {
        ensure_dir(parent)?;
    }
    remove_file(link)?;

    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let result = std::os::windows::fs::symlink_file(target, link);

    result.map_err(|e| PathError::Symlink {
        link: link.to_owned(),
        target: target.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_root(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_replace_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_root(&dir).join("nested/deep/out.ts");

        replace_file(&path, "export default 'x'\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export default 'x'\n"
        );
    }

    #[test]
    fn test_replace_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_root(&dir).join("out.ts");

        replace_file(&path, "old").unwrap();
        replace_file(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_file(&temp_root(&dir).join("absent")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_refreshes_existing_link() {
        let dir = tempfile::tempdir().unwrap();
        let root = temp_root(&dir);
        let first = root.join("first.ts");
        let second = root.join("second.ts");
        let link = root.join("dist/icons.ts");
        replace_file(&first, "one").unwrap();
        replace_file(&second, "two").unwrap();

        symlink(&first, &link).unwrap();
        symlink(&second, &link).unwrap();

        assert_eq!(std::fs::read_to_string(&link).unwrap(), "two");
    }
}
