//! `.gitignore` maintenance for generated artifacts.

use crate::CodegenError;
use camino::Utf8Path;
use icon_paths::PathError;

/// Ensures each entry appears in the project `.gitignore`, appending the
/// missing ones. The file is created if absent; existing lines are never
/// reordered or duplicated.
pub fn ensure_gitignored(root: &Utf8Path, entries: &[String]) -> Result<(), CodegenError> {
    let path = root.join(".gitignore");
    let existing = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(CodegenError::Read {
                path,
                source: e,
            })
        }
    };

    let present: Vec<&str> = existing.lines().map(str::trim).collect();
    let missing: Vec<&str> = entries
        .iter()
        .map(String::as_str)
        .filter(|entry| !present.contains(entry))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    for entry in missing {
        updated.push_str(entry);
        updated.push('\n');
    }

    std::fs::write(&path, &updated).map_err(|e| {
        CodegenError::Path(PathError::Write {
            path,
            source: e,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_creates_file_with_entries() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        ensure_gitignored(&root, &["src/icons.ts".into(), "src/cache/".into()]).unwrap();

        let content = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert_eq!(content, "src/icons.ts\nsrc/cache/\n");
    }

    #[test]
    fn test_appends_only_missing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        std::fs::write(root.join(".gitignore"), "node_modules\nsrc/icons.ts").unwrap();

        ensure_gitignored(&root, &["src/icons.ts".into(), "src/cache/".into()]).unwrap();

        let content = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert_eq!(content, "node_modules\nsrc/icons.ts\nsrc/cache/\n");
    }

    #[test]
    fn test_noop_when_all_present() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        std::fs::write(root.join(".gitignore"), "src/cache/\n").unwrap();

        ensure_gitignored(&root, &["src/cache/".into()]).unwrap();

        let content = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert_eq!(content, "src/cache/\n");
    }
}
