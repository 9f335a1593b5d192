//! The static type-declaration stub.

use crate::{CodegenError, PACKAGE_NAME};
use camino::{Utf8Path, Utf8PathBuf};

/// Writes `icons.d.ts` at the project root: a fixed module augmentation
/// registering the `SvgIcon` component property globally. Remove-then-write,
/// so repeated runs are idempotent.
pub struct DefinitionFile;

impl DefinitionFile {
    /// Path of the declaration stub for a project root.
    pub fn path(root: &Utf8Path) -> Utf8PathBuf {
        root.join("icons.d.ts")
    }

    /// Writes the stub, replacing any existing one.
    pub fn write(root: &Utf8Path) -> Result<Utf8PathBuf, CodegenError> {
        let path = Self::path(root);
        icon_paths::replace_file(&path, &Self::contents())?;
        Ok(path)
    }

    fn contents() -> String {
        [
            "/* eslint-disable */",
            "/* prettier-ignore */",
            "// @ts-nocheck",
            "// Generated by svg-transformer-rs",
            "export {}",
            "",
            "declare module '@vue/runtime-core' {",
            "  interface ComponentCustomProperties {",
            &format!(
                "    SvgIcon: typeof import('{PACKAGE_NAME}/components')['default']"
            ),
            "  }",
            "}",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let first = DefinitionFile::write(&root).unwrap();
        let once = std::fs::read_to_string(&first).unwrap();
        let second = DefinitionFile::write(&root).unwrap();
        let twice = std::fs::read_to_string(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(once, twice);
        assert!(once.contains("declare module '@vue/runtime-core' {"));
        assert!(once.contains("SvgIcon: typeof import('svg-transformer/components')['default']"));
    }
}
