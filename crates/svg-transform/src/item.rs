//! One discovered SVG icon.

use crate::pipeline;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\S*").unwrap());

/// Fallback markup used when a requested icon is missing: a generic info
/// glyph, run through the same pipeline as every real icon.
const DEFAULT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>"#;

/// One discovered icon: naming derived from its path, content already
/// normalized. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SvgItem {
    filename: String,
    name: String,
    title: String,
    full_path: Utf8PathBuf,
    path: String,
    content: Option<String>,
}

impl SvgItem {
    /// Builds an item from an absolute file path and the scan root.
    ///
    /// A trailing separator on `root` is tolerated; `path` always starts
    /// with `/`, which downstream path concatenation relies on.
    ///
    /// A failed read leaves `content` absent and logs a warning; the item is
    /// still usable for naming so the rest of the run proceeds.
    pub fn make(full_path: &Utf8Path, root: &Utf8Path) -> Self {
        let filename = full_path.file_name().unwrap_or_default().to_string();
        let path = full_path
            .as_str()
            .strip_prefix(root.as_str().trim_end_matches('/'))
            .unwrap_or(full_path.as_str())
            .to_string();
        let name = name_from_path(&path);
        let title = title_from_filename(&filename);

        let content = match std::fs::read_to_string(full_path) {
            Ok(raw) => Some(pipeline::transform(&raw, &title)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", full_path, e);
                None
            }
        };

        Self {
            filename,
            name,
            title,
            full_path: full_path.to_owned(),
            path,
            content,
        }
    }

    /// Builds the sentinel `default` item from fixed markup, no filesystem.
    pub fn default_svg() -> Self {
        let title = "Default".to_string();
        let content = pipeline::transform(DEFAULT_SVG, &title);

        Self {
            filename: String::new(),
            name: "default".to_string(),
            title,
            full_path: Utf8PathBuf::new(),
            path: String::new(),
            content: Some(content),
        }
    }

    /// Basename with extension, e.g. `youtube.svg`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Canonical lookup name, e.g. `social-youtube`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label, e.g. `Youtube`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute filesystem path.
    pub fn full_path(&self) -> &Utf8Path {
        &self.full_path
    }

    /// Path relative to the scan root, e.g. `/social/youtube.svg`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Normalized markup, or `None` when the source file could not be read.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Derives the canonical name from the root-stripped path.
///
/// Separators are normalized to `/`, the `.svg` extension and a leading `/`
/// are stripped, then only the FIRST remaining separator becomes a `-`.
/// Nesting beyond one level keeps its separators
/// (`/social/sub/youtube.svg` -> `social-sub/youtube`); lookup keys carry
/// that shape and consumers depend on it.
fn name_from_path(path: &str) -> String {
    let name = path.replace('\\', "/");
    let name = name.strip_suffix(".svg").unwrap_or(&name);
    let name = name.strip_prefix('/').unwrap_or(name);
    name.replacen('/', "-", 1)
}

/// Derives the title: extension stripped, hyphens to spaces, every word
/// capitalized with the remainder lowercased.
fn title_from_filename(filename: &str) -> String {
    let name = filename.strip_suffix(".svg").unwrap_or(filename);
    let name = name.replace('-', " ");

    RE_WORD
        .replace_all(&name, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_simple() {
        assert_eq!(name_from_path("/youtube.svg"), "youtube");
    }

    #[test]
    fn test_name_one_level() {
        assert_eq!(name_from_path("/social/youtube.svg"), "social-youtube");
    }

    #[test]
    fn test_name_nested_keeps_later_separators() {
        // Only the first separator is replaced; deeper nesting keeps `/`.
        assert_eq!(
            name_from_path("/social/sub/youtube.svg"),
            "social-sub/youtube"
        );
    }

    #[test]
    fn test_name_windows_separators() {
        assert_eq!(name_from_path(r"\social\youtube.svg"), "social-youtube");
    }

    #[test]
    fn test_title_single_word() {
        assert_eq!(title_from_filename("youtube.svg"), "Youtube");
    }

    #[test]
    fn test_title_hyphenated() {
        assert_eq!(title_from_filename("my-icon.svg"), "My Icon");
    }

    #[test]
    fn test_title_lowercases_tail() {
        assert_eq!(title_from_filename("ALERT-BOX.svg"), "Alert Box");
    }

    #[test]
    fn test_default_item() {
        let item = SvgItem::default_svg();
        assert_eq!(item.name(), "default");
        assert_eq!(item.title(), "Default");
        assert_eq!(item.path(), "");
        assert_eq!(item.full_path().as_str(), "");

        let content = item.content().unwrap();
        // Stroke-based glyph: the pipeline must not force a fill.
        assert!(content.contains(r#"stroke="currentColor""#));
        assert!(!content.contains(r#"fill="currentColor""#));
        assert!(content.contains("<title>Default</title>"));
    }

    #[test]
    fn test_make_tolerates_trailing_slash_root() {
        let item = SvgItem::make("/nonexistent/svg/a.svg".into(), "/nonexistent/svg/".into());
        assert_eq!(item.path(), "/a.svg");
        assert_eq!(item.name(), "a");
    }

    #[test]
    fn test_make_missing_file_keeps_naming() {
        let item = SvgItem::make("/nonexistent/social/youtube.svg".into(), "/nonexistent".into());
        assert_eq!(item.name(), "social-youtube");
        assert_eq!(item.title(), "Youtube");
        assert!(item.content().is_none());
    }
}
