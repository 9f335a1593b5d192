//! Resolved configuration.
//!
//! Partial/optional configuration never crosses into this crate: callers
//! merge their config surface with defaults once and hand over a fully
//! populated [`ResolvedOptions`], immutable for the duration of the run.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Policy for clearing an attribute at render time.
///
/// Consumed by the runtime component, not by the build-time pipeline; carried
/// through into the generated module's `options` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearPolicy {
    /// Leave the attribute alone.
    #[default]
    None,
    /// Clear it on the root element only.
    Parent,
    /// Clear it everywhere.
    All,
}

/// Per-SVG render toggles, serialized into the generated `options.svg`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_default: Option<String>,
    #[serde(default)]
    pub clear_size: ClearPolicy,
    #[serde(default)]
    pub clear_class: ClearPolicy,
    #[serde(default)]
    pub clear_style: ClearPolicy,
    #[serde(default)]
    pub current_color: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_style_default: Option<String>,
    #[serde(default)]
    pub size_inherit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Fully resolved options for one generation run.
///
/// All directories are absolute; relative configured values were resolved
/// against the project root at merge time.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Project root the generated paths are rewritten against.
    pub root: Utf8PathBuf,
    /// Directory scanned for `.svg` files.
    pub svg_dir: Utf8PathBuf,
    /// Directory the per-icon cache modules are written to.
    pub cache_dir: Utf8PathBuf,
    /// Directory the library module is written to (non-nuxt mode).
    pub library_dir: Utf8PathBuf,
    /// Emit TypeScript (`icons.ts`) instead of plain JS.
    pub use_types: bool,
    /// Fall back to the `default` icon when a name is missing.
    pub fallback: bool,
    /// Warn at runtime when a requested icon is missing.
    pub warning: bool,
    /// Register the runtime component globally.
    pub global: bool,
    /// Running inside a Nuxt-managed build.
    pub nuxt: bool,
    /// Nuxt's generated-files directory (`.nuxt`).
    pub nuxt_dir: Utf8PathBuf,
    /// Emit the `icons.d.ts` declaration stub.
    pub definitions: bool,
    /// Render-time SVG toggles.
    pub svg: SvgOptions,
}

impl ResolvedOptions {
    /// Output extension of the generated modules.
    pub fn extension(&self) -> &'static str {
        if self.use_types {
            "ts"
        } else {
            "js"
        }
    }

    /// The view of these options embedded in the generated module: path
    /// fields rewritten relative to the project root and prefixed `./`.
    pub(crate) fn library_view(&self) -> LibraryOptions<'_> {
        LibraryOptions {
            fallback: self.fallback,
            svg: &self.svg,
            warning: self.warning,
            cache_dir: icon_paths::root_relative(&self.cache_dir, &self.root),
            global: self.global,
            library_dir: icon_paths::root_relative(&self.library_dir, &self.root),
            svg_dir: icon_paths::root_relative(&self.svg_dir, &self.root),
            use_types: self.use_types,
        }
    }
}

/// Serialize-only shape of the exported `options` object. Field order here is
/// the field order in the generated file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LibraryOptions<'a> {
    pub fallback: bool,
    pub svg: &'a SvgOptions,
    pub warning: bool,
    pub cache_dir: String,
    pub global: bool,
    pub library_dir: String,
    pub svg_dir: String,
    pub use_types: bool,
}

#[cfg(test)]
pub(crate) fn fixture(root: &Utf8Path) -> ResolvedOptions {
    ResolvedOptions {
        root: root.to_owned(),
        svg_dir: root.join("src/svg"),
        cache_dir: root.join("src/cache"),
        library_dir: root.join("src"),
        use_types: true,
        fallback: true,
        warning: true,
        global: false,
        nuxt: false,
        nuxt_dir: root.join(".nuxt"),
        definitions: true,
        svg: SvgOptions::default(),
    }
}
