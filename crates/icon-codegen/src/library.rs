//! The generated library module.

use crate::cache::icon_module_rel;
use crate::{CodegenError, ResolvedOptions, PACKAGE_NAME};
use camino::Utf8PathBuf;
use regex::Regex;
use std::sync::LazyLock;
use svg_transform::{SvgCollection, SvgItem};

/// Unquotes object keys in pretty-printed JSON so the emitted `options`
/// object reads like hand-written JS. String values never carry a trailing
/// colon, so the first-quote-to-colon match only ever hits keys.
static RE_JSON_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)":"#).unwrap());

/// Synthesis artifact for one generation run: the item list, the derived
/// type-name union and the fully rendered module source. Created after the
/// collection is complete, written once, then dropped.
pub struct LibraryFile<'a> {
    items: &'a [SvgItem],
    options: &'a ResolvedOptions,
    types: Vec<String>,
    source: String,
}

impl<'a> LibraryFile<'a> {
    /// Captures the collection and renders the module source.
    pub fn make(
        collection: &'a SvgCollection,
        options: &'a ResolvedOptions,
    ) -> Result<Self, CodegenError> {
        let items = collection.items();
        // One literal per item in collection order; duplicates stay in and
        // produce duplicate union members, harmless to the type checker.
        let types = items
            .iter()
            .map(|item| format!("'{}'", item.name()))
            .collect();

        let mut library = Self {
            items,
            options,
            types,
            source: String::new(),
        };
        library.source = library.render()?;
        Ok(library)
    }

    /// The quoted type literals, in collection order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// The exported `SvgName` union declaration.
    pub fn types_union(&self) -> String {
        format!("export type SvgName = {}", self.types.join(" | "))
    }

    /// The rendered module source.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn render(&self) -> Result<String, CodegenError> {
        let ext = self.options.extension();
        let mut lines: Vec<String> = vec![
            "/* eslint-disable */".into(),
            "/* prettier-ignore */".into(),
            "// @ts-nocheck".into(),
            "// Generated by svg-transformer-rs".into(),
        ];

        if self.options.use_types || self.options.nuxt {
            lines.push(self.types_union());
        }

        let json = serde_json::to_string_pretty(&self.options.library_view())?;
        let object = RE_JSON_KEY.replace_all(&json, "$1:");
        lines.push(format!("export const options = {object}"));

        lines.push(if self.options.use_types {
            "export const svgList: Record<SvgName, () => Promise<{ default: string }>> = {".into()
        } else {
            "export const svgList = {".into()
        });

        let library_file = self.options.library_dir.join(format!("icons.{ext}"));
        for item in self.items {
            let base = icon_module_rel(item, ext);
            let import_path = if self.options.nuxt {
                // Nuxt serves the cache tree from its own generated-files
                // directory, next to the library module.
                format!("./icons{base}")
            } else {
                let icon_path = Utf8PathBuf::from(icon_paths::normalize(&format!(
                    "{}{}",
                    self.options.cache_dir, base
                )));
                icon_paths::relative_import(&library_file, &icon_path)
            };
            lines.push(format!(
                "  '{}': () => import('{}'),",
                item.name(),
                import_path
            ));
        }

        lines.push("}".into());
        lines.push(String::new());
        lines.push(if self.options.use_types {
            "export async function importSvg(name: SvgName): Promise<string> {".into()
        } else {
            "export async function importSvg(name) {".into()
        });
        lines.push("  if (!svgList[name] && options.warning)".into());
        lines.push("    console.warn(`Icon ${name} not found`)".into());
        lines.push("  const icon = svgList[name] || svgList[\"default\"]".into());
        lines.push("  const svg = await icon()".into());
        lines.push(String::new());
        lines.push("  return svg.default".into());
        lines.push("}".into());

        if !self.options.nuxt {
            // Module-less consumers reach the API through a window namespace.
            lines.push(String::new());
            lines.push("if (typeof window !== 'undefined') {".into());
            lines.push("  window.svgt = window.svgt || {}".into());
            lines.push("  window.svgt.options = options".into());
            lines.push("  window.svgt.svgList = svgList".into());
            lines.push("  window.svgt.importSvg = importSvg".into());
            lines.push("}".into());
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    /// The real output path: Nuxt's generated-files directory under nuxt
    /// mode, the configured library directory otherwise.
    pub fn real_path(&self) -> Utf8PathBuf {
        let filename = format!("icons.{}", self.options.extension());
        if self.options.nuxt {
            self.options.nuxt_dir.join(filename)
        } else {
            self.options.library_dir.join(filename)
        }
    }

    /// Writes the rendered source to the real output path, replacing any
    /// stale file. Failure here is fatal to the generation run.
    pub fn write(&self) -> Result<Utf8PathBuf, CodegenError> {
        let path = self.real_path();
        icon_paths::replace_file(&path, &self.source)?;
        Ok(path)
    }

    /// Refreshes the symlink from the consuming package's dist directory to
    /// the real file, so the published import path always resolves to the
    /// freshly generated module. The real file stays in place if this fails.
    pub fn publish(&self) -> Result<Utf8PathBuf, CodegenError> {
        let link = self.options.root.join(format!(
            "node_modules/{}/dist/icons.{}",
            PACKAGE_NAME,
            self.options.extension()
        ));
        icon_paths::symlink(&self.real_path(), &link)?;
        Ok(link)
    }
}
