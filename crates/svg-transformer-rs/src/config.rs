//! Configuration loading and defaults merge.

use crate::cli::Args;
use camino::{Utf8Path, Utf8PathBuf};
use icon_codegen::{ResolvedOptions, SvgOptions};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "svg-transformer.config.json";

/// Raw, all-optional configuration as read from the config file.
///
/// This shape never leaves this module: [`FileConfig::resolve`] merges it
/// with CLI flags and defaults into a fully populated [`ResolvedOptions`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    /// Directory containing the SVG source files.
    pub svg_dir: Option<String>,

    /// Directory the per-icon cache modules are written to.
    pub cache_dir: Option<String>,

    /// Directory the library module is written to.
    pub library_dir: Option<String>,

    /// Emit TypeScript output.
    pub use_types: Option<bool>,

    /// Fall back to the `default` icon when a name is missing.
    pub fallback: Option<bool>,

    /// Warn at runtime when a requested icon is missing.
    pub warning: Option<bool>,

    /// Register the runtime component globally.
    pub global: Option<bool>,

    /// Running inside a Nuxt-managed build.
    pub nuxt: Option<bool>,

    /// Nuxt's generated-files directory.
    pub nuxt_dir: Option<String>,

    /// Emit the icons.d.ts declaration stub.
    pub definitions: Option<bool>,

    /// Render-time SVG toggles, carried into the generated options object.
    #[serde(default)]
    pub svg: SvgOptions,
}

impl FileConfig {
    /// Loads configuration from the project root, or from an explicit path.
    ///
    /// A missing file means defaults; a file that fails to parse is reported
    /// and treated as defaults so a typo never aborts generation. A missing
    /// file that was named explicitly still warns, since the user expected
    /// it to be read.
    pub fn load(root: &Utf8Path, explicit: Option<&Utf8Path>) -> Self {
        let path = match explicit {
            Some(path) if path.is_relative() => root.join(path),
            Some(path) => path.to_owned(),
            None => root.join(CONFIG_FILENAME),
        };

        if !path.exists() {
            if explicit.is_some() {
                eprintln!("Warning: config file {} not found, using defaults", path);
            }
            return Self::default();
        }

        match Self::parse_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", path, e);
                Self::default()
            }
        }
    }

    fn parse_file(path: &Utf8Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        let content = remove_json_comments(&content);
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    /// Merges this config with CLI flags and defaults into the resolved
    /// options. CLI flags win over the file; the file wins over defaults.
    /// Relative paths resolve against the project root.
    pub fn resolve(self, args: &Args, root: Utf8PathBuf) -> ResolvedOptions {
        let svg_dir = args
            .svg_dir
            .as_ref()
            .map(|p| p.to_string())
            .or(self.svg_dir)
            .unwrap_or_else(|| "./src/svg".to_string());
        let cache_dir = args
            .cache_dir
            .as_ref()
            .map(|p| p.to_string())
            .or(self.cache_dir)
            .unwrap_or_else(|| "./src/cache".to_string());
        let library_dir = args
            .library_dir
            .as_ref()
            .map(|p| p.to_string())
            .or(self.library_dir)
            .unwrap_or_else(|| "./src".to_string());
        let nuxt_dir = self.nuxt_dir.unwrap_or_else(|| "./.nuxt".to_string());

        let use_types = if args.js {
            false
        } else {
            self.use_types.unwrap_or(true)
        };
        let definitions = if args.no_definitions {
            false
        } else {
            self.definitions.unwrap_or(true)
        };

        ResolvedOptions {
            svg_dir: resolve_dir(&root, &svg_dir),
            cache_dir: resolve_dir(&root, &cache_dir),
            library_dir: resolve_dir(&root, &library_dir),
            nuxt_dir: resolve_dir(&root, &nuxt_dir),
            use_types,
            fallback: self.fallback.unwrap_or(true),
            warning: self.warning.unwrap_or(true),
            global: self.global.unwrap_or(false),
            nuxt: args.nuxt || self.nuxt.unwrap_or(false),
            definitions,
            svg: self.svg,
            root,
        }
    }
}

/// Resolves a configured directory against the project root.
fn resolve_dir(root: &Utf8Path, value: &str) -> Utf8PathBuf {
    let path = Utf8Path::new(value);
    if path.is_absolute() {
        return path.to_owned();
    }
    let trimmed = value.trim_start_matches("./");
    root.join(trimmed)
}

/// Removes single-line and multi-line comments from JSON.
fn remove_json_comments(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '"' {
                in_string = false;
            } else if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
        } else if c == '"' {
            result.push(c);
            in_string = true;
        } else if c == '/' {
            match chars.peek() {
                Some('/') => {
                    chars.next();
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {
                    result.push(c);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
