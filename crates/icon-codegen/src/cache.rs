//! Per-icon cache module materialization.
//!
//! Every icon with content becomes a tiny module under the cache directory
//! (`export default '<svg ...>'`), mirroring the icon's position in the scan
//! tree with the `.svg` extension swapped for the output extension. The
//! generated library imports these modules lazily.

use crate::{CodegenError, ResolvedOptions};
use camino::Utf8PathBuf;
use std::collections::HashSet;
use svg_transform::{SvgCollection, SvgItem};
use walkdir::WalkDir;

/// Counters for one cache materialization pass.
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    /// Modules written.
    pub written: usize,
    /// Items skipped because their source file could not be read.
    pub skipped_missing: usize,
    /// Stale modules removed (icons deleted since the previous run).
    pub stale_removed: usize,
}

/// Cache-relative module path for an item, e.g. `/social/youtube.ts`.
///
/// The sentinel `default` item has no filesystem path; it materializes at
/// `/default.<ext>` so the fallback loader always has a real module behind it.
pub(crate) fn icon_module_rel(item: &SvgItem, ext: &str) -> String {
    if item.path().is_empty() {
        format!("/default.{ext}")
    } else {
        item.path().replacen(".svg", &format!(".{ext}"), 1)
    }
}

/// Writes one cache module per icon and removes stale ones.
///
/// Items with absent content are skipped with a warning; the run proceeds.
pub fn write_cache_modules(
    collection: &SvgCollection,
    options: &ResolvedOptions,
) -> Result<CacheStats, CodegenError> {
    let ext = options.extension();
    let mut stats = CacheStats::default();
    let mut keep: HashSet<Utf8PathBuf> = HashSet::new();

    for item in collection.items() {
        let Some(content) = item.content() else {
            eprintln!(
                "Warning: no cache module for '{}' (source unreadable)",
                item.name()
            );
            stats.skipped_missing += 1;
            continue;
        };

        let rel = icon_module_rel(item, ext);
        let target = Utf8PathBuf::from(icon_paths::normalize(&format!(
            "{}{}",
            options.cache_dir, rel
        )));
        let module = format!("export default '{}'\n", escape_single_quoted(content));
        icon_paths::replace_file(&target, &module)?;
        keep.insert(target);
        stats.written += 1;
    }

    remove_stale(options, &keep, &mut stats);
    Ok(stats)
}

/// Removes `.ts`/`.js` modules left over from deleted icons, then prunes
/// directories that became empty. Walk order is contents-first so children go
/// before their parents.
fn remove_stale(options: &ResolvedOptions, keep: &HashSet<Utf8PathBuf>, stats: &mut CacheStats) {
    if !options.cache_dir.exists() {
        return;
    }

    for entry in WalkDir::new(&options.cache_dir)
        .follow_links(false)
        .contents_first(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Ok(path) = Utf8PathBuf::try_from(entry.path().to_path_buf()) else {
            continue;
        };
        if entry.file_type().is_file() {
            if matches!(path.extension(), Some("ts" | "js")) && !keep.contains(&path) {
                let _ = std::fs::remove_file(&path);
                stats.stale_removed += 1;
            }
        } else if entry.file_type().is_dir() && path != options.cache_dir {
            // Fails while non-empty, which is fine.
            let _ = std::fs::remove_dir(&path);
        }
    }
}

fn escape_single_quoted(content: &str) -> String {
    content.replace('\\', "\\\\").replace('\'', "\\'")
}
