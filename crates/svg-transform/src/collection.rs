//! Directory discovery.

use crate::SvgItem;
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use walkdir::WalkDir;

/// Ordered collection of icons for one generation run.
///
/// Order follows directory-walk order; duplicate names are kept as-is and the
/// later one wins once the generated lookup map is built. The synthetic
/// `default` item sits first so a real icon named `default` overrides it.
#[derive(Debug)]
pub struct SvgCollection {
    items: Vec<SvgItem>,
}

impl SvgCollection {
    /// Recursively walks `root` and builds an item per `.svg` file.
    ///
    /// The walk itself is sequential so the order is stable; reads and
    /// transforms run in parallel and are joined back in walk order. Symlink
    /// cycles are not guarded against.
    pub fn discover(root: &Utf8Path) -> Self {
        let paths: Vec<Utf8PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
            .filter(|p| p.extension() == Some("svg"))
            .collect();

        let mut items = vec![SvgItem::default_svg()];
        items.extend(
            paths
                .par_iter()
                .map(|path| SvgItem::make(path, root))
                .collect::<Vec<_>>(),
        );

        Self { items }
    }

    /// The items in walk order, `default` first.
    pub fn items(&self) -> &[SvgItem] {
        &self.items
    }

    /// Number of items, including the synthetic `default`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
