//! Generated-library synthesis for svg-transformer-rs.
//!
//! Consumes an [`svg_transform::SvgCollection`] and the resolved options and
//! materializes the build outputs:
//! - one cache module per icon (`export default '<svg ...>'`),
//! - the runtime library module `icons.ts`/`icons.js` (name-to-loader map,
//!   `options` object, `importSvg` accessor),
//! - the static `icons.d.ts` declaration stub,
//! - a symlink publishing the library into the consuming package's dist
//!   directory.

mod cache;
mod definition;
mod error;
mod gitignore;
mod library;
mod options;

pub use cache::{write_cache_modules, CacheStats};
pub use definition::DefinitionFile;
pub use error::CodegenError;
pub use gitignore::ensure_gitignored;
pub use library::LibraryFile;
pub use options::{ClearPolicy, ResolvedOptions, SvgOptions};

/// npm package name the generated library is published under; the symlink
/// target lives in this package's `dist` directory inside `node_modules`.
pub const PACKAGE_NAME: &str = "svg-transformer";
