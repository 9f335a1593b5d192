//! Path math and filesystem primitives for svg-transformer-rs.
//!
//! The generated library module imports each icon's cache module through a
//! relative path, so the contracts here (how a path is made root-relative,
//! how the relative import between two generated files is computed) are
//! consumed directly by the code generator. The filesystem side is a handful
//! of remove/ensure/write/symlink primitives with explicit errors.

mod error;
mod fs;
mod resolve;

pub use error::PathError;
pub use fs::{ensure_dir, file_exists, remove_file, replace_file, symlink};
pub use resolve::{normalize, relative_import, root_relative};
