//! SVG icon discovery and markup normalization.
//!
//! This crate turns a directory tree of `.svg` files into an ordered
//! collection of [`SvgItem`]s. Each item derives a canonical name and a
//! human-readable title from its filesystem path and runs its markup through
//! a fixed normalization pipeline (color inheritance, sizing, whitespace,
//! titles). The collection always carries a synthetic `default` item used as
//! the runtime fallback icon.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use svg_transform::SvgCollection;
//!
//! let collection = SvgCollection::discover(Utf8Path::new("./src/svg"));
//! for item in collection.items() {
//!     println!("{} -> {}", item.name(), item.title());
//! }
//! ```

mod collection;
mod item;
mod pipeline;

pub use collection::SvgCollection;
pub use item::SvgItem;
pub use pipeline::transform;
