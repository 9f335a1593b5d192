//! Main orchestration logic.

use crate::cli::Args;
use crate::config::FileConfig;
use camino::Utf8PathBuf;
use icon_codegen::{
    ensure_gitignored, write_cache_modules, CodegenError, DefinitionFile, LibraryFile,
    ResolvedOptions,
};
use std::time::Instant;
use svg_transform::SvgCollection;
use thiserror::Error;

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A generated file could not be materialized.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Watch error.
    #[error("watch error: {0}")]
    WatchFailed(String),
}

/// Outcome of one generation run.
#[derive(Debug)]
pub struct RunSummary {
    /// Icons in the collection, including the synthetic `default`.
    pub icon_count: usize,
    /// Cache modules written.
    pub cached: usize,
    /// Where the library module landed.
    pub library_path: Utf8PathBuf,
}

/// Resolves configuration and runs generation, once or in watch mode.
pub async fn run(args: Args) -> Result<RunSummary, GeneratorError> {
    let root = if args.root.is_relative() {
        std::env::current_dir()
            .map(|p| Utf8PathBuf::try_from(p).unwrap_or_default())
            .unwrap_or_default()
            .join(&args.root)
    } else {
        args.root.clone()
    };

    let config = FileConfig::load(&root, args.config.as_deref());
    let options = config.resolve(&args, root);

    if args.watch {
        run_watch_mode(&args, &options).await
    } else {
        generate(&args, &options)
    }
}

/// One full generation pass: scan, cache, library, publish, declarations.
fn generate(args: &Args, options: &ResolvedOptions) -> Result<RunSummary, GeneratorError> {
    let start = Instant::now();

    let collection = SvgCollection::discover(&options.svg_dir);
    let cache_stats = write_cache_modules(&collection, options)?;

    let library = LibraryFile::make(&collection, options)?;
    let library_path = library.write()?;

    // A stale published link means downstream consumers import an old
    // module; worth a distinct warning, not worth failing the run.
    if let Err(e) = library.publish() {
        eprintln!("Warning: library written but not published: {}", e);
    }

    if options.definitions {
        DefinitionFile::write(&options.root)?;
    }

    if !args.no_gitignore && !options.nuxt {
        if let Err(e) = ensure_gitignored(&options.root, &gitignore_entries(options, &library_path))
        {
            eprintln!("Warning: failed to update .gitignore: {}", e);
        }
    }

    if !args.quiet {
        println!(
            "{} icons -> {} ({} cached, {} stale removed) in {:.0?}",
            collection.len(),
            library_path,
            cache_stats.written,
            cache_stats.stale_removed,
            start.elapsed()
        );
    }

    Ok(RunSummary {
        icon_count: collection.len(),
        cached: cache_stats.written,
        library_path,
    })
}

/// Root-relative `.gitignore` lines for the generated artifacts.
fn gitignore_entries(options: &ResolvedOptions, library_path: &Utf8PathBuf) -> Vec<String> {
    [
        icon_paths::root_relative(library_path, &options.root),
        format!(
            "{}/",
            icon_paths::root_relative(&options.cache_dir, &options.root)
        ),
        "icons.d.ts".to_string(),
    ]
    .iter()
    .map(|entry| entry.trim_start_matches("./").to_string())
    .collect()
}

/// Regenerates on every `.svg` change under the SVG directory.
async fn run_watch_mode(
    args: &Args,
    options: &ResolvedOptions,
) -> Result<RunSummary, GeneratorError> {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    println!("Starting watch mode...\n");

    let _summary = generate(args, options)?;

    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .map_err(|e| GeneratorError::WatchFailed(e.to_string()))?;

    watcher
        .watch(options.svg_dir.as_std_path(), RecursiveMode::Recursive)
        .map_err(|e| GeneratorError::WatchFailed(e.to_string()))?;

    println!("Watching {} for changes... (Ctrl+C to stop)\n", options.svg_dir);

    while let Some(event) = rx.recv().await {
        let svg_changed = event
            .paths
            .iter()
            .any(|p| p.extension().map(|ext| ext == "svg").unwrap_or(false));

        if svg_changed {
            println!("Icons changed, regenerating...\n");
            if let Err(e) = generate(args, options) {
                eprintln!("Error: {}", e);
            }
        }
    }

    Err(GeneratorError::WatchFailed(
        "watch channel closed unexpectedly".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_codegen::SvgOptions;

    #[test]
    fn test_gitignore_entries_are_root_relative() {
        let options = ResolvedOptions {
            root: "/app".into(),
            svg_dir: "/app/src/svg".into(),
            cache_dir: "/app/src/cache".into(),
            library_dir: "/app/src".into(),
            use_types: true,
            fallback: true,
            warning: true,
            global: false,
            nuxt: false,
            nuxt_dir: "/app/.nuxt".into(),
            definitions: true,
            svg: SvgOptions::default(),
        };

        let entries = gitignore_entries(&options, &"/app/src/icons.ts".into());
        assert_eq!(
            entries,
            vec!["src/icons.ts", "src/cache/", "icons.d.ts"]
        );
    }
}
