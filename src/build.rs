//! Build orchestration.
//!
//! A build is a single synchronous pass: load all records, compute the
//! aggregate view once, then render every page. Pages have no data
//! dependency on each other, so name and tag pages render in parallel.
//!
//! ```text
//! build_docs()
//!     │
//!     ├── load_corpus() ──────► RecordStore (read-only from here on)
//!     ├── AggregateStats::collect()
//!     ├── render index.md + overview.md
//!     └── rayon::join
//!             ├── names/<name>.md  (par_iter over records)
//!             └── tags/<tag>.md    (par_iter over tag groups)
//! ```

use crate::{
    config::CorpusConfig,
    loader::load_corpus,
    log,
    logger::ProgressBars,
    render::{render_index_page, render_name_page, render_overview_page, render_tag_page},
    stats::AggregateStats,
    store::RecordStore,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Render all documentation pages into the output directory.
pub fn build_docs(config: &'static CorpusConfig) -> Result<()> {
    let output = &config.build.output;

    log!("load"; "reading corpus from {}", config.build.names.display());
    let store = load_corpus(&config.build.names)?;
    let stats = AggregateStats::collect(&store);
    log!(
        "load";
        "{} names, {} categories, {} tags",
        stats.total_names(),
        stats.total_categories(),
        stats.total_tags()
    );

    prepare_output(output, config.build.clean)?;

    // Root pages first; both are cheap single documents
    let generated = chrono::Local::now().format("%Y-%m-%d").to_string();
    let index = render_index_page(&stats, &config.base.title, config.base.dd_version.as_deref(), &generated)?;
    write_page(&output.join("index.md"), &index)?;

    let overview = render_overview_page(&store, config.build.description_limit);
    write_page(&output.join("overview.md"), &overview)?;

    log!("render"; "building pages...");
    let progress = ProgressBars::new(&[
        ("names", store.len()),
        ("tags", stats.total_tags()),
    ]);

    let (names_result, tags_result) = rayon::join(
        || render_name_pages(&store, output, &progress),
        || render_tag_pages(&store, &stats, config, output, &progress),
    );
    progress.finish();

    names_result?;
    tags_result?;

    log!("build"; "done: {}", output.display());
    Ok(())
}

/// Load and validate the corpus without writing any output.
pub fn check_corpus(config: &'static CorpusConfig) -> Result<()> {
    let store = load_corpus(&config.build.names)?;
    let stats = AggregateStats::collect(&store);

    log!(
        "check";
        "{} names, {} categories, {} tags",
        stats.total_names(),
        stats.total_categories(),
        stats.total_tags()
    );
    for group in stats.groups() {
        log!("check"; "tag {}: {} names", group.tag, group.members.len());
    }
    log!("check"; "ok");
    Ok(())
}

/// One detail page per record, rendered in parallel.
fn render_name_pages(store: &RecordStore, output: &Path, progress: &ProgressBars) -> Result<()> {
    let names_dir = output.join("names");
    store.records().par_iter().try_for_each(|record| {
        let page = render_name_page(&record.name, store);
        write_page(&names_dir.join(format!("{}.md", record.name)), &page)?;
        progress.inc("names");
        Ok(())
    })
}

/// One category page per tag group, rendered in parallel.
fn render_tag_pages(
    store: &RecordStore,
    stats: &AggregateStats,
    config: &'static CorpusConfig,
    output: &Path,
    progress: &ProgressBars,
) -> Result<()> {
    let tags_dir = output.join("tags");
    stats.groups().par_iter().try_for_each(|group| {
        let page = render_tag_page(group, store, config.build.description_limit)?;
        write_page(&tags_dir.join(format!("{}.md", group.tag)), &page)?;
        progress.inc("tags");
        Ok(())
    })
}

/// Create (or clean and recreate) the output directory tree.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    for dir in [output.to_path_buf(), output.join("names"), output.join("tags")] {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Write one rendered page to disk.
fn write_page(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
