use blockdoc::app::Workbench;
use blockdoc::kernel::services::adapters::{
    ensure_settings_file, ensure_store_dir, load_settings, FileStore,
};
use blockdoc::models::{excerpt, plain_text};
use std::io::{self, Write};
use std::path::PathBuf;

mod logging;

const LISTING_EXCERPT_CHARS: usize = 60;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "failed to create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let store_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => ensure_store_dir()?,
    };
    let storage = FileStore::open(&store_dir).map_err(io::Error::other)?;
    let workbench = Workbench::open(Box::new(storage), settings);
    let state = workbench.state();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", store_dir.display())?;
    if state.repo.documents().is_empty() {
        writeln!(out, "(no documents)")?;
    }
    for doc in state.repo.documents() {
        let marker = if state.selection.active_document() == Some(&doc.id) {
            '*'
        } else {
            ' '
        };
        let text = plain_text(&doc.content);
        writeln!(
            out,
            "{} {} [{}] {}",
            marker,
            doc.title,
            doc.id,
            excerpt(text.trim(), LISTING_EXCERPT_CHARS)
        )?;
        for block in state.repo.blocks_for(&doc.id) {
            let text = plain_text(&block.content);
            writeln!(
                out,
                "    - {} [{}] {}",
                block.title,
                block.id,
                excerpt(text.trim(), LISTING_EXCERPT_CHARS)
            )?;
        }
    }
    Ok(())
}
